// Error types for Scan module

use crate::exec::ExecError;
use crate::tools::{ToolKind, ValidationError};
use thiserror::Error;

/// Scan failure kinds, distinct so a boundary can map each to its own
/// status: validation and execution failures are caller/internal errors,
/// tool failures carry the tool's stderr, timeouts stand alone.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("{tool} timed out after {timeout_secs}s")]
    Timeout { tool: ToolKind, timeout_secs: u64 },

    #[error("{tool} failed with exit code {exit_code}: {stderr}")]
    ToolFailure {
        tool: ToolKind,
        exit_code: i32,
        stderr: String,
    },

    #[error("Failed to run {tool}: {source}")]
    Exec {
        tool: ToolKind,
        #[source]
        source: ExecError,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
