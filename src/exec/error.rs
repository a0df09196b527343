// Error types for Exec module

use thiserror::Error;

/// Exec error types
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Empty command line")]
    EmptyCommand,

    #[error("Failed to spawn '{0}': {1}")]
    SpawnFailed(String, String),

    #[error("Failed to capture output of '{0}': {1}")]
    OutputCaptureFailed(String, String),
}

pub type Result<T> = std::result::Result<T, ExecError>;
