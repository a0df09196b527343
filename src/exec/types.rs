// Data types for Exec module

use serde::{Deserialize, Serialize};

/// Captured outcome of one subprocess invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Whether the process exited with code 0
    pub succeeded: bool,
    /// Exit code, None when the process was killed or never exited
    pub exit_code: Option<i32>,
    /// Captured stdout, lossily decoded
    pub stdout: String,
    /// Captured stderr, lossily decoded
    pub stderr: String,
    /// Whether the wall-clock timeout fired
    pub timed_out: bool,
}

impl ExecutionResult {
    /// Result for an invocation cut short by its timeout
    pub fn timed_out() -> Self {
        Self {
            succeeded: false,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            timed_out: true,
        }
    }
}
