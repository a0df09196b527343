// Exec configuration

/// Execution constraints shared by all invocations
#[derive(Debug, Clone)]
pub struct ExecConfig {
    /// Maximum captured size in bytes for each of stdout and stderr
    pub max_output_bytes: usize,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            max_output_bytes: 1048576, // 1MB
        }
    }
}
