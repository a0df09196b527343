// Subprocess runner

use crate::exec::config::ExecConfig;
use crate::exec::error::{ExecError, Result};
use crate::exec::types::ExecutionResult;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Run `argv` with a wall-clock timeout and capture its output.
///
/// The first element is the executable, resolved through `PATH`. Arguments
/// are passed as a vector and never go through a shell, so target and
/// parameter strings cannot be used for injection. Undecodable bytes in
/// either stream are replaced rather than failing the call.
///
/// A timeout kills the child and yields `timed_out: true`; a process that
/// cannot be spawned at all is an `ExecError`, not an `ExecutionResult`.
pub async fn execute(
    argv: &[String],
    timeout_secs: u64,
    config: &ExecConfig,
) -> Result<ExecutionResult> {
    let program = argv.first().ok_or(ExecError::EmptyCommand)?;
    let start = Instant::now();

    debug!(command = %argv.join(" "), timeout_secs, "spawning process");

    let mut cmd = Command::new(program);
    cmd.args(&argv[1..])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd
        .spawn()
        .map_err(|e| ExecError::SpawnFailed(program.clone(), e.to_string()))?;

    let output = match timeout(Duration::from_secs(timeout_secs), child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            return Err(ExecError::OutputCaptureFailed(
                program.clone(),
                e.to_string(),
            ));
        }
        Err(_) => {
            // Dropping the output future kills the child via kill_on_drop
            warn!(
                command = %program,
                timeout_secs,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "process timed out"
            );
            return Ok(ExecutionResult::timed_out());
        }
    };

    let stdout = truncate_lossy(&output.stdout, config.max_output_bytes);
    let stderr = truncate_lossy(&output.stderr, config.max_output_bytes);
    let exit_code = output.status.code();

    info!(
        command = %program,
        exit_code = exit_code.unwrap_or(-1),
        duration_ms = start.elapsed().as_millis() as u64,
        stdout_bytes = stdout.len(),
        stderr_bytes = stderr.len(),
        "process completed"
    );

    Ok(ExecutionResult {
        succeeded: output.status.success(),
        exit_code,
        stdout,
        stderr,
        timed_out: false,
    })
}

/// Lossily decode a captured stream, keeping at most `max_bytes` of it.
fn truncate_lossy(bytes: &[u8], max_bytes: usize) -> String {
    let slice = if bytes.len() > max_bytes {
        &bytes[..max_bytes]
    } else {
        bytes
    };
    String::from_utf8_lossy(slice).into_owned()
}
