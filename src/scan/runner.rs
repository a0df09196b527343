// Scan runner - dispatch, execution, and per-tool result policy

use crate::exec::{execute, ExecutionResult};
use crate::parse;
use crate::scan::config::ScanConfig;
use crate::scan::error::{Result, ScanError};
use crate::scan::types::{ScanReport, ScanResult, ShortLookup};
use crate::tools::{build_args, ScanRequest, ToolKind};
use tracing::info;

/// Run one scan end to end: validate, build the argv, execute under the
/// tool's timeout, then normalize the output under the tool's policy.
///
/// This is the single suspension point per request; nothing here is shared
/// across invocations, so concurrent scans only contend on the OS.
pub async fn run(request: &ScanRequest, config: &ScanConfig) -> Result<ScanResult> {
    request.validate()?;

    let tool = request.kind();
    let argv = build_args(request, &config.paths);
    let timeout_secs = config.timeouts.for_tool(tool);

    info!(tool = %tool, timeout_secs, "starting scan");

    let execution = execute(&argv, timeout_secs, &config.exec)
        .await
        .map_err(|source| ScanError::Exec { tool, source })?;

    if execution.timed_out {
        return Err(ScanError::Timeout { tool, timeout_secs });
    }

    let result = match request {
        ScanRequest::Nmap(_) => {
            require_success(tool, &execution)?;
            ScanResult::Nmap(ScanReport::new(parse::parse_nmap(&execution.stdout), &execution))
        }
        ScanRequest::Sqlmap(_) => {
            require_success(tool, &execution)?;
            ScanResult::Sqlmap(ScanReport::new(
                parse::parse_sqlmap(&execution.stdout),
                &execution,
            ))
        }
        ScanRequest::Nikto(_) => {
            require_success(tool, &execution)?;
            ScanResult::Nikto(ScanReport::new(
                parse::parse_nikto(&execution.stdout),
                &execution,
            ))
        }
        ScanRequest::Whatweb(_) => {
            // May emit partial JSON lines before failing; parse whatever
            // arrived and only fail on an empty capture.
            require_output_or_success(tool, &execution)?;
            ScanResult::Whatweb(ScanReport::new(
                parse::parse_whatweb(&execution.stdout),
                &execution,
            ))
        }
        ScanRequest::Nslookup(_) => {
            if !lookup_completed(&execution) {
                return Err(tool_failure(tool, &execution));
            }
            ScanResult::Nslookup(ScanReport::new(
                parse::parse_nslookup(&execution.stdout),
                &execution,
            ))
        }
        ScanRequest::Dig(r) => {
            require_success(tool, &execution)?;
            if r.short {
                let records = parse::parse_dig_short(&execution.stdout);
                ScanResult::DigShort(ScanReport::new(ShortLookup { records }, &execution))
            } else {
                ScanResult::Dig(ScanReport::new(parse::parse_dig(&execution.stdout), &execution))
            }
        }
        ScanRequest::Xsstrike(_) => {
            require_success(tool, &execution)?;
            ScanResult::Xsstrike(ScanReport::new(
                parse::parse_xss(&execution.stdout),
                &execution,
            ))
        }
        ScanRequest::Wpscan(_) => {
            require_output_or_success(tool, &execution)?;
            ScanResult::Wpscan(ScanReport::new(
                parse::parse_wpscan(&execution.stdout),
                &execution,
            ))
        }
    };

    info!(tool = %tool, exit_code = execution.exit_code.unwrap_or(-1), "scan completed");
    Ok(result)
}

/// Default policy: any non-zero exit is a tool-reported failure.
fn require_success(tool: ToolKind, execution: &ExecutionResult) -> Result<()> {
    if !execution.succeeded {
        return Err(tool_failure(tool, execution));
    }
    Ok(())
}

/// Lenient policy for tools that emit a usable report before failing:
/// only an empty capture turns a non-zero exit into a failure.
fn require_output_or_success(tool: ToolKind, execution: &ExecutionResult) -> Result<()> {
    if execution.succeeded || !execution.stdout.trim().is_empty() {
        return Ok(());
    }
    Err(tool_failure(tool, execution))
}

/// Basic DNS lookup policy: exit 1 is "name not found" and still carries
/// usable output, so 0 and 1 both count as completions.
fn lookup_completed(execution: &ExecutionResult) -> bool {
    matches!(execution.exit_code, Some(0) | Some(1))
}

fn tool_failure(tool: ToolKind, execution: &ExecutionResult) -> ScanError {
    ScanError::ToolFailure {
        tool,
        exit_code: execution.exit_code.unwrap_or(-1),
        stderr: execution.stderr.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn execution(exit_code: Option<i32>, stdout: &str, stderr: &str) -> ExecutionResult {
        ExecutionResult {
            succeeded: exit_code == Some(0),
            exit_code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            timed_out: false,
        }
    }

    #[test]
    fn strict_policy_rejects_nonzero_exit() {
        assert!(require_success(ToolKind::Nmap, &execution(Some(0), "out", "")).is_ok());

        let err = require_success(ToolKind::Nmap, &execution(Some(1), "out", "boom")).unwrap_err();
        match err {
            ScanError::ToolFailure {
                tool,
                exit_code,
                stderr,
            } => {
                assert_eq!(tool, ToolKind::Nmap);
                assert_eq!(exit_code, 1);
                assert_eq!(stderr, "boom");
            }
            other => panic!("expected ToolFailure, got {other:?}"),
        }
    }

    #[test]
    fn lenient_policy_keeps_partial_output() {
        let partial = execution(Some(4), "{\"partial\": true}", "died midway");
        assert!(require_output_or_success(ToolKind::Wpscan, &partial).is_ok());

        let silent = execution(Some(4), "  \n", "died early");
        assert!(matches!(
            require_output_or_success(ToolKind::Wpscan, &silent),
            Err(ScanError::ToolFailure { .. })
        ));
    }

    #[test]
    fn lookup_tolerates_name_not_found() {
        assert!(lookup_completed(&execution(Some(0), "", "")));
        assert!(lookup_completed(&execution(Some(1), "server can't find x", "")));
        assert!(!lookup_completed(&execution(Some(2), "", "")));
        assert!(!lookup_completed(&execution(None, "", "")));
    }
}
