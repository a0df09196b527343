// Probe module - per-tool availability checks

pub mod types;

pub use types::{HealthReport, HealthStatus, ToolAvailability};

use crate::exec::execute;
use crate::scan::ScanConfig;
use crate::tools::ToolKind;
use futures::future::join_all;
use tracing::{debug, info};

/// Probe every known tool and aggregate the outcome.
///
/// Each probe is a short version invocation under its own timeout, so one
/// hung tool cannot stall the whole check. Any probe error counts as the
/// tool being unavailable, never as a failure of the check itself.
pub async fn check_health(config: &ScanConfig) -> HealthReport {
    let probes = ToolKind::ALL.iter().map(|kind| probe_tool(*kind, config));
    let tools: Vec<ToolAvailability> = join_all(probes).await;

    let report = HealthReport::from_probes(tools);
    info!(status = %report.status, "availability check completed");
    report
}

/// Check a single tool by running its version probe.
pub async fn probe_tool(kind: ToolKind, config: &ScanConfig) -> ToolAvailability {
    let argv = kind.probe_argv(&config.paths);

    let available = match execute(&argv, config.probe_timeout_secs, &config.exec).await {
        Ok(result) => result.succeeded,
        Err(e) => {
            debug!(tool = %kind, error = %e, "probe failed");
            false
        }
    };

    ToolAvailability {
        name: kind.name().to_string(),
        available,
    }
}
