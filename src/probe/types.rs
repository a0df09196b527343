// Data types for Probe module

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Readiness of one known tool, recomputed on demand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolAvailability {
    pub name: String,
    pub available: bool,
}

/// Overall service readiness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => f.write_str("healthy"),
            HealthStatus::Degraded => f.write_str("degraded"),
        }
    }
}

/// Aggregated availability report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub tools: BTreeMap<String, bool>,
}

impl HealthReport {
    pub fn from_probes(probes: Vec<ToolAvailability>) -> Self {
        let status = if probes.iter().all(|p| p.available) {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        };
        let tools = probes.into_iter().map(|p| (p.name, p.available)).collect();
        Self { status, tools }
    }
}
