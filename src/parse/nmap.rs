// Network scan output parser

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HOST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Nmap scan report for (.+)").unwrap());
static PORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)/(\w+)\s+(\w+)\s+(.+)").unwrap());
static HOST_UP_MARKER: &str = "Host is up";

/// Normalized network scan result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NmapScan {
    pub hosts: Vec<NmapHost>,
    pub summary: NmapSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NmapHost {
    pub host: String,
    pub ports: Vec<NmapPort>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NmapPort {
    pub port: u16,
    pub protocol: String,
    pub state: String,
    pub service: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NmapSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Extract the scanned host and its open-port table from raw nmap output.
pub fn parse_nmap(raw: &str) -> NmapScan {
    let mut scan = NmapScan::default();

    let ports: Vec<NmapPort> = PORT_RE
        .captures_iter(raw)
        .filter_map(|caps| {
            Some(NmapPort {
                port: caps[1].parse().ok()?,
                protocol: caps[2].to_string(),
                state: caps[3].to_string(),
                service: caps[4].trim().to_string(),
            })
        })
        .collect();

    if let Some(caps) = HOST_RE.captures(raw) {
        scan.hosts.push(NmapHost {
            host: caps[1].trim().to_string(),
            ports,
        });
    }

    if raw.contains(HOST_UP_MARKER) {
        scan.summary.status = Some("up".to_string());
    }

    scan
}
