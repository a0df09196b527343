// Web server scan output parser

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static TARGET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Testing: (.+)").unwrap());
static SERVER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Server: (.+)").unwrap());
static FINDING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+ (.+)").unwrap());

/// Normalized web server scan result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NiktoScan {
    pub target: String,
    pub findings: Vec<String>,
    pub server_info: ServerInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

/// Extract the tested target, server banner, and `+`-prefixed finding lines.
pub fn parse_nikto(raw: &str) -> NiktoScan {
    let mut scan = NiktoScan::default();

    if let Some(caps) = TARGET_RE.captures(raw) {
        scan.target = caps[1].trim().to_string();
    }

    if let Some(caps) = SERVER_RE.captures(raw) {
        scan.server_info.server = Some(caps[1].trim().to_string());
    }

    scan.findings = FINDING_RE
        .captures_iter(raw)
        .map(|caps| caps[1].trim().to_string())
        .collect();

    scan
}
