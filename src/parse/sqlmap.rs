// Injection scan output parser

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static PARAMETER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Parameter: (.+?) \((.+?)\)").unwrap());
static DB_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)available databases \[\d+\]:(.*?)(?:\n\n|\z)").unwrap());
static DB_ENTRY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\*\] (.+)").unwrap());

/// Normalized injection scan result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SqlmapScan {
    pub vulnerable: bool,
    pub injection_points: Vec<InjectionPoint>,
    pub databases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjectionPoint {
    pub parameter: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Extract injection findings from raw sqlmap output.
///
/// The vulnerability flag keys off the tool's own verdict phrases; the
/// enumerated database list only appears when the scan requested it.
pub fn parse_sqlmap(raw: &str) -> SqlmapScan {
    let mut scan = SqlmapScan::default();

    let lowered = raw.to_lowercase();
    scan.vulnerable = lowered.contains("is vulnerable") || lowered.contains("injectable");

    scan.injection_points = PARAMETER_RE
        .captures_iter(raw)
        .map(|caps| InjectionPoint {
            parameter: caps[1].to_string(),
            kind: caps[2].to_string(),
        })
        .collect();

    if let Some(block) = DB_BLOCK_RE.captures(raw) {
        scan.databases = DB_ENTRY_RE
            .captures_iter(&block[1])
            .map(|caps| caps[1].trim().to_string())
            .collect();
    }

    scan
}
