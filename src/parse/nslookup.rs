// Basic DNS lookup output parser

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SERVER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Server:\s*(.+)").unwrap());
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^Address:\s*(.+)$").unwrap());
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Name:\s*(.+)").unwrap());

/// Normalized basic DNS lookup result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NslookupScan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    pub addresses: Vec<String>,
    pub names: Vec<String>,
}

/// Extract the responding server, address lines, and `Name:` records.
pub fn parse_nslookup(raw: &str) -> NslookupScan {
    NslookupScan {
        server: SERVER_RE
            .captures(raw)
            .map(|caps| caps[1].trim().to_string()),
        addresses: ADDRESS_RE
            .captures_iter(raw)
            .map(|caps| caps[1].trim().to_string())
            .collect(),
        names: NAME_RE
            .captures_iter(raw)
            .map(|caps| caps[1].trim().to_string())
            .collect(),
    }
}
