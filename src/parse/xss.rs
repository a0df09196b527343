// XSS scan output parser

use crate::parse::dedup_capped;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static VULN_ENDPOINT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)vulnerable (?:webpage|component):?\s*(\S+)").unwrap());
static PAYLOAD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)payload:\s*(.+)").unwrap());
static TESTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:testing|scanning|crawling)\s+(https?://\S+)").unwrap());
static VULN_MARKER: &str = "vulnerable";

pub const MAX_PAYLOADS: usize = 10;
pub const MAX_TESTED: usize = 20;

/// Normalized XSS scan result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XssScan {
    pub vulnerable: bool,
    pub vulnerable_endpoints: Vec<String>,
    pub payloads: Vec<String>,
    pub tested_endpoints: Vec<String>,
}

/// Extract vulnerable endpoints, payloads, and coverage from scanner output.
///
/// Payload and tested-endpoint lists are deduplicated and capped so a
/// chatty crawl cannot grow the result without bound.
pub fn parse_xss(raw: &str) -> XssScan {
    let vulnerable_endpoints = dedup_capped(
        VULN_ENDPOINT_RE
            .captures_iter(raw)
            .map(|caps| caps[1].trim().to_string()),
        usize::MAX,
    );

    let payloads = dedup_capped(
        PAYLOAD_RE
            .captures_iter(raw)
            .map(|caps| caps[1].trim().to_string()),
        MAX_PAYLOADS,
    );

    let tested_endpoints = dedup_capped(
        TESTED_RE
            .captures_iter(raw)
            .map(|caps| caps[1].trim().to_string()),
        MAX_TESTED,
    );

    let vulnerable =
        !vulnerable_endpoints.is_empty() || raw.to_lowercase().contains(VULN_MARKER);

    XssScan {
        vulnerable,
        vulnerable_endpoints,
        payloads,
        tested_endpoints,
    }
}
