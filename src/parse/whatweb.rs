// Fingerprinting tool output parser

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Normalized fingerprinting result
///
/// The tool emits one JSON object per line. Decoding is all-or-nothing:
/// a single malformed line empties the result list and raises the
/// degradation flag, so callers never see a silently partial report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhatwebScan {
    pub results: Vec<serde_json::Value>,
    pub parse_error: bool,
}

pub fn parse_whatweb(raw: &str) -> WhatwebScan {
    let mut results = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str(line) {
            Ok(value) => results.push(value),
            Err(e) => {
                warn!(error = %e, "undecodable fingerprint line, discarding results");
                return WhatwebScan {
                    results: Vec::new(),
                    parse_error: true,
                };
            }
        }
    }

    WhatwebScan {
        results,
        parse_error: false,
    }
}
