// Data types for Scan module

use crate::exec::ExecutionResult;
use crate::parse::{
    DigReport, NiktoScan, NmapScan, NslookupScan, SqlmapScan, WhatwebScan, WpscanScan, XssScan,
};
use serde::Serialize;

/// A normalized result together with the verbatim captured streams.
///
/// Raw output always rides along for auditability; the normalized fields
/// flatten beside it so the serialized form reads as one record.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport<T> {
    #[serde(flatten)]
    pub normalized: T,
    pub raw_output: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub raw_stderr: String,
}

impl<T> ScanReport<T> {
    pub fn new(normalized: T, execution: &ExecutionResult) -> Self {
        Self {
            normalized,
            raw_output: execution.stdout.clone(),
            raw_stderr: execution.stderr.clone(),
        }
    }
}

/// Short-mode DNS lookup: one answer record per line, verbatim
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShortLookup {
    pub records: Vec<String>,
}

/// The completed report for one scan, one variant per tool
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ScanResult {
    Nmap(ScanReport<NmapScan>),
    Sqlmap(ScanReport<SqlmapScan>),
    Nikto(ScanReport<NiktoScan>),
    Whatweb(ScanReport<WhatwebScan>),
    Nslookup(ScanReport<NslookupScan>),
    Dig(ScanReport<DigReport>),
    DigShort(ScanReport<ShortLookup>),
    Xsstrike(ScanReport<XssScan>),
    Wpscan(ScanReport<WpscanScan>),
}
