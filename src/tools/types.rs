// Request types for Tools module

use crate::tools::error::{Result, ValidationError};
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// Paths for tools that are not plain executables on PATH
#[derive(Debug, Clone)]
pub struct ToolPaths {
    /// Python interpreter used to launch script-based tools
    pub python_bin: String,
    /// Location of the XSStrike entry script
    pub xsstrike_script: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            python_bin: String::from("python3"),
            xsstrike_script: String::from("/opt/XSStrike/xsstrike.py"),
        }
    }
}

/// Nmap scan intensity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanType {
    #[default]
    Basic,
    Service,
    Vuln,
    Full,
}

/// Network scan request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NmapRequest {
    /// Target IP or hostname
    pub target: String,
    /// Port range, e.g. "80,443" or "1-1000"
    #[serde(default)]
    pub ports: Option<String>,
    #[serde(default)]
    pub scan_type: ScanType,
}

/// SQL injection scan request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlmapRequest {
    /// Target URL
    pub url: String,
    /// POST body forwarded to the tool
    #[serde(default)]
    pub data: Option<String>,
    /// Cookie string
    #[serde(default)]
    pub cookie: Option<String>,
    /// Level of tests (1-5)
    #[serde(default = "default_one")]
    pub level: u8,
    /// Risk of tests (1-3)
    #[serde(default = "default_one")]
    pub risk: u8,
}

/// Web server scan request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NiktoRequest {
    /// Target host
    pub target: String,
    #[serde(default = "default_http_port")]
    pub port: u16,
    #[serde(default)]
    pub ssl: bool,
}

/// Technology fingerprinting request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatwebRequest {
    /// Target URL
    pub target: String,
    /// Aggression level (1-4)
    #[serde(default = "default_one")]
    pub aggression: u8,
}

/// Basic DNS lookup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NslookupRequest {
    pub domain: String,
    /// Query type, e.g. "MX" or "TXT"
    #[serde(default)]
    pub record_type: Option<String>,
    /// Nameserver to query instead of the system default
    #[serde(default)]
    pub nameserver: Option<String>,
}

/// Detailed DNS lookup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigRequest {
    pub domain: String,
    #[serde(default = "default_record_type")]
    pub record_type: String,
    #[serde(default)]
    pub nameserver: Option<String>,
    /// Return only the answer data, one record per line
    #[serde(default)]
    pub short: bool,
}

/// XSS scan request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XssRequest {
    /// Target URL
    pub url: String,
    /// Crawl outward from the target
    #[serde(default)]
    pub crawl: bool,
    #[serde(default = "default_threads")]
    pub threads: u8,
    #[serde(default = "default_xss_timeout")]
    pub timeout_secs: u8,
    /// Payload vector forwarded to the scanner
    #[serde(default)]
    pub data: Option<String>,
}

/// WordPress scan request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WpscanRequest {
    /// Target URL
    pub url: String,
    /// Enumeration categories, e.g. "vp" (vulnerable plugins), "u" (users)
    #[serde(default = "default_enumerate")]
    pub enumerate: Vec<String>,
    /// Use aggressive plugin detection
    #[serde(default)]
    pub aggressive: bool,
    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_one() -> u8 {
    1
}

fn default_http_port() -> u16 {
    80
}

fn default_record_type() -> String {
    String::from("A")
}

fn default_threads() -> u8 {
    10
}

fn default_xss_timeout() -> u8 {
    10
}

fn default_enumerate() -> Vec<String> {
    vec![String::from("vp"), String::from("u")]
}

/// A validated scan request for exactly one tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ScanRequest {
    Nmap(NmapRequest),
    Sqlmap(SqlmapRequest),
    Nikto(NiktoRequest),
    Whatweb(WhatwebRequest),
    Nslookup(NslookupRequest),
    Dig(DigRequest),
    Xsstrike(XssRequest),
    Wpscan(WpscanRequest),
}

impl ScanRequest {
    pub fn kind(&self) -> ToolKind {
        match self {
            ScanRequest::Nmap(_) => ToolKind::Nmap,
            ScanRequest::Sqlmap(_) => ToolKind::Sqlmap,
            ScanRequest::Nikto(_) => ToolKind::Nikto,
            ScanRequest::Whatweb(_) => ToolKind::Whatweb,
            ScanRequest::Nslookup(_) => ToolKind::Nslookup,
            ScanRequest::Dig(_) => ToolKind::Dig,
            ScanRequest::Xsstrike(_) => ToolKind::Xsstrike,
            ScanRequest::Wpscan(_) => ToolKind::Wpscan,
        }
    }

    /// Check required fields and numeric ranges.
    ///
    /// Builders are only handed requests that passed this check, which keeps
    /// out-of-contract values out of the argument vector entirely.
    pub fn validate(&self) -> Result<()> {
        match self {
            ScanRequest::Nmap(r) => require_non_empty("target", &r.target),
            ScanRequest::Sqlmap(r) => {
                require_non_empty("url", &r.url)?;
                require_range("level", r.level, 1, 5)?;
                require_range("risk", r.risk, 1, 3)
            }
            ScanRequest::Nikto(r) => {
                require_non_empty("target", &r.target)?;
                require_range("port", r.port, 1, u16::MAX as i64)
            }
            ScanRequest::Whatweb(r) => {
                require_non_empty("target", &r.target)?;
                require_range("aggression", r.aggression, 1, 4)
            }
            ScanRequest::Nslookup(r) => require_non_empty("domain", &r.domain),
            ScanRequest::Dig(r) => {
                require_non_empty("domain", &r.domain)?;
                require_non_empty("record_type", &r.record_type)
            }
            ScanRequest::Xsstrike(r) => {
                require_non_empty("url", &r.url)?;
                require_range("threads", r.threads, 1, u8::MAX as i64)?;
                require_range("timeout_secs", r.timeout_secs, 1, u8::MAX as i64)
            }
            ScanRequest::Wpscan(r) => {
                require_non_empty("url", &r.url)?;
                if r.enumerate.is_empty() {
                    return Err(ValidationError::EmptyField("enumerate"));
                }
                Ok(())
            }
        }
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

fn require_range<T: Into<i64> + Copy>(field: &'static str, value: T, min: i64, max: i64) -> Result<()> {
    let v = value.into();
    if v < min || v > max {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value: v,
        });
    }
    Ok(())
}
