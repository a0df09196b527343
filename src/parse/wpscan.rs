// CMS scan output parser

use crate::parse::dedup_capped;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)WordPress version (\d+[\d.]*)").unwrap());
static VULN_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*\[!\]\s*(.+)$").unwrap());
static ITEM_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[\+\]\s+([A-Za-z0-9][A-Za-z0-9._-]*)\s*$").unwrap());
static ATTR_VERSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Version:\s*(\S+)").unwrap());
static USERS_HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)user\(s\) identified").unwrap());
static NOT_WP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)does not seem to be running WordPress").unwrap());
static WP_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)wordpress").unwrap());

pub const MAX_VULNERABILITIES: usize = 10;
pub const MAX_PLUGINS: usize = 10;
pub const MAX_USERS: usize = 10;

/// Normalized CMS scan result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WpscanScan {
    /// Whether the tool's native JSON report was decoded; false means the
    /// text-heuristic fallback produced this result
    pub json_parsed: bool,
    pub wordpress_detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub vulnerabilities: Vec<String>,
    pub plugins: Vec<WpPlugin>,
    pub users: Vec<String>,
    pub summary: WpscanSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WpPlugin {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WpscanSummary {
    pub vulnerability_count: usize,
    pub plugin_count: usize,
    pub user_count: usize,
}

/// Parse CMS scanner output, preferring the tool's native JSON report.
///
/// The tool may emit partial JSON before failing, so the JSON path is tried
/// on anything that decodes as an object; only then does the line-heuristic
/// fallback run.
pub fn parse_wpscan(raw: &str) -> WpscanScan {
    if let Ok(Value::Object(doc)) = serde_json::from_str::<Value>(raw.trim()) {
        return from_json_report(&doc);
    }
    debug!("CMS output is not a JSON document, falling back to text extraction");
    from_text(raw)
}

fn from_json_report(doc: &serde_json::Map<String, Value>) -> WpscanScan {
    let mut scan = WpscanScan {
        json_parsed: true,
        ..Default::default()
    };

    scan.version = doc
        .get("version")
        .and_then(|v| v.get("number"))
        .and_then(Value::as_str)
        .map(str::to_string);

    scan.wordpress_detected = !doc.contains_key("scan_aborted") && !doc.is_empty();

    let mut vulnerabilities = Vec::new();
    push_vuln_titles(doc.get("version"), &mut vulnerabilities);

    if let Some(Value::Object(plugins)) = doc.get("plugins") {
        scan.summary.plugin_count = plugins.len();
        for (name, entry) in plugins {
            push_vuln_titles(Some(entry), &mut vulnerabilities);
            if scan.plugins.len() < MAX_PLUGINS {
                scan.plugins.push(WpPlugin {
                    name: name.clone(),
                    version: entry
                        .get("version")
                        .and_then(|v| v.get("number"))
                        .and_then(Value::as_str)
                        .map(str::to_string),
                });
            }
        }
    }

    if let Some(Value::Object(users)) = doc.get("users") {
        scan.summary.user_count = users.len();
        scan.users = users.keys().take(MAX_USERS).cloned().collect();
    }

    scan.summary.vulnerability_count = vulnerabilities.len();
    vulnerabilities.truncate(MAX_VULNERABILITIES);
    scan.vulnerabilities = vulnerabilities;
    scan
}

fn push_vuln_titles(entry: Option<&Value>, out: &mut Vec<String>) {
    let Some(Value::Array(vulns)) = entry.and_then(|e| e.get("vulnerabilities")) else {
        return;
    };
    for vuln in vulns {
        if let Some(title) = vuln.get("title").and_then(Value::as_str) {
            out.push(title.to_string());
        }
    }
}

fn from_text(raw: &str) -> WpscanScan {
    let mut scan = WpscanScan::default();

    scan.version = VERSION_RE.captures(raw).map(|caps| caps[1].to_string());
    scan.wordpress_detected =
        !NOT_WP_RE.is_match(raw) && (scan.version.is_some() || WP_MARKER_RE.is_match(raw));

    let vuln_lines: Vec<String> = VULN_LINE_RE
        .captures_iter(raw)
        .map(|caps| caps[1].trim().to_string())
        .collect();
    scan.summary.vulnerability_count = vuln_lines.len();
    scan.vulnerabilities = vuln_lines.into_iter().take(MAX_VULNERABILITIES).collect();

    // `[+] name` headers denote plugins when followed by indented `|`
    // attribute lines, and users when inside the users section.
    let mut users = Vec::new();
    let mut in_users = false;
    let lines: Vec<&str> = raw.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if USERS_HEADER_RE.is_match(line) {
            in_users = true;
            continue;
        }
        let Some(caps) = ITEM_HEADER_RE.captures(line.trim_end()) else {
            continue;
        };
        let name = caps[1].to_string();

        if in_users {
            users.push(name);
            continue;
        }

        let mut version = None;
        let mut has_attrs = false;
        for attr in lines[i + 1..].iter().take_while(|l| l.trim_start().starts_with('|')) {
            has_attrs = true;
            if version.is_none() {
                version = ATTR_VERSION_RE
                    .captures(attr)
                    .map(|caps| caps[1].to_string());
            }
        }
        if has_attrs {
            scan.summary.plugin_count += 1;
            if scan.plugins.len() < MAX_PLUGINS {
                scan.plugins.push(WpPlugin { name, version });
            }
        }
    }

    scan.summary.user_count = users.iter().collect::<std::collections::HashSet<_>>().len();
    scan.users = dedup_capped(users.into_iter(), MAX_USERS);
    scan
}
