// Scan configuration

use crate::exec::ExecConfig;
use crate::tools::{ToolKind, ToolPaths};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Per-tool execution allotments in seconds.
///
/// The injection, web server, and CMS scanners routinely run for minutes;
/// the DNS lookups are over in seconds.
#[derive(Debug, Clone)]
pub struct ToolTimeouts {
    pub nmap: u64,
    pub sqlmap: u64,
    pub nikto: u64,
    pub whatweb: u64,
    pub nslookup: u64,
    pub dig: u64,
    pub xsstrike: u64,
    pub wpscan: u64,
}

impl Default for ToolTimeouts {
    fn default() -> Self {
        Self {
            nmap: 300,
            sqlmap: 600,
            nikto: 600,
            whatweb: 300,
            nslookup: 30,
            dig: 30,
            xsstrike: 300,
            wpscan: 600,
        }
    }
}

impl ToolTimeouts {
    pub fn for_tool(&self, kind: ToolKind) -> u64 {
        match kind {
            ToolKind::Nmap => self.nmap,
            ToolKind::Sqlmap => self.sqlmap,
            ToolKind::Nikto => self.nikto,
            ToolKind::Whatweb => self.whatweb,
            ToolKind::Nslookup => self.nslookup,
            ToolKind::Dig => self.dig,
            ToolKind::Xsstrike => self.xsstrike,
            ToolKind::Wpscan => self.wpscan,
        }
    }
}

/// Scan configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub timeouts: ToolTimeouts,
    pub paths: ToolPaths,
    pub exec: ExecConfig,
    /// Allotment for each availability probe
    pub probe_timeout_secs: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeouts: ToolTimeouts::default(),
            paths: ToolPaths::default(),
            exec: ExecConfig::default(),
            probe_timeout_secs: 5,
        }
    }
}

/// Parse an environment variable, logging a warning if the value is present
/// but invalid.
fn parse_env_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(v) => match v.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(var = name, value = %v, "Invalid env var value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

impl ScanConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = ScanConfig::default();

        config.timeouts.nmap = parse_env_var("SCANHUB_TIMEOUT_NMAP", config.timeouts.nmap);
        config.timeouts.sqlmap = parse_env_var("SCANHUB_TIMEOUT_SQLMAP", config.timeouts.sqlmap);
        config.timeouts.nikto = parse_env_var("SCANHUB_TIMEOUT_NIKTO", config.timeouts.nikto);
        config.timeouts.whatweb = parse_env_var("SCANHUB_TIMEOUT_WHATWEB", config.timeouts.whatweb);
        config.timeouts.nslookup =
            parse_env_var("SCANHUB_TIMEOUT_NSLOOKUP", config.timeouts.nslookup);
        config.timeouts.dig = parse_env_var("SCANHUB_TIMEOUT_DIG", config.timeouts.dig);
        config.timeouts.xsstrike =
            parse_env_var("SCANHUB_TIMEOUT_XSSTRIKE", config.timeouts.xsstrike);
        config.timeouts.wpscan = parse_env_var("SCANHUB_TIMEOUT_WPSCAN", config.timeouts.wpscan);
        config.probe_timeout_secs =
            parse_env_var("SCANHUB_PROBE_TIMEOUT_SECS", config.probe_timeout_secs);
        config.exec.max_output_bytes =
            parse_env_var("SCANHUB_MAX_OUTPUT_BYTES", config.exec.max_output_bytes);
        config.paths.python_bin = parse_env_var("SCANHUB_PYTHON_BIN", config.paths.python_bin);
        config.paths.xsstrike_script =
            parse_env_var("SCANHUB_XSSTRIKE_SCRIPT", config.paths.xsstrike_script);

        config
    }

    /// Apply overrides from a TOML file on top of this config.
    ///
    /// A missing file is not an error; partial files override only the keys
    /// they name.
    pub fn with_file(mut self, path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, keeping defaults");
            return self;
        }

        let overrides: FileOverrides = match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str(&content).map_err(|e| e.to_string()))
        {
            Ok(overrides) => overrides,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable config file, keeping defaults");
                return self;
            }
        };

        if let Some(timeouts) = overrides.timeouts {
            apply(&mut self.timeouts.nmap, timeouts.nmap);
            apply(&mut self.timeouts.sqlmap, timeouts.sqlmap);
            apply(&mut self.timeouts.nikto, timeouts.nikto);
            apply(&mut self.timeouts.whatweb, timeouts.whatweb);
            apply(&mut self.timeouts.nslookup, timeouts.nslookup);
            apply(&mut self.timeouts.dig, timeouts.dig);
            apply(&mut self.timeouts.xsstrike, timeouts.xsstrike);
            apply(&mut self.timeouts.wpscan, timeouts.wpscan);
        }
        if let Some(paths) = overrides.paths {
            apply(&mut self.paths.python_bin, paths.python_bin);
            apply(&mut self.paths.xsstrike_script, paths.xsstrike_script);
        }
        apply(&mut self.probe_timeout_secs, overrides.probe_timeout_secs);
        apply(&mut self.exec.max_output_bytes, overrides.max_output_bytes);

        debug!(path = %path.display(), "loaded config overrides");
        self
    }
}

fn apply<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[derive(Debug, Deserialize)]
struct FileOverrides {
    timeouts: Option<FileTimeouts>,
    paths: Option<FilePaths>,
    probe_timeout_secs: Option<u64>,
    max_output_bytes: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct FileTimeouts {
    nmap: Option<u64>,
    sqlmap: Option<u64>,
    nikto: Option<u64>,
    whatweb: Option<u64>,
    nslookup: Option<u64>,
    dig: Option<u64>,
    xsstrike: Option<u64>,
    wpscan: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct FilePaths {
    python_bin: Option<String>,
    xsstrike_script: Option<String>,
}
