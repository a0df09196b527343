// Tools module - the closed set of wrapped scanners and their requests

pub mod command;
pub mod error;
pub mod types;

pub use command::build_args;
pub use error::{Result, ValidationError};
pub use types::{
    DigRequest, NiktoRequest, NmapRequest, NslookupRequest, ScanRequest, ScanType, SqlmapRequest,
    ToolPaths, WhatwebRequest, WpscanRequest, XssRequest,
};

/// One variant per wrapped external tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Nmap,
    Sqlmap,
    Nikto,
    Whatweb,
    Nslookup,
    Dig,
    Xsstrike,
    Wpscan,
}

impl ToolKind {
    /// All known tools, in the order they are reported
    pub const ALL: [ToolKind; 8] = [
        ToolKind::Nmap,
        ToolKind::Sqlmap,
        ToolKind::Nikto,
        ToolKind::Whatweb,
        ToolKind::Nslookup,
        ToolKind::Dig,
        ToolKind::Xsstrike,
        ToolKind::Wpscan,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Nmap => "nmap",
            ToolKind::Sqlmap => "sqlmap",
            ToolKind::Nikto => "nikto",
            ToolKind::Whatweb => "whatweb",
            ToolKind::Nslookup => "nslookup",
            ToolKind::Dig => "dig",
            ToolKind::Xsstrike => "xsstrike",
            ToolKind::Wpscan => "wpscan",
        }
    }

    /// Minimal invocation used to check that the tool is installed
    pub fn probe_argv(&self, paths: &ToolPaths) -> Vec<String> {
        match self {
            ToolKind::Nmap => vec!["nmap".into(), "--version".into()],
            ToolKind::Sqlmap => vec!["sqlmap".into(), "--version".into()],
            ToolKind::Nikto => vec!["nikto".into(), "-Version".into()],
            ToolKind::Whatweb => vec!["whatweb".into(), "--version".into()],
            ToolKind::Nslookup => vec!["nslookup".into(), "-version".into()],
            ToolKind::Dig => vec!["dig".into(), "-v".into()],
            ToolKind::Xsstrike => vec![
                paths.python_bin.clone(),
                paths.xsstrike_script.clone(),
                "-h".into(),
            ],
            ToolKind::Wpscan => vec!["wpscan".into(), "--version".into()],
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
