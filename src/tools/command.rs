// Command builders - pure request -> argv mappings, one per tool

use crate::tools::types::{
    DigRequest, NiktoRequest, NmapRequest, NslookupRequest, ScanRequest, ScanType, SqlmapRequest,
    ToolPaths, WhatwebRequest, WpscanRequest, XssRequest,
};

/// Build the argument vector for a validated request.
///
/// Builders never run anything; each one only encodes its tool's CLI
/// conventions and can be tested by asserting the exact argv.
pub fn build_args(request: &ScanRequest, paths: &ToolPaths) -> Vec<String> {
    match request {
        ScanRequest::Nmap(r) => nmap_args(r),
        ScanRequest::Sqlmap(r) => sqlmap_args(r),
        ScanRequest::Nikto(r) => nikto_args(r),
        ScanRequest::Whatweb(r) => whatweb_args(r),
        ScanRequest::Nslookup(r) => nslookup_args(r),
        ScanRequest::Dig(r) => dig_args(r),
        ScanRequest::Xsstrike(r) => xsstrike_args(r, paths),
        ScanRequest::Wpscan(r) => wpscan_args(r),
    }
}

pub fn nmap_args(request: &NmapRequest) -> Vec<String> {
    let mut args = vec!["nmap".to_string()];

    match request.scan_type {
        ScanType::Basic => {}
        ScanType::Service => args.push("-sV".to_string()),
        ScanType::Vuln => args.push("--script=vuln".to_string()),
        ScanType::Full => {
            args.extend(["-sV".to_string(), "-sC".to_string(), "-A".to_string()]);
        }
    }

    if let Some(ports) = &request.ports {
        args.push("-p".to_string());
        args.push(ports.clone());
    }

    // Target goes last
    args.push(request.target.clone());
    args
}

pub fn sqlmap_args(request: &SqlmapRequest) -> Vec<String> {
    let mut args = vec![
        "sqlmap".to_string(),
        "-u".to_string(),
        request.url.clone(),
        "--batch".to_string(),
        "--answers=crack=N".to_string(),
    ];

    if let Some(data) = &request.data {
        args.push("--data".to_string());
        args.push(data.clone());
    }

    if let Some(cookie) = &request.cookie {
        args.push("--cookie".to_string());
        args.push(cookie.clone());
    }

    args.push("--level".to_string());
    args.push(request.level.to_string());
    args.push("--risk".to_string());
    args.push(request.risk.to_string());
    args
}

pub fn nikto_args(request: &NiktoRequest) -> Vec<String> {
    let mut args = vec![
        "nikto".to_string(),
        "-h".to_string(),
        request.target.clone(),
        "-p".to_string(),
        request.port.to_string(),
    ];

    if request.ssl {
        args.push("-ssl".to_string());
    }

    args.push("-Format".to_string());
    args.push("txt".to_string());
    args
}

pub fn whatweb_args(request: &WhatwebRequest) -> Vec<String> {
    vec![
        "whatweb".to_string(),
        request.target.clone(),
        "--log-json=-".to_string(),
        format!("-a{}", request.aggression),
    ]
}

pub fn nslookup_args(request: &NslookupRequest) -> Vec<String> {
    let mut args = vec!["nslookup".to_string()];

    if let Some(record_type) = &request.record_type {
        args.push(format!("-type={}", record_type));
    }

    args.push(request.domain.clone());

    if let Some(nameserver) = &request.nameserver {
        args.push(nameserver.clone());
    }

    args
}

pub fn dig_args(request: &DigRequest) -> Vec<String> {
    let mut args = vec!["dig".to_string()];

    if let Some(nameserver) = &request.nameserver {
        args.push(format!("@{}", nameserver));
    }

    args.push(request.domain.clone());
    args.push(request.record_type.clone());

    if request.short {
        args.push("+short".to_string());
    }

    args
}

pub fn xsstrike_args(request: &XssRequest, paths: &ToolPaths) -> Vec<String> {
    let mut args = vec![
        paths.python_bin.clone(),
        paths.xsstrike_script.clone(),
        "-u".to_string(),
        request.url.clone(),
    ];

    if request.crawl {
        args.push("--crawl".to_string());
    }

    args.push("-t".to_string());
    args.push(request.threads.to_string());
    args.push("--timeout".to_string());
    args.push(request.timeout_secs.to_string());

    if let Some(data) = &request.data {
        args.push("--data".to_string());
        args.push(data.clone());
    }

    args
}

pub fn wpscan_args(request: &WpscanRequest) -> Vec<String> {
    let mut args = vec![
        "wpscan".to_string(),
        "--url".to_string(),
        request.url.clone(),
        "--format".to_string(),
        "json".to_string(),
        "--no-banner".to_string(),
    ];

    if request.aggressive {
        args.push("--plugins-detection".to_string());
        args.push("aggressive".to_string());
    }

    args.push("--enumerate".to_string());
    args.push(request.enumerate.join(","));

    if let Some(token) = &request.api_token {
        args.push("--api-token".to_string());
        args.push(token.clone());
    }

    args
}
