// scanhub CLI - developer harness over the scan and probe APIs

use clap::{Parser, Subcommand};
use scanhub::probe::check_health;
use scanhub::scan::{self, ScanConfig};
use scanhub::tools::{
    DigRequest, NiktoRequest, NmapRequest, NslookupRequest, ScanRequest, ScanType, SqlmapRequest,
    WhatwebRequest, WpscanRequest, XssRequest,
};
use std::path::PathBuf;
use std::process;
use tracing::{error, Level};
use tracing_subscriber::fmt;

#[derive(Parser)]
#[command(
    name = "scanhub",
    about = "Uniform interface over external security scanning tools"
)]
struct Cli {
    /// TOML file with timeout and tool-path overrides
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check which scanning tools are installed
    Probe,
    /// Run one scan and print its JSON report
    #[command(subcommand)]
    Scan(ScanCommand),
}

#[derive(Subcommand)]
enum ScanCommand {
    /// Network scan
    Nmap {
        target: String,
        /// Port range, e.g. "80,443" or "1-1000"
        #[arg(long)]
        ports: Option<String>,
        /// One of: basic, service, vuln, full
        #[arg(long, default_value = "basic")]
        scan_type: String,
    },
    /// SQL injection scan
    Sqlmap {
        url: String,
        #[arg(long)]
        data: Option<String>,
        #[arg(long)]
        cookie: Option<String>,
        #[arg(long, default_value_t = 1)]
        level: u8,
        #[arg(long, default_value_t = 1)]
        risk: u8,
    },
    /// Web server scan
    Nikto {
        target: String,
        #[arg(long, default_value_t = 80)]
        port: u16,
        #[arg(long)]
        ssl: bool,
    },
    /// Technology fingerprinting
    Whatweb {
        target: String,
        #[arg(long, default_value_t = 1)]
        aggression: u8,
    },
    /// Basic DNS lookup
    Nslookup {
        domain: String,
        #[arg(long)]
        record_type: Option<String>,
        #[arg(long)]
        nameserver: Option<String>,
    },
    /// Detailed DNS lookup
    Dig {
        domain: String,
        #[arg(long, default_value = "A")]
        record_type: String,
        #[arg(long)]
        nameserver: Option<String>,
        #[arg(long)]
        short: bool,
    },
    /// XSS scan
    Xsstrike {
        url: String,
        #[arg(long)]
        crawl: bool,
        #[arg(long, default_value_t = 10)]
        threads: u8,
        #[arg(long, default_value_t = 10)]
        timeout_secs: u8,
        #[arg(long)]
        data: Option<String>,
    },
    /// WordPress scan
    Wpscan {
        url: String,
        /// Enumeration categories, comma separated
        #[arg(long, value_delimiter = ',', default_value = "vp,u")]
        enumerate: Vec<String>,
        #[arg(long)]
        aggressive: bool,
        #[arg(long)]
        api_token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ScanConfig::from_env();
    if let Some(path) = &cli.config {
        config = config.with_file(path);
    }

    match cli.command {
        Command::Probe => {
            let report = check_health(&config).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Scan(command) => {
            let request = to_request(command)?;
            match scan::run(&request, &config).await {
                Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
                Err(e) => {
                    error!(error = %e, "scan failed");
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn to_request(command: ScanCommand) -> Result<ScanRequest, Box<dyn std::error::Error>> {
    let request = match command {
        ScanCommand::Nmap {
            target,
            ports,
            scan_type,
        } => ScanRequest::Nmap(NmapRequest {
            target,
            ports,
            scan_type: parse_scan_type(&scan_type)?,
        }),
        ScanCommand::Sqlmap {
            url,
            data,
            cookie,
            level,
            risk,
        } => ScanRequest::Sqlmap(SqlmapRequest {
            url,
            data,
            cookie,
            level,
            risk,
        }),
        ScanCommand::Nikto { target, port, ssl } => {
            ScanRequest::Nikto(NiktoRequest { target, port, ssl })
        }
        ScanCommand::Whatweb { target, aggression } => {
            ScanRequest::Whatweb(WhatwebRequest { target, aggression })
        }
        ScanCommand::Nslookup {
            domain,
            record_type,
            nameserver,
        } => ScanRequest::Nslookup(NslookupRequest {
            domain,
            record_type,
            nameserver,
        }),
        ScanCommand::Dig {
            domain,
            record_type,
            nameserver,
            short,
        } => ScanRequest::Dig(DigRequest {
            domain,
            record_type,
            nameserver,
            short,
        }),
        ScanCommand::Xsstrike {
            url,
            crawl,
            threads,
            timeout_secs,
            data,
        } => ScanRequest::Xsstrike(XssRequest {
            url,
            crawl,
            threads,
            timeout_secs,
            data,
        }),
        ScanCommand::Wpscan {
            url,
            enumerate,
            aggressive,
            api_token,
        } => ScanRequest::Wpscan(WpscanRequest {
            url,
            enumerate,
            aggressive,
            api_token,
        }),
    };
    Ok(request)
}

fn parse_scan_type(value: &str) -> Result<ScanType, Box<dyn std::error::Error>> {
    match value.to_lowercase().as_str() {
        "basic" => Ok(ScanType::Basic),
        "service" => Ok(ScanType::Service),
        "vuln" => Ok(ScanType::Vuln),
        "full" => Ok(ScanType::Full),
        other => Err(format!("Unknown scan type: {}", other).into()),
    }
}
