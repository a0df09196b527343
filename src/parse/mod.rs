// Parse module - per-tool normalization of raw scanner output
//
// Every parser here is a total function over arbitrary text: missing
// sections yield empty containers, never an error. Patterns live in named
// statics so output variations across tool versions can be patched without
// touching control flow.

pub mod dig;
pub mod nikto;
pub mod nmap;
pub mod nslookup;
pub mod sqlmap;
pub mod whatweb;
pub mod wpscan;
pub mod xss;

pub use dig::{parse_dig, parse_dig_short, DigAnswer, DigQuestion, DigReport};
pub use nikto::{parse_nikto, NiktoScan};
pub use nmap::{parse_nmap, NmapScan};
pub use nslookup::{parse_nslookup, NslookupScan};
pub use sqlmap::{parse_sqlmap, SqlmapScan};
pub use whatweb::{parse_whatweb, WhatwebScan};
pub use wpscan::{parse_wpscan, WpscanScan};
pub use xss::{parse_xss, XssScan};

/// Collect unique items in first-seen order, stopping at `cap`.
fn dedup_capped<I>(items: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if out.len() >= cap {
            break;
        }
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}
