// Detailed DNS lookup output parser

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static QUERY_TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r";; Query time: (\d+) msec").unwrap());
static RESPONDING_SERVER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r";; SERVER: (.+)").unwrap());

const QUESTION_HEADER: &str = ";; QUESTION SECTION:";
const ANSWER_HEADER: &str = ";; ANSWER SECTION:";

/// Normalized detailed DNS lookup result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DigReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<DigQuestion>,
    pub answers: Vec<DigAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigQuestion {
    pub name: String,
    pub class: String,
    pub record_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigAnswer {
    pub name: String,
    pub ttl: u32,
    pub class: String,
    pub record_type: String,
    /// Record payload; columns past the type join back into one field
    pub data: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    None,
    Question,
    Answer,
}

/// Parse the question/answer sections and response metadata of dig output.
///
/// Answer rows are whitespace-delimited with at least five columns
/// (name, ttl, class, type, data); everything after the fourth column is
/// the record data. Rows that fall short are skipped, not errors.
pub fn parse_dig(raw: &str) -> DigReport {
    let mut report = DigReport::default();
    let mut section = Section::None;

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed == QUESTION_HEADER {
            section = Section::Question;
            continue;
        }
        if trimmed == ANSWER_HEADER {
            section = Section::Answer;
            continue;
        }
        if trimmed.is_empty() || trimmed.starts_with(";;") {
            section = Section::None;
            continue;
        }

        match section {
            Section::Question => {
                let stripped = trimmed.trim_start_matches(';');
                let cols: Vec<&str> = stripped.split_whitespace().collect();
                if cols.len() >= 3 && report.question.is_none() {
                    report.question = Some(DigQuestion {
                        name: cols[0].to_string(),
                        class: cols[1].to_string(),
                        record_type: cols[2].to_string(),
                    });
                }
            }
            Section::Answer => {
                let cols: Vec<&str> = trimmed.split_whitespace().collect();
                if cols.len() < 5 {
                    continue;
                }
                let Ok(ttl) = cols[1].parse::<u32>() else {
                    continue;
                };
                report.answers.push(DigAnswer {
                    name: cols[0].to_string(),
                    ttl,
                    class: cols[2].to_string(),
                    record_type: cols[3].to_string(),
                    data: cols[4..].join(" "),
                });
            }
            Section::None => {}
        }
    }

    report.query_time_ms = QUERY_TIME_RE
        .captures(raw)
        .and_then(|caps| caps[1].parse().ok());
    report.server = RESPONDING_SERVER_RE
        .captures(raw)
        .map(|caps| caps[1].trim().to_string());

    report
}

/// `+short` output has no sections; return the non-empty lines verbatim.
pub fn parse_dig_short(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
