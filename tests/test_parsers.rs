// Tests for the output parsers

use scanhub::parse::{
    parse_dig, parse_dig_short, parse_nikto, parse_nmap, parse_nslookup, parse_sqlmap,
    parse_whatweb, parse_wpscan, parse_xss,
};

const NMAP_SAMPLE: &str = "\
Starting Nmap 7.94 ( https://nmap.org )
Nmap scan report for scanme.example.com (45.33.32.156)
Host is up (0.089s latency).

PORT     STATE  SERVICE
22/tcp   open   ssh
80/tcp   open   http
9929/tcp closed nping-echo

Nmap done: 1 IP address (1 host up) scanned in 2.05 seconds
";

/// Test host, ports, and reachability extraction
#[test]
fn test_nmap_sample() {
    let scan = parse_nmap(NMAP_SAMPLE);

    assert_eq!(scan.hosts.len(), 1);
    let host = &scan.hosts[0];
    assert_eq!(host.host, "scanme.example.com (45.33.32.156)");
    assert_eq!(host.ports.len(), 3);
    assert_eq!(host.ports[0].port, 22);
    assert_eq!(host.ports[0].protocol, "tcp");
    assert_eq!(host.ports[0].state, "open");
    assert_eq!(host.ports[0].service, "ssh");
    assert_eq!(host.ports[2].state, "closed");
    assert_eq!(scan.summary.status.as_deref(), Some("up"));
}

/// Test a host that never answered
#[test]
fn test_nmap_host_down() {
    let scan = parse_nmap("Note: Host seems down.\nNmap done: 1 IP address (0 hosts up)\n");
    assert!(scan.hosts.is_empty());
    assert!(scan.summary.status.is_none());
}

/// Test the documented injection-point extraction
#[test]
fn test_sqlmap_injection_point() {
    let output = "\
sqlmap identified the following injection point(s):
---
Parameter: id (boolean-based blind)
    Type: boolean-based blind
---
GET parameter 'id' is vulnerable.
";
    let scan = parse_sqlmap(output);

    assert!(scan.vulnerable);
    assert_eq!(scan.injection_points.len(), 1);
    assert_eq!(scan.injection_points[0].parameter, "id");
    assert_eq!(scan.injection_points[0].kind, "boolean-based blind");
}

/// Test the enumerated database block
#[test]
fn test_sqlmap_databases() {
    let output = "\
the back-end DBMS is MySQL
available databases [3]:
[*] information_schema
[*] shop
[*] wordpress

[INFO] fetched data logged
";
    let scan = parse_sqlmap(output);
    assert_eq!(scan.databases, vec!["information_schema", "shop", "wordpress"]);
}

/// Test clean output yields the defaulted structure
#[test]
fn test_sqlmap_not_vulnerable() {
    let scan = parse_sqlmap("all tested parameters do not appear to be dynamic");
    assert!(!scan.vulnerable);
    assert!(scan.injection_points.is_empty());
    assert!(scan.databases.is_empty());
}

/// Test target, banner, and finding lines
#[test]
fn test_nikto_sample() {
    let output = "\
- Nikto v2.5.0
+ Testing: https://example.com:443/
+ Server: nginx/1.24.0
+ The X-Content-Type-Options header is not set.
+ /admin/: Directory indexing found.
";
    let scan = parse_nikto(output);

    assert_eq!(scan.target, "https://example.com:443/");
    assert_eq!(scan.server_info.server.as_deref(), Some("nginx/1.24.0"));
    assert!(scan
        .findings
        .iter()
        .any(|f| f.contains("Directory indexing found")));
}

/// Test well-formed JSON lines decode independently
#[test]
fn test_whatweb_json_lines() {
    let output = "\
{\"target\": \"https://example.com\", \"plugins\": {\"Nginx\": {}}}

{\"target\": \"https://example.com/login\", \"plugins\": {\"PHP\": {}}}
";
    let scan = parse_whatweb(output);
    assert_eq!(scan.results.len(), 2);
    assert!(!scan.parse_error);
}

/// Test one malformed line empties the list and raises the flag
#[test]
fn test_whatweb_malformed_line_discards_all() {
    let output = "\
{\"target\": \"a\"}
{\"target\": \"b\"}
{\"target\": \"c\"}
{not json at all
";
    let scan = parse_whatweb(output);
    assert!(scan.results.is_empty(), "Partial lists must not leak out");
    assert!(scan.parse_error);
}

/// Test server, addresses, and name records
#[test]
fn test_nslookup_sample() {
    let output = "\
Server:\t\t8.8.8.8
Address:\t8.8.8.8#53

Non-authoritative answer:
Name:\texample.com
Address: 93.184.216.34
Name:\texample.com
Address: 2606:2800:220:1:248:1893:25c8:1946
";
    let scan = parse_nslookup(output);

    assert_eq!(scan.server.as_deref(), Some("8.8.8.8"));
    assert_eq!(scan.names, vec!["example.com", "example.com"]);
    assert_eq!(
        scan.addresses,
        vec![
            "8.8.8.8#53",
            "93.184.216.34",
            "2606:2800:220:1:248:1893:25c8:1946"
        ]
    );
}

const DIG_SAMPLE: &str = "\
; <<>> DiG 9.18.24 <<>> example.com TXT
;; global options: +cmd
;; Got answer:

;; QUESTION SECTION:
;example.com.\t\t\tIN\tTXT

;; ANSWER SECTION:
example.com.\t300\tIN\tTXT\t\"v=spf1 -all\"
example.com.\t300\tIN\tTXT\tkey value pair

;; Query time: 23 msec
;; SERVER: 127.0.0.53#53(127.0.0.53) (UDP)
;; WHEN: Tue Aug 04 10:00:00 UTC 2026
";

/// Test question, answers, and response metadata
#[test]
fn test_dig_sample() {
    let report = parse_dig(DIG_SAMPLE);

    let question = report.question.expect("question section present");
    assert_eq!(question.name, "example.com.");
    assert_eq!(question.class, "IN");
    assert_eq!(question.record_type, "TXT");

    assert_eq!(report.answers.len(), 2);
    assert_eq!(report.answers[0].name, "example.com.");
    assert_eq!(report.answers[0].ttl, 300);
    assert_eq!(report.answers[0].class, "IN");
    assert_eq!(report.answers[0].record_type, "TXT");

    assert_eq!(report.query_time_ms, Some(23));
    assert_eq!(
        report.server.as_deref(),
        Some("127.0.0.53#53(127.0.0.53) (UDP)")
    );
}

/// Test columns past the fourth join into the data field
#[test]
fn test_dig_data_column_join() {
    let report = parse_dig(DIG_SAMPLE);
    assert_eq!(report.answers[1].data, "key value pair");
    assert_eq!(report.answers[0].data, "\"v=spf1 -all\"");
}

/// Test short rows and unparsable TTLs are skipped, not fatal
#[test]
fn test_dig_skips_malformed_rows() {
    let output = "\
;; ANSWER SECTION:
too few cols
example.com. soon IN A 1.2.3.4
example.com. 60 IN A 5.6.7.8
";
    let report = parse_dig(output);
    assert_eq!(report.answers.len(), 1);
    assert_eq!(report.answers[0].data, "5.6.7.8");
}

/// Test short mode returns trimmed non-empty lines verbatim
#[test]
fn test_dig_short_mode() {
    let output = "93.184.216.34\n\n  2606:2800:220:1:248:1893:25c8:1946  \n";
    assert_eq!(
        parse_dig_short(output),
        vec!["93.184.216.34", "2606:2800:220:1:248:1893:25c8:1946"]
    );
}

/// Test endpoint, payload, and coverage extraction with the overall flag
#[test]
fn test_xss_sample() {
    let output = "\
Testing https://example.com/search?q=1
Payload: <svg onload=alert(1)>
Vulnerable webpage: https://example.com/search
Payload: <svg onload=alert(1)>
";
    let scan = parse_xss(output);

    assert!(scan.vulnerable);
    assert_eq!(scan.vulnerable_endpoints, vec!["https://example.com/search"]);
    assert_eq!(scan.payloads, vec!["<svg onload=alert(1)>"]);
    assert_eq!(scan.tested_endpoints, vec!["https://example.com/search?q=1"]);
}

/// Test the marker substring alone sets the flag
#[test]
fn test_xss_marker_only() {
    let scan = parse_xss("Target seems VULNERABLE to reflected input\n");
    assert!(scan.vulnerable);
    assert!(scan.vulnerable_endpoints.is_empty());
}

/// Test payload and tested-endpoint caps hold under flooding
#[test]
fn test_xss_caps() {
    let mut output = String::new();
    for i in 0..50 {
        output.push_str(&format!("Payload: <script>p{}</script>\n", i));
        output.push_str(&format!("Testing https://example.com/page{}\n", i));
    }
    let scan = parse_xss(&output);

    assert_eq!(scan.payloads.len(), 10, "Payload cap");
    assert_eq!(scan.tested_endpoints.len(), 20, "Tested-endpoint cap");
}

/// Test duplicates collapse before the cap is applied
#[test]
fn test_xss_dedup() {
    let output = "Payload: same\nPayload: same\nPayload: other\n";
    let scan = parse_xss(output);
    assert_eq!(scan.payloads, vec!["same", "other"]);
}

/// Test the native JSON report is preferred and lifted into fields
#[test]
fn test_wpscan_json_report() {
    let output = r#"{
        "target_url": "https://blog.example.com/",
        "version": {
            "number": "6.4.2",
            "vulnerabilities": [
                {"title": "WP 6.4.2 - Core vulnerability"}
            ]
        },
        "plugins": {
            "akismet": {"version": {"number": "5.3"}, "vulnerabilities": []},
            "contact-form-7": {
                "version": null,
                "vulnerabilities": [{"title": "CF7 - Stored XSS"}]
            }
        },
        "users": {
            "admin": {"id": 1},
            "editor": {"id": 2}
        }
    }"#;
    let scan = parse_wpscan(output);

    assert!(scan.json_parsed);
    assert!(scan.wordpress_detected);
    assert_eq!(scan.version.as_deref(), Some("6.4.2"));
    assert_eq!(scan.plugins.len(), 2);
    assert_eq!(scan.plugins[0].name, "akismet");
    assert_eq!(scan.plugins[0].version.as_deref(), Some("5.3"));
    assert!(scan.plugins[1].version.is_none());
    assert_eq!(scan.users, vec!["admin", "editor"]);
    assert_eq!(scan.summary.vulnerability_count, 2);
    assert_eq!(scan.summary.plugin_count, 2);
    assert_eq!(scan.summary.user_count, 2);
    assert!(scan
        .vulnerabilities
        .iter()
        .any(|v| v.contains("Stored XSS")));
}

/// Test an aborted scan is not a detection
#[test]
fn test_wpscan_json_aborted() {
    let output = r#"{"scan_aborted": "The target is not running WordPress."}"#;
    let scan = parse_wpscan(output);
    assert!(scan.json_parsed);
    assert!(!scan.wordpress_detected);
}

/// Test the text fallback extracts version, plugins, and users
#[test]
fn test_wpscan_text_fallback() {
    let output = "\
[+] URL: https://blog.example.com/
[+] WordPress version 6.2.1 identified (Insecure, released on 2023-05-16).
[!] 2 vulnerabilities identified:
[!] Title: WP < 6.2.2 - Directive injection

[+] akismet
 | Location: https://blog.example.com/wp-content/plugins/akismet/
 | Version: 5.1

[i] User(s) Identified:

[+] admin
[+] editor
[+] admin
";
    let scan = parse_wpscan(output);

    assert!(!scan.json_parsed);
    assert!(scan.wordpress_detected);
    assert_eq!(scan.version.as_deref(), Some("6.2.1"));
    assert_eq!(scan.plugins.len(), 1);
    assert_eq!(scan.plugins[0].name, "akismet");
    assert_eq!(scan.plugins[0].version.as_deref(), Some("5.1"));
    assert_eq!(scan.users, vec!["admin", "editor"]);
    assert_eq!(scan.summary.user_count, 2);
    assert_eq!(scan.summary.vulnerability_count, 2);
}

/// Test vulnerability-line and plugin caps in the fallback path
#[test]
fn test_wpscan_text_caps() {
    let mut output = String::from("[+] WordPress version 6.0 identified\n");
    for i in 0..30 {
        output.push_str(&format!("[!] Vulnerability number {}\n", i));
    }
    for i in 0..30 {
        output.push_str(&format!("[+] plugin-{}\n | Version: 1.0\n", i));
    }
    let scan = parse_wpscan(&output);

    assert_eq!(scan.vulnerabilities.len(), 10, "Vulnerability cap");
    assert_eq!(scan.plugins.len(), 10, "Plugin cap");
    assert_eq!(scan.summary.vulnerability_count, 30);
    assert_eq!(scan.summary.plugin_count, 30);
}

/// Test every parser is total over hostile input
#[test]
fn test_parsers_are_total() {
    let inputs = [
        "",
        "\n\n\n",
        "\u{0}\u{1}\u{2}binary\u{fffd}garbage",
        "Parameter: truncated (",
        ";; ANSWER SECTION:\n",
        "available databases [2]:",
        "{\"unterminated\": ",
    ];

    for input in inputs {
        let _ = parse_nmap(input);
        let _ = parse_sqlmap(input);
        let _ = parse_nikto(input);
        let _ = parse_whatweb(input);
        let _ = parse_nslookup(input);
        let _ = parse_dig(input);
        let _ = parse_dig_short(input);
        let _ = parse_xss(input);
        let _ = parse_wpscan(input);
    }
}

/// Test parsers are deterministic given identical input
#[test]
fn test_parsers_deterministic() {
    let first = serde_json::to_string(&parse_nmap(NMAP_SAMPLE)).unwrap();
    let second = serde_json::to_string(&parse_nmap(NMAP_SAMPLE)).unwrap();
    assert_eq!(first, second);

    let first = serde_json::to_string(&parse_dig(DIG_SAMPLE)).unwrap();
    let second = serde_json::to_string(&parse_dig(DIG_SAMPLE)).unwrap();
    assert_eq!(first, second);
}
