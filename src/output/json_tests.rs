use super::*;
use crate::report::Report;

#[test]
fn renders_counts_and_diagnostics() {
    let report = Report::from_results(vec![vec![
        Diagnostic::error_at("bad call", "src/a.cc", 12),
        Diagnostic::error("tool failed."),
    ]]);

    let out = JsonFormatter::new().format(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["errors"], 2);
    assert_eq!(value["diagnostics"][0]["severity"], "error");
    assert_eq!(value["diagnostics"][0]["location"]["path"], "src/a.cc");
    assert_eq!(value["diagnostics"][0]["location"]["line"], 12);
    assert!(value["diagnostics"][1].get("location").is_none());
}

#[test]
fn empty_report_is_valid_json() {
    let out = JsonFormatter::compact().format(&Report::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["errors"], 0);
    assert_eq!(value["diagnostics"].as_array().unwrap().len(), 0);
}
