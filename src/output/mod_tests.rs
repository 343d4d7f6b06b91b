use std::str::FromStr;

use super::*;

#[test]
fn parses_known_formats() {
    assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
}

#[test]
fn rejects_unknown_formats() {
    let err = OutputFormat::from_str("xml").unwrap_err();
    assert!(err.contains("xml"));
}

#[test]
fn text_is_the_default() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
