#![allow(non_snake_case)]

use super::*;
use std::str::FromStr;
use test_case::test_case;

// LogLevel tests

#[test]
fn LogLevel___ordering___trace_is_most_verbose() {
    assert!(LogLevel::Trace < LogLevel::Debug);
    assert!(LogLevel::Debug < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Warn);
    assert!(LogLevel::Warn < LogLevel::Error);
    assert!(LogLevel::Error < LogLevel::Off);
}

#[test_case("trace", LogLevel::Trace)]
#[test_case("debug", LogLevel::Debug)]
#[test_case("info", LogLevel::Info)]
#[test_case("warn", LogLevel::Warn)]
#[test_case("warning", LogLevel::Warn)]
#[test_case("error", LogLevel::Error)]
#[test_case("off", LogLevel::Off)]
#[test_case("INFO", LogLevel::Info)]
#[test_case(" Debug ", LogLevel::Debug)]
fn LogLevel___from_str___parses_known_names(input: &str, expected: LogLevel) {
    assert_eq!(LogLevel::from_str(input).unwrap(), expected);
}

#[test]
fn LogLevel___from_str___rejects_unknown_name() {
    let err = LogLevel::from_str("verbose").unwrap_err();

    assert_eq!(err, ParseLogLevelError("verbose".to_string()));
    assert!(err.to_string().contains("verbose"));
}

#[test]
fn LogLevel___display___is_uppercase() {
    assert_eq!(LogLevel::Warn.to_string(), "WARN");
    assert_eq!(LogLevel::Off.to_string(), "OFF");
}
