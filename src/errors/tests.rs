//! Unit tests for error handling.
//!
//! This module contains tests for lexical errors, verdicts and hints.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, ReportError, Verdict};

fn invalid(token: &str, line: usize) -> Error {
    Error::new(
        ErrorImpl::InvalidToken {
            token: token.to_string(),
        },
        line,
    )
}

#[test]
fn test_error_creation() {
    let error = invalid("@", 4);

    assert_eq!(error.get_error_name(), "InvalidToken");
    assert_eq!(error.get_line(), 4);
    assert_eq!(error.get_token(), "@");
}

#[test]
fn test_error_message() {
    let error = invalid("5x", 1);

    assert_eq!(error.to_string(), "Lexical error at line 1: Invalid token '5x'");
}

#[test]
fn test_error_tip_none() {
    assert!(matches!(invalid("@", 1).get_tip(), ErrorTip::None));
    assert!(matches!(invalid("under_score", 1).get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_leading_digit() {
    let tip = invalid("5x", 1).get_tip();

    assert_eq!(tip.to_string(), "Identifiers must start with a letter");
}

#[test]
fn test_error_tip_glued_operator() {
    let tip = invalid("a<=b", 1).get_tip();

    assert_eq!(
        tip.to_string(),
        "Operators must be separated from their operands by whitespace"
    );
}

#[test]
fn test_error_tip_strings() {
    assert_eq!(
        invalid("\"abc", 1).get_tip().to_string(),
        "String constant is missing its closing quote"
    );
    assert_eq!(
        invalid("\"", 1).get_tip().to_string(),
        "String constant is missing its closing quote"
    );
    assert_eq!(
        invalid("\"a-b\"", 1).get_tip().to_string(),
        "String constants may only contain letters, digits and spaces"
    );
}

#[test]
fn test_error_tip_leading_zero() {
    let tip = invalid("007", 2).get_tip();

    assert_eq!(tip.to_string(), "Integer constants may not have leading zeros");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_verdict_from_no_errors() {
    let verdict = Verdict::from_errors(vec![]);

    assert_eq!(verdict, Verdict::LexicallyCorrect);
    assert!(verdict.is_correct());
    assert!(verdict.errors().is_empty());
    assert_eq!(verdict.to_string(), "Lexically correct");
}

#[test]
fn test_verdict_joins_errors() {
    let verdict = Verdict::from_errors(vec![invalid("5x", 1), invalid("#", 3)]);

    assert!(!verdict.is_correct());
    assert_eq!(verdict.errors().len(), 2);
    assert_eq!(
        verdict.to_string(),
        "Lexical error at line 1: Invalid token '5x'\nLexical error at line 3: Invalid token '#'"
    );
}

#[test]
fn test_report_error_messages() {
    let error = ReportError::SourceNotFound {
        file: "p1.txt".to_string(),
    };
    assert_eq!(error.to_string(), "File p1.txt not found");

    let error = ReportError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
    assert!(matches!(error, ReportError::Io(_)));
}
