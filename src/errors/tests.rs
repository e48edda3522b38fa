//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::lexer::tokens::Operator;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnrecognisedCharacter { character: '@' }, Position(10));

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnmatchedClosingParen, Position(42));
    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_error_kinds() {
    let cases = vec![
        (ErrorImpl::InvalidBinding { binding: "x".to_string() }, ErrorKind::Binding),
        (
            ErrorImpl::InvalidBindingValue { name: "x".to_string(), value: "a".to_string() },
            ErrorKind::Binding,
        ),
        (ErrorImpl::NumberParseError { token: "1.".to_string() }, ErrorKind::Lexical),
        (ErrorImpl::UnmatchedOpeningParen, ErrorKind::Syntax),
        (ErrorImpl::UnmatchedClosingParen, ErrorKind::Syntax),
        (ErrorImpl::MissingOperand { operator: Operator::Root }, ErrorKind::Structural),
        (
            ErrorImpl::InsufficientOperands { operator: Operator::Add, found: 1 },
            ErrorKind::Structural,
        ),
        (ErrorImpl::EmptyExpression, ErrorKind::Structural),
        (ErrorImpl::MalformedExpression { roots: 2 }, ErrorKind::Structural),
        (ErrorImpl::UndefinedVariable { variable: "x".to_string() }, ErrorKind::Evaluation),
        (ErrorImpl::DivisionByZero, ErrorKind::Evaluation),
        (ErrorImpl::NegativeRadicand { value: -1.0 }, ErrorKind::Evaluation),
        (ErrorImpl::InternalInconsistency { operator: Operator::Power }, ErrorKind::Internal),
    ];

    for (error_impl, kind) in cases {
        let error = Error::new(error_impl, Position(0));
        assert_eq!(error.kind(), kind, "{}", error.get_error_name());
    }
}

#[test]
fn test_error_tip() {
    let error = Error::new(
        ErrorImpl::UndefinedVariable { variable: "rate".to_string() },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => assert!(suggestion.contains("`rate`")),
        ErrorTip::None => panic!("Expected a suggestion"),
    }
}

#[test]
fn test_error_no_tip() {
    let error = Error::new(ErrorImpl::DivisionByZero, Position(3));

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::InsufficientOperands { operator: Operator::Divide, found: 1 },
        Position(4),
    );

    assert_eq!(
        error.to_string(),
        "insufficient operands for /: expected 2, found 1 (at position 4)"
    );
}

#[test]
fn test_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
