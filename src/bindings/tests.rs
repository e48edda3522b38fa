use super::bindings::parse_bindings;
use crate::{
    errors::errors::{ErrorImpl, ErrorKind},
    Position,
};

#[test]
fn test_no_bindings() {
    let (expression, bindings) = parse_bindings("  3 + 4 ").unwrap();

    assert_eq!(expression, "3 + 4");
    assert!(bindings.is_empty());
}

#[test]
fn test_single_binding() {
    let (expression, bindings) = parse_bindings("x=7 : x^2 + 2*x + 1").unwrap();

    assert_eq!(expression, "x^2 + 2*x + 1");
    assert_eq!(bindings.get("x"), Some(&7.0));
}

#[test]
fn test_multiple_bindings() {
    let (expression, bindings) = parse_bindings("a = 3, b=4.5,c=-2 : √(a^2 + b^2)").unwrap();

    assert_eq!(expression, "√(a^2 + b^2)");
    assert_eq!(bindings.len(), 3);
    assert_eq!(bindings["a"], 3.0);
    assert_eq!(bindings["b"], 4.5);
    assert_eq!(bindings["c"], -2.0);
}

#[test]
fn test_blank_entries_are_skipped() {
    let (_, bindings) = parse_bindings("x=1,, ,y=2, : x+y").unwrap();
    assert_eq!(bindings.len(), 2);
}

#[test]
fn test_empty_prefix() {
    let (expression, bindings) = parse_bindings(": 1+1").unwrap();

    assert_eq!(expression, "1+1");
    assert!(bindings.is_empty());
}

#[test]
fn test_later_binding_wins() {
    let (_, bindings) = parse_bindings("x=1, x=2 : x").unwrap();
    assert_eq!(bindings["x"], 2.0);
}

#[test]
fn test_names_are_case_sensitive() {
    let (_, bindings) = parse_bindings("x=1, X=2 : x+X").unwrap();

    assert_eq!(bindings["x"], 1.0);
    assert_eq!(bindings["X"], 2.0);
}

#[test]
fn test_only_first_colon_splits() {
    let (expression, _) = parse_bindings("x=1 : x : 2").unwrap();
    assert_eq!(expression, "x : 2");
}

#[test]
fn test_missing_equals() {
    let error = parse_bindings("x=1, y : x+y").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Binding);
    assert_eq!(error.get_error(), &ErrorImpl::InvalidBinding { binding: "y".to_string() });
    assert_eq!(error.get_position(), &Position(4));
}

#[test]
fn test_non_alphabetic_name() {
    let error = parse_bindings("x1=3 : x1").unwrap_err();
    assert_eq!(error.get_error(), &ErrorImpl::InvalidBinding { binding: "x1=3".to_string() });
}

#[test]
fn test_invalid_value() {
    let error = parse_bindings("x=seven : x").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::InvalidBindingValue { name: "x".to_string(), value: "seven".to_string() }
    );
}

#[test]
fn test_empty_value() {
    let error = parse_bindings("x= : x").unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidBindingValue");
}
