//! Unit tests for tree evaluation.

use super::evaluator::{evaluate, Bindings};
use crate::{
    ast::{ast::Node, builder::build_tree},
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::{lexer::tokenize, tokens::Operator},
    normalizer::normalizer::normalize_signs,
    parser::parser::to_postfix,
    Position, Span,
};

fn eval_with(source: &str, bindings: &Bindings) -> Result<f64, crate::errors::errors::Error> {
    let normalized = normalize_signs(source);
    let tokens = tokenize(&normalized)?;
    let tree = build_tree(to_postfix(tokens)?)?;
    evaluate(&tree, bindings)
}

fn eval(source: &str) -> f64 {
    eval_with(source, &Bindings::new()).unwrap()
}

fn bindings(pairs: &[(&str, f64)]) -> Bindings {
    pairs.iter().map(|(name, value)| (name.to_string(), *value)).collect()
}

#[test]
fn test_basic_operations() {
    assert_eq!(eval("3+4"), 7.0);
    assert_eq!(eval("10-5"), 5.0);
    assert_eq!(eval("3*4"), 12.0);
    assert_eq!(eval("10/2"), 5.0);
    assert_eq!(eval("2^3"), 8.0);
    assert_eq!(eval("7/2"), 3.5);
}

#[test]
fn test_precedence() {
    assert_eq!(eval("3+4*2"), 11.0);
    assert_eq!(eval("(3+4)*2"), 14.0);
    assert_eq!(eval("2^3^2"), 512.0);
    assert_eq!(eval("(2^3)^2"), 64.0);
    assert_eq!(eval("8-3-2"), 3.0);
    assert_eq!(eval("16/4/2"), 2.0);
}

#[test]
fn test_square_root() {
    assert_eq!(eval("√16"), 4.0);
    assert_eq!(eval("√(9+16)"), 5.0);
    assert_eq!(eval("√√16"), 2.0);
    assert_eq!(eval("√4^2"), 4.0);
    assert_eq!(eval("2+√4"), 4.0);
    assert_eq!(eval("√0"), 0.0);
}

#[test]
fn test_unary_minus() {
    assert_eq!(eval("-5"), -5.0);
    assert_eq!(eval("3*-2"), -6.0);
    assert_eq!(eval("--5"), 5.0);
    assert_eq!(eval("-2^2"), -4.0);
    assert_eq!(eval("(-2)^2"), 4.0);
    assert_eq!(eval("2^-1"), 0.5);
    assert_eq!(eval("-(3+4)*2"), -14.0);
    assert_eq!(eval("5-√4"), 3.0);
    assert_eq!(eval("-√4"), -2.0);
}

#[test]
fn test_fractional_and_negative_exponents() {
    assert_eq!(eval("4^0.5"), 2.0);
    assert_eq!(eval("2^-2"), 0.25);
    assert!(eval("(-8)^0.5").is_nan());
}

#[test]
fn test_variables() {
    let x = bindings(&[("x", 3.0)]);

    assert_eq!(eval_with("x", &x).unwrap(), 3.0);
    assert_eq!(eval_with("x^2+2*x+1", &x).unwrap(), 16.0);
    assert_eq!(eval_with("-x", &x).unwrap(), -3.0);
}

#[test]
fn test_variables_are_case_sensitive() {
    let error = eval_with("X", &bindings(&[("x", 1.0)])).unwrap_err();
    assert_eq!(error.get_error(), &ErrorImpl::UndefinedVariable { variable: "X".to_string() });
}

#[test]
fn test_multi_letter_variables() {
    let values = bindings(&[("width", 3.0), ("height", 4.0)]);
    assert_eq!(eval_with("√(width^2+height^2)", &values).unwrap(), 5.0);
}

#[test]
fn test_end_to_end() {
    let x = bindings(&[("x", 7.0)]);
    assert_eq!(eval_with("√(4^2+3^2)*(x+5)-10/2", &x).unwrap(), 55.0);
}

#[test]
fn test_division_by_zero() {
    let error = eval_with("10/0", &Bindings::new()).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Evaluation);
    assert_eq!(error.get_error(), &ErrorImpl::DivisionByZero);
    assert_eq!(error.get_position(), &Position(2));
}

#[test]
fn test_division_by_computed_zero() {
    let error = eval_with("1/(2-2)", &Bindings::new()).unwrap_err();
    assert_eq!(error.get_error(), &ErrorImpl::DivisionByZero);
}

#[test]
fn test_zero_numerator() {
    assert_eq!(eval("0/5"), 0.0);
}

#[test]
fn test_negative_radicand() {
    let error = eval_with("√(-4)", &Bindings::new()).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Evaluation);
    assert_eq!(error.get_error(), &ErrorImpl::NegativeRadicand { value: -4.0 });
}

#[test]
fn test_undefined_variable() {
    let error = eval_with("x+5", &Bindings::new()).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Evaluation);
    assert_eq!(error.get_error(), &ErrorImpl::UndefinedVariable { variable: "x".to_string() });
    assert_eq!(error.get_position(), &Position(0));
}

#[test]
fn test_first_error_wins() {
    // The left operand is evaluated first
    let error = eval_with("y/0", &Bindings::new()).unwrap_err();
    assert_eq!(error.get_error(), &ErrorImpl::UndefinedVariable { variable: "y".to_string() });
}

#[test]
fn test_binary_operator_without_right_child() {
    let span = Span::new(0, 1);
    let tree = Node::unary(Operator::Multiply, Node::number(2.0, span.clone()), span);

    let error = evaluate(&tree, &Bindings::new()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Internal);
    assert_eq!(error.get_error(), &ErrorImpl::InternalInconsistency { operator: Operator::Multiply });
}

#[test]
fn test_root_with_right_child() {
    let span = Span::new(0, 1);
    let tree = Node::binary(
        Operator::Root,
        Node::number(4.0, span.clone()),
        Node::number(2.0, span.clone()),
        span,
    );

    let error = evaluate(&tree, &Bindings::new()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Internal);
}
