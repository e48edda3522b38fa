#![allow(clippy::module_inception)]

use crate::{
    ast::builder::build_tree,
    bindings::bindings::parse_bindings,
    errors::errors::{Error, ErrorTip},
    evaluator::evaluator::{evaluate, Bindings},
    lexer::lexer::tokenize,
    normalizer::normalizer::{clean_input, normalize_signs},
    parser::parser::to_postfix,
};

pub mod ast;
pub mod bindings;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod normalizer;
pub mod parser;

extern crate regex;

/// Character offset into the string a stage was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Span {
            start: Position(start),
            end: Position(end),
        }
    }
}

/// Runs the whole pipeline on a bare expression.
///
/// Whitespace is removed and signs normalized before tokenizing, so error
/// positions refer to `normalize_signs(&clean_input(expression))`.
pub fn calculate(expression: &str, bindings: &Bindings) -> Result<f64, Error> {
    let normalized = normalize_signs(&clean_input(expression));
    let tokens = tokenize(&normalized)?;
    let postfix = to_postfix(tokens)?;
    let tree = build_tree(postfix)?;
    evaluate(&tree, bindings)
}

/// Runs the pipeline on a line that may start with `name=value, ... :`.
pub fn calculate_line(line: &str) -> Result<f64, Error> {
    let (expression, bindings) = parse_bindings(line)?;
    calculate(&expression, &bindings)
}

/// Formats an error with a caret under the position it was raised at.
///
/// ```text
/// Error: DivisionByZero
///   |
/// 1 | 10/0
///   | ---^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let line_str = String::from("1");
    let padding = line_str.len() + 2;
    let arrows = error.get_position().0 as usize + 1;

    let mut lines = vec![];

    if let ErrorTip::None = error.get_tip() {
        lines.push(format!("Error: {}", error.get_error_name()));
    } else {
        lines.push(format!("Error: {} ({})", error.get_error_name(), error.get_tip()));
    }
    lines.push(format!("{:>padding$}", "|"));
    lines.push(format!("{} | {}", line_str, source));
    lines.push(format!("{:>padding$} {:->arrows$}", "|", "^"));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::errors::{ErrorImpl, ErrorKind};

    #[test]
    fn test_format_error_points_at_position() {
        let error = Error::new(ErrorImpl::DivisionByZero, Position(3));
        let formatted = format_error(&error, "10/0");

        assert_eq!(formatted, "Error: DivisionByZero\n  |\n1 | 10/0\n  | ---^");
    }

    #[test]
    fn test_format_error_includes_tip() {
        let error = Error::new(
            ErrorImpl::UndefinedVariable { variable: "x".to_string() },
            Position(0),
        );
        let formatted = format_error(&error, "x+5");

        assert!(formatted.starts_with("Error: UndefinedVariable (Variable `x` has no value"));
        assert!(formatted.ends_with("  | ^"));
    }

    #[test]
    fn test_calculate_end_to_end() {
        let mut bindings = Bindings::new();
        bindings.insert("x".to_string(), 7.0);

        let result = calculate("√(4^2 + 3^2) * (x + 5) - 10 / 2", &bindings).unwrap();
        assert_eq!(result, 55.0);
    }

    #[test]
    fn test_calculate_line_with_bindings() {
        assert_eq!(calculate_line("x=7 : x^2 + 2*x + 1").unwrap(), 64.0);
        assert_eq!(calculate_line("a=3, b=4 : √(a^2 + b^2)").unwrap(), 5.0);
    }

    #[test]
    fn test_calculate_line_reports_binding_errors() {
        let error = calculate_line("x=seven : x + 1").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Binding);
    }
}
