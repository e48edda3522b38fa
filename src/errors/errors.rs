use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Operator, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} (at position {})", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Which stage of the pipeline rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Binding,
    Lexical,
    Syntax,
    Structural,
    Evaluation,
    Internal,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::InvalidBinding { .. } | ErrorImpl::InvalidBindingValue { .. } => {
                ErrorKind::Binding
            }
            ErrorImpl::UnrecognisedCharacter { .. } | ErrorImpl::NumberParseError { .. } => {
                ErrorKind::Lexical
            }
            ErrorImpl::UnmatchedClosingParen | ErrorImpl::UnmatchedOpeningParen => {
                ErrorKind::Syntax
            }
            ErrorImpl::MissingOperand { .. }
            | ErrorImpl::InsufficientOperands { .. }
            | ErrorImpl::EmptyExpression
            | ErrorImpl::MalformedExpression { .. } => ErrorKind::Structural,
            ErrorImpl::UndefinedVariable { .. }
            | ErrorImpl::DivisionByZero
            | ErrorImpl::NegativeRadicand { .. } => ErrorKind::Evaluation,
            ErrorImpl::InternalInconsistency { .. } => ErrorKind::Internal,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidBinding { .. } => "InvalidBinding",
            ErrorImpl::InvalidBindingValue { .. } => "InvalidBindingValue",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnmatchedClosingParen => "UnmatchedClosingParen",
            ErrorImpl::UnmatchedOpeningParen => "UnmatchedOpeningParen",
            ErrorImpl::MissingOperand { .. } => "MissingOperand",
            ErrorImpl::InsufficientOperands { .. } => "InsufficientOperands",
            ErrorImpl::EmptyExpression => "EmptyExpression",
            ErrorImpl::MalformedExpression { .. } => "MalformedExpression",
            ErrorImpl::UndefinedVariable { .. } => "UndefinedVariable",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::NegativeRadicand { .. } => "NegativeRadicand",
            ErrorImpl::InternalInconsistency { .. } => "InternalInconsistency",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidBinding { binding } => ErrorTip::Suggestion(format!(
                "Invalid binding `{}`, expected `name=value` with an alphabetic name",
                binding
            )),
            ErrorImpl::InvalidBindingValue { name, value } => ErrorTip::Suggestion(format!(
                "Value `{}` given to `{}` is not a number",
                value, name
            )),
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::UnmatchedClosingParen => ErrorTip::Suggestion(String::from(
                "This `)` has no matching `(`",
            )),
            ErrorImpl::UnmatchedOpeningParen => ErrorTip::Suggestion(String::from(
                "This `(` is never closed",
            )),
            ErrorImpl::MissingOperand { operator } => {
                ErrorTip::Suggestion(format!("`{}` has nothing to apply to", operator))
            }
            ErrorImpl::InsufficientOperands { operator, found } => ErrorTip::Suggestion(format!(
                "`{}` needs two operands, found {}",
                operator, found
            )),
            ErrorImpl::EmptyExpression => {
                ErrorTip::Suggestion(String::from("There is nothing to evaluate"))
            }
            ErrorImpl::MalformedExpression { roots } => ErrorTip::Suggestion(format!(
                "Expression splits into {} disconnected parts, is an operator missing?",
                roots
            )),
            ErrorImpl::UndefinedVariable { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` has no value, bind it with `{}=<value> : ...`",
                variable, variable
            )),
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::NegativeRadicand { value } => ErrorTip::Suggestion(format!(
                "Cannot take the square root of {}",
                value
            )),
            ErrorImpl::InternalInconsistency { .. } => ErrorTip::Suggestion(String::from(
                "This expression tree could not have been built from valid input",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid binding: {binding:?}")]
    InvalidBinding { binding: String },
    #[error("invalid value {value:?} for variable {name:?}")]
    InvalidBindingValue { name: String, value: String },
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unmatched closing parenthesis")]
    UnmatchedClosingParen,
    #[error("unmatched opening parenthesis")]
    UnmatchedOpeningParen,
    #[error("missing operand for {operator}")]
    MissingOperand { operator: Operator },
    #[error("insufficient operands for {operator}: expected 2, found {found}")]
    InsufficientOperands { operator: Operator, found: usize },
    #[error("empty expression")]
    EmptyExpression,
    #[error("malformed expression: {roots} values left without an operator")]
    MalformedExpression { roots: usize },
    #[error("undefined variable: {variable:?}")]
    UndefinedVariable { variable: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of negative number {value}")]
    NegativeRadicand { value: f64 },
    #[error("internal inconsistency: operator {operator} with unexpected operands")]
    InternalInconsistency { operator: Operator },
}
