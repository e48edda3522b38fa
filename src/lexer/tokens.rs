use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<char, Operator> = {
        let mut map = HashMap::new();
        map.insert('+', Operator::Add);
        map.insert('-', Operator::Subtract);
        map.insert('*', Operator::Multiply);
        map.insert('/', Operator::Divide);
        map.insert('^', Operator::Power);
        map.insert('√', Operator::Root);
        map
    };
}

/// The square root symbol, the only unary-only operator.
pub const ROOT_SYMBOL: char = '√';

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Power,    // ^
    Root,     // √
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
            Operator::Root => ROOT_SYMBOL,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    Number(f64),
    Identifier(String),
    Operator(Operator),
    OpenParen,
    CloseParen,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Number(value) => write!(f, "Number({})", value),
            TokenKind::Identifier(name) => write!(f, "Identifier({})", name),
            TokenKind::Operator(operator) => write!(f, "Operator({})", operator),
            TokenKind::OpenParen => write!(f, "OpenParen"),
            TokenKind::CloseParen => write!(f, "CloseParen"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The lexeme exactly as it appeared in the normalized input
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Token {
    pub fn is_operand(&self) -> bool {
        matches!(self.kind, TokenKind::Number(_) | TokenKind::Identifier(_))
    }
}
