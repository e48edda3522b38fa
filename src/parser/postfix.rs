use std::fmt::Display;

use crate::{lexer::tokens::Operator, Span};

use super::lookups::Arity;

/// One item of a Reverse-Polish sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum PostfixItem {
    Number { value: f64, span: Span },
    Identifier { name: String, span: Span },
    Operator { operator: Operator, arity: Arity, span: Span },
}

impl PostfixItem {
    pub fn get_span(&self) -> &Span {
        match self {
            PostfixItem::Number { span, .. }
            | PostfixItem::Identifier { span, .. }
            | PostfixItem::Operator { span, .. } => span,
        }
    }
}

impl Display for PostfixItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostfixItem::Number { value, .. } => write!(f, "{}", value),
            PostfixItem::Identifier { name, .. } => write!(f, "{}", name),
            // Negation is spelled out so it can't be read as a subtraction
            PostfixItem::Operator { operator: Operator::Subtract, arity: Arity::Unary, .. } => {
                write!(f, "neg")
            }
            PostfixItem::Operator { operator, .. } => write!(f, "{}", operator),
        }
    }
}

/// Formats a postfix sequence as `[3, 4, 2, *, +]`.
pub fn format_postfix(items: &[PostfixItem]) -> String {
    let items = items.iter().map(|item| item.to_string()).collect::<Vec<String>>();
    format!("[{}]", items.join(", "))
}
