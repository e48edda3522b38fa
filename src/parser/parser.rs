//! Infix to postfix conversion (shunting-yard).
//!
//! This module contains the Parser struct and the `to_postfix` entry point.
//! The parser keeps an append-only output sequence and a LIFO operator
//! stack, and consults a lookup table for the precedence and associativity
//! of every operator in each of the positions it can appear in.
//!
//! Whether a `+`/`-` is unary or binary is decided here: an operator met
//! where an operand is expected (start of input, after `(` or after another
//! operator) is a prefix operator.

use std::collections::HashMap;

use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Operator, Token, TokenKind},
    Span,
};

use super::{
    lookups::{create_operator_lookups, Arity, Associativity, OperatorLookup, Precedence},
    postfix::{format_postfix, PostfixItem},
};

#[derive(Debug, Clone)]
enum StackEntry {
    Operator {
        operator: Operator,
        arity: Arity,
        span: Span,
    },
    OpenParen(Span),
}

/// The conversion state for one token sequence.
pub struct Parser {
    /// Postfix items produced so far
    output: Vec<PostfixItem>,
    /// Holding area for operators and open parentheses
    stack: Vec<StackEntry>,
    /// Precedence and associativity per operator and arity
    operator_lookup: OperatorLookup,
    /// True when the next token should start an operand
    expect_operand: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a parser with empty lookup tables.
    pub fn new() -> Self {
        Parser {
            output: vec![],
            stack: vec![],
            operator_lookup: HashMap::new(),
            expect_operand: true,
        }
    }

    /// Registers a binary operator.
    pub fn infix(&mut self, operator: Operator, precedence: Precedence, associativity: Associativity) {
        self.operator_lookup
            .insert((operator, Arity::Binary), (precedence, associativity));
    }

    /// Registers a prefix operator. Prefix operators group right to left.
    pub fn prefix(&mut self, operator: Operator, precedence: Precedence) {
        self.operator_lookup
            .insert((operator, Arity::Unary), (precedence, Associativity::Right));
    }

    pub fn get_operator_lookup(&self) -> &OperatorLookup {
        &self.operator_lookup
    }

    fn lookup(&self, operator: Operator, arity: Arity) -> Option<(Precedence, Associativity)> {
        self.operator_lookup.get(&(operator, arity)).copied()
    }

    /// Decides how an operator is used at the current position.
    ///
    /// Returns `None` for a prefix `+`, which is the identity and emits nothing.
    fn resolve_arity(&self, operator: Operator) -> Option<Arity> {
        let has_prefix = self.lookup(operator, Arity::Unary).is_some();
        let has_infix = self.lookup(operator, Arity::Binary).is_some();

        if self.expect_operand {
            if has_prefix {
                Some(Arity::Unary)
            } else if operator == Operator::Add {
                None
            } else {
                // Left for the tree builder to report the missing operand
                Some(Arity::Binary)
            }
        } else if has_infix {
            Some(Arity::Binary)
        } else {
            Some(Arity::Unary)
        }
    }

    fn push_value(&mut self, item: PostfixItem) {
        self.output.push(item);
        self.expect_operand = false;
    }

    fn push_operator(&mut self, operator: Operator, span: Span) {
        let Some(arity) = self.resolve_arity(operator) else {
            return;
        };

        if arity == Arity::Binary {
            let (precedence, associativity) = self
                .lookup(operator, arity)
                .unwrap_or((Precedence::Additive, Associativity::Left));

            while let Some(StackEntry::Operator { operator: top, arity: top_arity, .. }) = self.stack.last() {
                let top_precedence = self
                    .lookup(*top, *top_arity)
                    .map_or(Precedence::Additive, |(precedence, _)| precedence);

                let pops = top_precedence > precedence
                    || (top_precedence == precedence && associativity == Associativity::Left);
                if !pops {
                    break;
                }

                self.pop_to_output();
            }
        }

        self.stack.push(StackEntry::Operator { operator, arity, span });
        self.expect_operand = true;
    }

    fn pop_to_output(&mut self) {
        if let Some(StackEntry::Operator { operator, arity, span }) = self.stack.pop() {
            self.output.push(PostfixItem::Operator { operator, arity, span });
        }
    }

    fn close_paren(&mut self, span: Span) -> Result<(), Error> {
        loop {
            match self.stack.pop() {
                Some(StackEntry::OpenParen(_)) => break,
                Some(StackEntry::Operator { operator, arity, span }) => {
                    self.output.push(PostfixItem::Operator { operator, arity, span });
                }
                None => return Err(Error::new(ErrorImpl::UnmatchedClosingParen, span.start)),
            }
        }

        self.expect_operand = false;
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<PostfixItem>, Error> {
        while let Some(entry) = self.stack.pop() {
            match entry {
                StackEntry::Operator { operator, arity, span } => {
                    self.output.push(PostfixItem::Operator { operator, arity, span });
                }
                StackEntry::OpenParen(span) => {
                    return Err(Error::new(ErrorImpl::UnmatchedOpeningParen, span.start));
                }
            }
        }

        Ok(self.output)
    }
}

/// Converts an infix token sequence into postfix order.
///
/// # Arguments
///
/// * `tokens` - Tokens produced by the lexer
///
/// # Returns
///
/// The postfix sequence, or a syntax error for an unmatched parenthesis.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<PostfixItem>, Error> {
    let mut parser = Parser::new();
    create_operator_lookups(&mut parser);

    for token in tokens {
        match token.kind {
            TokenKind::Number(value) => parser.push_value(PostfixItem::Number { value, span: token.span }),
            TokenKind::Identifier(name) => parser.push_value(PostfixItem::Identifier { name, span: token.span }),
            TokenKind::Operator(operator) => parser.push_operator(operator, token.span),
            TokenKind::OpenParen => {
                parser.stack.push(StackEntry::OpenParen(token.span));
                parser.expect_operand = true;
            }
            TokenKind::CloseParen => parser.close_paren(token.span)?,
        }
    }

    let output = parser.finish()?;
    debug!("postfix: {}", format_postfix(&output));
    Ok(output)
}
