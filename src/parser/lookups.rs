use std::collections::HashMap;

use crate::lexer::tokens::Operator;

use super::parser::Parser;

/// Binding strength of an operator, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Additive,
    Multiplicative,
    Exponent,
    Root,
}

impl Precedence {
    pub fn level(&self) -> u8 {
        match self {
            Precedence::Additive => 1,
            Precedence::Multiplicative => 2,
            Precedence::Exponent => 3,
            Precedence::Root => 4,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum Arity {
    Unary,
    Binary,
}

pub fn create_operator_lookups(parser: &mut Parser) {
    // Additive and multiplicative
    parser.infix(Operator::Add, Precedence::Additive, Associativity::Left);
    parser.infix(Operator::Subtract, Precedence::Additive, Associativity::Left);
    parser.infix(Operator::Multiply, Precedence::Multiplicative, Associativity::Left);
    parser.infix(Operator::Divide, Precedence::Multiplicative, Associativity::Left);

    parser.infix(Operator::Power, Precedence::Exponent, Associativity::Right);

    // Prefix. Negation sits below `^` so that -2^2 is -(2^2)
    parser.prefix(Operator::Subtract, Precedence::Multiplicative);
    parser.prefix(Operator::Root, Precedence::Root);
}

// Lookup table inside parser struct, keyed by operator and the position it was used in
pub type OperatorLookup = HashMap<(Operator, Arity), (Precedence, Associativity)>;
