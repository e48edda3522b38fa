//! Parser module for converting infix tokens to postfix order.
//!
//! This module contains the shunting-yard converter that turns the token
//! stream into a Reverse-Polish sequence. It handles:
//!
//! - Operator precedence and associativity via lookup tables
//! - Telling prefix (unary) operators apart from infix ones
//! - Parenthetical grouping and unmatched parenthesis errors

pub mod lookups;
pub mod parser;
pub mod postfix;
