//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts a normalized
//! expression string into a stream of tokens for the converter. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of numbers, identifiers, operators and parentheses
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
