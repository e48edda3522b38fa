//! Input cleanup ahead of tokenization.
//!
//! Strips whitespace and collapses runs of consecutive `+`/`-` signs into a
//! single canonical sign, dropping redundant unary pluses.

pub mod normalizer;
