//! Error types and error handling for the evaluator pipeline.
//!
//! This module defines the single error type shared by every stage:
//!
//! - An error structure carrying the position it was raised at
//! - Specific error variants for each pipeline stage
//! - A stage classification (`ErrorKind`) for callers that only care
//!   about which family of failure happened
//! - Helpful suggestions for the shell to print

pub mod errors;

#[cfg(test)]
mod tests;
