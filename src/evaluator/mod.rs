//! Tree evaluation module.
//!
//! Reduces an expression tree to an `f64` by recursive post-order descent,
//! substituting variables from a binding table supplied by the caller.
//! Division by zero, negative radicands and unbound variables are reported
//! as errors rather than producing infinities or NaN.

pub mod evaluator;

#[cfg(test)]
mod tests;
