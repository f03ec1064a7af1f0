/// Evaluation errors.
///
/// Defines every way a single `evaluate` call can fail: empty input, trailing
/// tokens, unknown identifiers, unconvertible numerals and structural syntax
/// mistakes. Floating-point domain problems are not errors and never appear
/// here.
pub mod eval_error;

pub use eval_error::{EvalError, EvalResult};
