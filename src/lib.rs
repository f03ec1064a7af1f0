//! # pcalc
//!
//! pcalc is an on-demand arithmetic expression evaluator written in Rust.
//! It tokenizes a single-line expression and computes its value directly
//! while descending the grammar, with support for operator precedence,
//! grouping, named constants, a last-result register and a fixed library of
//! math functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type for evaluation.
///
/// This module defines every error an evaluation can end with. Each variant
/// carries only the text needed to explain the failure to the user.
///
/// # Responsibilities
/// - Discriminates empty input, trailing input, unknown identifiers, bad
///   numerals and syntax errors.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the evaluation of an expression.
///
/// This module ties together the lexer, the direct-evaluation parser and the
/// evaluator that owns the last-result register.
///
/// # Responsibilities
/// - Coordinates tokenizing and evaluating user input.
/// - Provides the function table and its math primitives.
/// - Manages the flow of values and errors through the descent.
pub mod interpreter;
/// Line-oriented host sessions.
///
/// Runs one evaluator over a stream of lines the way the command-line front
/// end uses it, writing results and errors to caller-supplied sinks.
///
/// # Responsibilities
/// - Skips blank lines and keeps `last` chained across lines.
/// - Reports whether every evaluated line succeeded.
/// - Lists the known constants and functions.
pub mod session;
/// General utilities shared by the library and the command-line front end.
///
/// # Responsibilities
/// - Format results, including NaN and infinities, for display.
pub mod util;

pub use error::{EvalError, EvalResult};
pub use interpreter::evaluator::core::Evaluator;

/// Evaluates a single expression with a fresh evaluator.
///
/// `last` resolves to `0.0` because nothing has been evaluated before.
///
/// # Errors
/// Returns the [`EvalError`] that aborted the evaluation.
///
/// # Examples
/// ```
/// use pcalc::{EvalError, evaluate_once};
///
/// assert_eq!(evaluate_once("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate_once("   "), Err(EvalError::EmptyExpression));
/// ```
pub fn evaluate_once(source: &str) -> EvalResult<f64> {
    Evaluator::new().evaluate(source)
}
