/// Entry point and shared parser state.
///
/// Holds the tokenizer view and the register value for one evaluation and
/// enforces the empty-input and trailing-input rules around the descent.
pub mod core;

/// Left-associative binary levels.
///
/// Additive (`+`, `-`) and multiplicative (`*`, `/`) expressions.
pub mod binary;

/// Prefix signs, exponentiation and the base forms.
///
/// Numerals, groups, constants and function calls.
pub mod unary;

/// Token expectations and parameter-list helpers.
pub mod utils;
