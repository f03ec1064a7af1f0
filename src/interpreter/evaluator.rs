/// The evaluator and its last-result register.
///
/// Owns the only state that survives between evaluations and updates it only
/// when an evaluation succeeds.
pub mod core;

/// Function evaluation.
///
/// Holds the fixed table of constants and builtin functions and the math
/// primitives behind them.
pub mod function;
