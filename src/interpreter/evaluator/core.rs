use crate::{error::EvalResult, interpreter::parser::core::Parser};

/// Evaluates expressions and remembers the last successful result.
///
/// ## Usage
///
/// An `Evaluator` is created once and reused for every expression the user
/// submits. The register starts at `0.0`, is readable from expressions as
/// `last`, and is overwritten only when an evaluation succeeds; a failed call
/// leaves it untouched.
///
/// ```
/// use pcalc::Evaluator;
///
/// let mut evaluator = Evaluator::new();
/// assert_eq!(evaluator.evaluate("3 + 4").unwrap(), 7.0);
/// assert!(evaluator.evaluate("3 +").is_err());
/// assert_eq!(evaluator.evaluate("last * 2").unwrap(), 14.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    last_result: f64,
}

impl Evaluator {
    /// Creates an evaluator with the register set to `0.0`.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_result: 0.0 }
    }

    /// Evaluates a single-line expression.
    ///
    /// On success the result is stored in the register and returned. NaN and
    /// infinite results are ordinary results.
    ///
    /// # Errors
    /// Returns the [`EvalError`](crate::error::EvalError) that aborted the
    /// descent; the register keeps its previous value.
    pub fn evaluate(&mut self, source: &str) -> EvalResult<f64> {
        let value = Parser::new(source, self.last_result).parse_input()?;
        self.last_result = value;
        Ok(value)
    }

    /// Returns the value `last` currently resolves to.
    #[must_use]
    pub const fn last_result(&self) -> f64 {
        self.last_result
    }

    /// Clears the register back to `0.0`.
    pub const fn reset(&mut self) {
        self.last_result = 0.0;
    }
}
