use thiserror::Error;

/// Result type used by the tokenizer-driven evaluator.
///
/// Every descent routine returns either the partial value it computed or the
/// [`EvalError`] that aborted the call.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents all errors that can occur while evaluating an expression.
///
/// Each variant carries only the data needed to build a message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The input was empty or contained only whitespace.
    #[error("Error: No expression to evaluate.")]
    EmptyExpression,
    /// A complete expression was parsed but more tokens followed it.
    #[error("Error: Extra input after expression, found {found}.")]
    TrailingInput {
        /// Description of the first unconsumed token.
        found: String,
    },
    /// An identifier matched no constant and no function.
    #[error("Error: Undefined identifier '{name}'.")]
    UndefinedIdentifier {
        /// The identifier text.
        name: String,
    },
    /// A numeral lexeme could not be converted to a number.
    #[error("Error: Cannot convert '{text}' to a number.")]
    InvalidNumeral {
        /// The raw numeral text.
        text: String,
    },
    /// Any structural mismatch between the input and the grammar.
    #[error("Error: Syntax error, expected {expected} but found {found}.")]
    Syntax {
        /// What the grammar required at this point.
        expected: &'static str,
        /// Description of the token that was found instead.
        found:    String,
    },
}

impl EvalError {
    /// Short, stable name of the variant.
    ///
    /// Used by the test case files and by debug logging, where the full
    /// message is too noisy.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyExpression => "EmptyExpression",
            Self::TrailingInput { .. } => "TrailingInput",
            Self::UndefinedIdentifier { .. } => "UndefinedIdentifier",
            Self::InvalidNumeral { .. } => "InvalidNumeral",
            Self::Syntax { .. } => "SyntaxError",
        }
    }
}
