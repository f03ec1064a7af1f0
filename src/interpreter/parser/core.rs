use crate::{
    error::{EvalError, EvalResult},
    interpreter::lexer::{Token, Tokenizer},
};

/// Maximum number of nested exponential and group levels in one expression.
///
/// Each parenthesized group counts twice: once for the group and once for the
/// exponential that contains it.
pub const MAX_NESTING: usize = 512;

/// Direct-evaluation recursive-descent parser.
///
/// Every parse routine returns the numeric value of what it consumed; no
/// syntax tree is built. A parser lives for exactly one evaluation.
pub struct Parser<'src> {
    pub(in crate::interpreter::parser) tokens: Tokenizer<'src>,
    /// Register value visible to `last` during this evaluation.
    pub(in crate::interpreter::parser) last:   f64,
    /// Number of nesting levels currently open.
    depth:                                     usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` that resolves `last` to `last`.
    #[must_use]
    pub fn new(source: &'src str, last: f64) -> Self {
        Self { tokens: Tokenizer::new(source),
               last,
               depth: 0 }
    }

    /// Evaluates the whole input as a single expression.
    ///
    /// # Errors
    /// - `EmptyExpression` if the input holds no tokens at all.
    /// - `TrailingInput` if tokens remain after a complete expression.
    /// - Anything raised by the descent itself.
    pub fn parse_input(mut self) -> EvalResult<f64> {
        if self.tokens.peek() == Token::End {
            return Err(EvalError::EmptyExpression);
        }

        let value = self.parse_expression()?;

        match self.tokens.peek() {
            Token::End => Ok(value),
            found => Err(EvalError::TrailingInput { found: found.to_string() }),
        }
    }

    /// Parses a full expression.
    ///
    /// Grammar: `expression := additive`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> EvalResult<f64> {
        self.parse_additive()
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// Returns `Syntax` without calling `parse` once [`MAX_NESTING`] levels
    /// are open.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    parse: impl FnOnce(&mut Self) -> EvalResult<T>)
                                                    -> EvalResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(EvalError::Syntax { expected: "shallower nesting",
                                           found:    self.tokens.peek().to_string(), });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

/// Evaluates `source` with `last` as the register value.
///
/// # Errors
/// See [`Parser::parse_input`].
pub fn parse_input(source: &str, last: f64) -> EvalResult<f64> {
    Parser::new(source, last).parse_input()
}
