use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        evaluator::function::{
            builtin,
            core::{Arity, LAST_RESULT, lookup_constant, lookup_function},
        },
        lexer::Token,
        parser::core::Parser,
    },
};

impl Parser<'_> {
    /// Parses prefix signs and exponentiation.
    ///
    /// A prefix sign applies to the entire exponential that follows it, so
    /// `-2^2` is `-(2^2)`. Exponentiation is right-associative: `2^3^2` is
    /// `2^(3^2)`.
    ///
    /// Grammar:
    /// ```text
    ///     exponential := ("+" | "-") exponential
    ///                  | base (("^" | "**") exponential)?
    /// ```
    pub(in crate::interpreter::parser) fn parse_exponential(&mut self) -> EvalResult<f64> {
        self.nested(Self::parse_signed_power)
    }

    fn parse_signed_power(&mut self) -> EvalResult<f64> {
        match self.tokens.peek() {
            Token::Add => {
                self.tokens.next_token();
                return self.parse_exponential();
            },
            Token::Sub => {
                self.tokens.next_token();
                return Ok(-self.parse_exponential()?);
            },
            _ => {},
        }

        let base = self.parse_base()?;
        if self.tokens.peek() == Token::Pow {
            self.tokens.next_token();
            let exponent = self.parse_exponential()?;
            return Ok(builtin::pow(base, exponent));
        }
        Ok(base)
    }

    /// Parses a numeral, a parenthesized group or an identifier.
    ///
    /// Grammar: `base := number | "(" expression ")" | identifier`
    ///
    /// Any other token falls through to [`Parser::parse_identifier`], which
    /// reports it as a syntax error.
    fn parse_base(&mut self) -> EvalResult<f64> {
        match self.tokens.peek() {
            Token::Number(text) => {
                let value = parse_numeral(text)?;
                self.tokens.next_token();
                Ok(value)
            },
            Token::LParen => self.parse_group(),
            _ => self.parse_identifier(),
        }
    }

    /// Resolves an identifier to a constant, the register or a function call.
    ///
    /// Constants and `last` take no parameter list. Functions consume the
    /// parameter list their arity demands: `()`, `(expr)` or `(expr, expr)`.
    ///
    /// # Errors
    /// - `Syntax` if the token is not an identifier or a parameter list is
    ///   malformed.
    /// - `UndefinedIdentifier` if the name is unknown.
    fn parse_identifier(&mut self) -> EvalResult<f64> {
        let name = match self.tokens.next_token() {
            Token::Ident(name) => name,
            found => {
                return Err(EvalError::Syntax { expected: "a number, '(' or an identifier",
                                               found:    found.to_string(), });
            },
        };

        if name == LAST_RESULT {
            return Ok(self.last);
        }
        if let Some(value) = lookup_constant(name) {
            return Ok(value);
        }

        match lookup_function(name) {
            Some(Arity::Nullary(func)) => {
                self.parse_empty_group()?;
                Ok(func())
            },
            Some(Arity::Unary(func)) => Ok(func(self.parse_group()?)),
            Some(Arity::Binary(func)) => {
                let (arg1, arg2) = self.parse_argument_pair()?;
                Ok(func(arg1, arg2))
            },
            None => Err(EvalError::UndefinedIdentifier { name: name.to_string() }),
        }
    }
}

/// Converts numeral text to a number.
///
/// # Errors
/// Returns `InvalidNumeral` if the text is not a decimal number (a lone `.`)
/// or converts to NaN.
fn parse_numeral(text: &str) -> EvalResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(EvalError::InvalidNumeral { text: text.to_string() }),
    }
}
