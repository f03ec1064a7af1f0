use crate::{
    error::{EvalError, EvalResult},
    interpreter::{lexer::Token, parser::core::Parser},
};

impl Parser<'_> {
    /// Consumes the next token and checks that it is `wanted`.
    ///
    /// # Errors
    /// Returns `Syntax` naming `expected` and the token actually found.
    fn expect(&mut self, wanted: Token<'_>, expected: &'static str) -> EvalResult<()> {
        match self.tokens.next_token() {
            found if found == wanted => Ok(()),
            found => Err(EvalError::Syntax { expected,
                                             found: found.to_string() }),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar: `group := "(" expression ")"`
    pub(in crate::interpreter::parser) fn parse_group(&mut self) -> EvalResult<f64> {
        self.expect(Token::LParen, "'('")?;
        let value = self.nested(Self::parse_expression)?;
        self.expect(Token::RParen, "')'")?;
        Ok(value)
    }

    /// Parses the empty parameter list of a nullary call.
    ///
    /// Grammar: `empty_group := "(" ")"`
    pub(in crate::interpreter::parser) fn parse_empty_group(&mut self) -> EvalResult<()> {
        self.expect(Token::LParen, "'('")?;
        self.expect(Token::RParen, "')'")
    }

    /// Parses the two arguments of a binary call, in call order.
    ///
    /// Grammar: `argument_pair := "(" expression "," expression ")"`
    pub(in crate::interpreter::parser) fn parse_argument_pair(&mut self)
                                                              -> EvalResult<(f64, f64)> {
        self.expect(Token::LParen, "'('")?;
        let arg1 = self.parse_expression()?;
        self.expect(Token::Comma, "','")?;
        let arg2 = self.parse_expression()?;
        self.expect(Token::RParen, "')'")?;
        Ok((arg1, arg2))
    }
}
