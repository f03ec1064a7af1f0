use crate::{
    error::EvalResult,
    interpreter::{lexer::Token, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> EvalResult<f64> {
        let mut left = self.parse_multiplicative()?;
        loop {
            match self.tokens.peek() {
                Token::Add => {
                    self.tokens.next_token();
                    left += self.parse_multiplicative()?;
                },
                Token::Sub => {
                    self.tokens.next_token();
                    left -= self.parse_multiplicative()?;
                },
                _ => break,
            }
        }
        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// The rule is: `multiplicative := exponential (("*" | "/") exponential)*`
    ///
    /// Division by zero follows IEEE 754 and yields an infinity or NaN.
    pub(in crate::interpreter::parser) fn parse_multiplicative(&mut self) -> EvalResult<f64> {
        let mut left = self.parse_exponential()?;
        loop {
            match self.tokens.peek() {
                Token::Mul => {
                    self.tokens.next_token();
                    left *= self.parse_exponential()?;
                },
                Token::Div => {
                    self.tokens.next_token();
                    left /= self.parse_exponential()?;
                },
                _ => break,
            }
        }
        Ok(left)
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::parser::core::parse_input;

    #[test]
    fn division_by_zero_is_not_an_error() {
        assert_eq!(parse_input("1/0", 0.0), Ok(f64::INFINITY));
        assert_eq!(parse_input("-1/0", 0.0), Ok(f64::NEG_INFINITY));
        assert!(parse_input("0/0", 0.0).is_ok_and(f64::is_nan));
    }

    #[test]
    fn operands_are_evaluated_left_to_right() {
        assert_eq!(parse_input("1 - 2 + 3", 0.0), Ok(2.0));
        assert_eq!(parse_input("8 / 2 * 4", 0.0), Ok(16.0));
    }
}
