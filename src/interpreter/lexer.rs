use std::fmt;

use logos::Logos;

/// Represents a lexical token in an expression.
///
/// Numerals and identifiers borrow their lexeme from the source text; the
/// numeral text is handed to the evaluator unparsed. Whitespace never produces
/// a token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    /// Numeral tokens, such as `42`, `3.14`, `5.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", |lex| lex.slice())]
    #[regex(r"\.[0-9]*", |lex| lex.slice())]
    Number(&'src str),
    /// Identifier tokens; constant or function names such as `pi` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice())]
    Ident(&'src str),
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `^` or `**`
    #[token("^")]
    #[token("**")]
    Pow,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Unrecognized characters.
    Unknown,
    /// End of input. Repeats forever once reached.
    End,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => write!(f, "number '{text}'"),
            Self::Ident(name) => write!(f, "identifier '{name}'"),
            Self::Add => write!(f, "'+'"),
            Self::Sub => write!(f, "'-'"),
            Self::Mul => write!(f, "'*'"),
            Self::Div => write!(f, "'/'"),
            Self::Pow => write!(f, "'^'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::Unknown => write!(f, "unrecognized character"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// A one-token-lookahead view over an expression.
///
/// Wraps the logos lexer and turns its two out-of-band signals into ordinary
/// tokens: a lexing failure becomes [`Token::Unknown`] and exhaustion becomes
/// [`Token::End`], which every later `peek` or `next_token` returns again.
pub struct Tokenizer<'src> {
    lexer:  logos::Lexer<'src, Token<'src>>,
    peeked: Option<Token<'src>>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned before the first token of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:  Token::lexer(source),
               peeked: None, }
    }

    /// Returns the next token without consuming it.
    ///
    /// Repeated calls without an intervening [`Tokenizer::next_token`] return
    /// the same token.
    pub fn peek(&mut self) -> Token<'src> {
        if let Some(token) = self.peeked {
            return token;
        }
        let token = self.advance();
        self.peeked = Some(token);
        token
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        self.peeked.take().unwrap_or_else(|| self.advance())
    }

    fn advance(&mut self) -> Token<'src> {
        match self.lexer.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Unknown,
            None => Token::End,
        }
    }
}
