/// The evaluator module owns the last-result register and the function table.
///
/// # Responsibilities
/// - Holds the only state that persists across evaluations.
/// - Maps identifier text to constants and builtin functions.
/// - Provides math primitives with calculator semantics.
pub mod evaluator;
/// The lexer module tokenizes expressions for the parser.
///
/// The lexer reads the raw text and produces numerals, identifiers,
/// operators and punctuation, with one token of lookahead.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Hands numeral text back unparsed.
/// - Turns unrecognized characters into an `Unknown` token instead of failing.
pub mod lexer;
/// The parser module evaluates expressions while descending the grammar.
///
/// Values are computed bottom-up as tokens are consumed; no syntax tree is
/// built.
///
/// # Responsibilities
/// - Enforces precedence and associativity of every operator.
/// - Dispatches identifiers to constants, the register, or builtin calls.
/// - Discriminates empty input, trailing input, unknown names, bad numerals
///   and syntax errors.
pub mod parser;
