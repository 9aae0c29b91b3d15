use logos::Logos;

use crate::{ast::Operator, error::ParseError, interpreter::parser::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens: a run of decimal digits such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// One of the binary operators `+ - * / = ;`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("=", |_| Operator::Assign)]
    #[token(";", |_| Operator::Sequence)]
    Operator(Operator),
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Converts source text into tokens paired with their byte column.
///
/// Spaces, tabs, carriage returns, line feeds and form feeds are all skipped
/// as whitespace, not just the space character. Digits form numbers, letters
/// and underscores start names, and every other character outside
/// `+ - * / = ; ( )` is rejected.
/// There is no decimal point, so `1.5` fails at the `.`.
///
/// # Errors
/// Returns `ParseError::InvalidCharacter` for the first character that
/// starts no token.
///
/// ## Example
/// ```
/// use stackcalc::{
///     ast::Operator,
///     error::ParseError,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("x1 = 20").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Name("x1".to_string()), 0),
///                 (Token::Operator(Operator::Assign), 3),
///                 (Token::Number(20.0), 5)]);
///
/// assert_eq!(tokenize("1\t+\r\n2").unwrap().len(), 3);
///
/// let err = tokenize("1.5").unwrap_err();
/// assert_eq!(err, ParseError::InvalidCharacter { character: '.',
///                                                column:    1, });
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();

    for (token, span) in Token::lexer(source).spanned() {
        let column = span.start;
        if let Ok(tok) = token {
            tokens.push((tok, column));
        } else {
            let character = source[column..].chars().next().unwrap_or_default();
            return Err(ParseError::InvalidCharacter { character, column });
        }
    }

    tracing::debug!(?tokens, "tokenized");
    Ok(tokens)
}

/// Parses a number literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
