#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character that starts no token.
    #[error("Error at column {column}: Invalid character '{character}'.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The byte column where it was found.
        column:    usize,
    },
    /// A parenthesis has no partner.
    #[error("Error at column {column}: Unmatched parenthesis.")]
    UnmatchedParenthesis {
        /// The byte column of the unmatched parenthesis.
        column: usize,
    },
    /// The tokens do not form an expression.
    #[error("Error at column {column}: Malformed expression: {details}.")]
    MalformedExpression {
        /// Details about what was found instead of an expression.
        details: String,
        /// The byte column where the malformed part starts.
        column:  usize,
    },
}
