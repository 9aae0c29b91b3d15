use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{MAX_DEPTH, ParseResult, too_deep},
    },
};

/// One element of a [`TokenTree`].
///
/// A node is either a plain token or a parenthesized group whose contents
/// have been grouped recursively. Parenthesis tokens never appear as nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    /// A single non-parenthesis token.
    Token {
        /// The token.
        token:  Token,
        /// Byte column of the token.
        column: usize,
    },
    /// The contents of a matched pair of parentheses.
    Group {
        /// The grouped contents.
        nodes:  TokenTree,
        /// Byte column of the opening parenthesis.
        column: usize,
    },
}

impl TokenNode {
    /// Gets the byte column where the node starts.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Token { column, .. } | Self::Group { column, .. } => *column,
        }
    }
}

/// A token sequence with every parenthesized span replaced by a nested group.
pub type TokenTree = Vec<TokenNode>;

/// Replaces parenthesized spans with nested groups.
///
/// Each `(` is paired with the first `)` at which the nesting depth returns
/// to zero. The tokens strictly between them are grouped recursively and
/// spliced in as a single [`TokenNode::Group`]. All other tokens pass through
/// unchanged.
///
/// # Errors
/// Returns `ParseError::UnmatchedParenthesis` if a `(` is never closed or a
/// `)` has nothing to close, and `ParseError::MalformedExpression` if groups
/// nest deeper than [`MAX_DEPTH`].
///
/// ## Example
/// ```
/// use stackcalc::interpreter::{
///     grouper::{TokenNode, group},
///     lexer::tokenize,
/// };
///
/// let tree = group(&tokenize("(1 + 2) * 3").unwrap()).unwrap();
/// assert_eq!(tree.len(), 3);
/// assert!(matches!(&tree[0], TokenNode::Group { nodes, .. } if nodes.len() == 3));
///
/// assert!(group(&tokenize("(1 + 2").unwrap()).is_err());
/// ```
pub fn group(tokens: &[(Token, usize)]) -> ParseResult<TokenTree> {
    group_nested(tokens, 0)
}

fn group_nested(tokens: &[(Token, usize)], depth: usize) -> ParseResult<TokenTree> {
    let mut nodes = Vec::new();
    let mut i = 0;

    while let Some((token, column)) = tokens.get(i) {
        match token {
            Token::LParen => {
                if depth >= MAX_DEPTH {
                    return Err(too_deep(*column));
                }
                let close = matching_paren(tokens, i).ok_or(ParseError::UnmatchedParenthesis { column: *column })?;
                nodes.push(TokenNode::Group { nodes:  group_nested(&tokens[i + 1..close], depth + 1)?,
                                              column: *column, });
                i = close + 1;
            },
            Token::RParen => return Err(ParseError::UnmatchedParenthesis { column: *column }),
            _ => {
                nodes.push(TokenNode::Token { token:  token.clone(),
                                              column: *column, });
                i += 1;
            },
        }
    }

    Ok(nodes)
}

/// Finds the index of the `)` that closes the `(` at `open`.
fn matching_paren(tokens: &[(Token, usize)], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, (token, _)) in tokens.iter().enumerate().skip(open) {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            },
            _ => {},
        }
    }
    None
}
