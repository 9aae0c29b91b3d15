use crate::{
    ast::{Expr, Operator},
    error::ParseError,
    interpreter::{grouper::TokenNode, lexer::Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Operator precedence levels, loosest binding first.
///
/// The loosest operator present in a sequence becomes the root of its tree.
pub const PRECEDENCE: [&[Operator]; 4] = [&[Operator::Sequence],
                                          &[Operator::Assign],
                                          &[Operator::Add, Operator::Sub],
                                          &[Operator::Mul, Operator::Div]];

/// Deepest nesting of groups or sub-expressions a line may produce.
///
/// Equal-precedence chains nest to the right, so a long chain is as deep as
/// it has terms. Every recursive stage stays within this bound.
pub const MAX_DEPTH: usize = 256;

/// Builds an expression tree from a grouped token sequence.
///
/// This is the entry point for tree building. It walks the precedence levels
/// from loosest to tightest and splits the sequence at the first operator
/// found on a level. Both halves are then built recursively, starting again
/// from the loosest level, so a chain of equal-precedence operators nests to
/// the right: `8 - 4 - 2` builds as `8 - (4 - 2)`.
///
/// A sequence without operators must consist of exactly one node: a group,
/// a number or a name.
///
/// # Parameters
/// - `nodes`: The token tree produced by the grouper.
///
/// # Returns
/// The root of the expression tree.
///
/// # Errors
/// Returns `ParseError::MalformedExpression` if an operand is missing, two
/// operands follow each other without an operator, or the tree would be
/// deeper than [`MAX_DEPTH`].
///
/// ## Example
/// ```
/// use stackcalc::interpreter::{grouper::group, lexer::tokenize, parser::build};
///
/// let tree = group(&tokenize("1 + 2 * 3").unwrap()).unwrap();
/// assert_eq!(build(&tree).unwrap().to_string(), "(1 + (2 * 3))");
/// ```
pub fn build(nodes: &[TokenNode]) -> ParseResult<Expr> {
    let expr = build_from(nodes, 0, 0)?;
    tracing::debug!(%expr, "built expression tree");
    Ok(expr)
}

/// Builds one sequence; `column` locates the sequence when it is empty.
fn build_from(nodes: &[TokenNode], column: usize, depth: usize) -> ParseResult<Expr> {
    if depth > MAX_DEPTH {
        return Err(too_deep(nodes.first().map_or(column, TokenNode::column)));
    }

    for level in PRECEDENCE {
        if let Some((split, op, op_column)) = find_operator(nodes, level) {
            let left = build_from(&nodes[..split], op_column, depth + 1)?;
            let right = build_from(&nodes[split + 1..], op_column, depth + 1)?;
            return Ok(Expr::binary(op, left, right));
        }
    }

    match nodes {
        [] => Err(ParseError::MalformedExpression { details: "expected an operand".to_string(),
                                                    column }),
        [TokenNode::Group { nodes, column }] => build_from(nodes, *column, depth + 1),
        [TokenNode::Token { token: Token::Number(value),
                            .. }] => Ok(Expr::Number(*value)),
        [TokenNode::Token { token: Token::Name(name),
                            .. }] => Ok(Expr::Name(name.clone())),
        [TokenNode::Token { token, column }] => {
            Err(ParseError::MalformedExpression { details: format!("unexpected token {token:?}"),
                                                  column:  *column, })
        },
        [_, second, ..] => {
            Err(ParseError::MalformedExpression { details: "missing operator between operands".to_string(),
                                                  column:  second.column(), })
        },
    }
}

/// The error for a line nested deeper than [`MAX_DEPTH`].
pub(crate) fn too_deep(column: usize) -> ParseError {
    ParseError::MalformedExpression { details: "expression nested too deeply".to_string(),
                                      column }
}

/// Finds the first operator of a precedence level in a sequence.
///
/// # Returns
/// The index of the operator node, the operator, and its column.
fn find_operator(nodes: &[TokenNode], level: &[Operator]) -> Option<(usize, Operator, usize)> {
    nodes.iter().enumerate().find_map(|(i, node)| match node {
                                 TokenNode::Token { token: Token::Operator(op),
                                                    column, } if level.contains(op) => {
                                     Some((i, *op, *column))
                                 },
                                 _ => None,
                             })
}
