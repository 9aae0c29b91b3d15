/// The executor module runs stack machine programs.
///
/// The executor walks a program instruction by instruction, keeping operands
/// on a value stack and writing assignments into a variable store that
/// outlives the run.
///
/// # Responsibilities
/// - Executes `PushNumber`, `ReadVariable`, `WriteVariable` and `Operate`.
/// - Applies IEEE 754 arithmetic and performs assignments.
/// - Reports runtime errors such as undefined variables or missing operands.
pub mod executor;
/// The grouper module nests parenthesized token spans.
///
/// The grouper turns the flat token list into a token tree in which every
/// matched pair of parentheses becomes a nested group and the parenthesis
/// tokens themselves disappear.
pub mod grouper;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: numbers, names, operators and parentheses. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their column.
/// - Skips whitespace.
/// - Reports invalid characters.
pub mod lexer;
/// The linearizer module flattens expression trees into programs.
///
/// A post-order traversal emits operands before their operator, and decides
/// for every name whether it is read or assigned.
pub mod linearizer;
/// The parser module builds the abstract syntax tree (AST) from a token tree.
///
/// The parser splits the token tree at its loosest-binding operator, level by
/// level, and recurses into both halves and into nested groups.
///
/// # Responsibilities
/// - Converts token trees into `Expr` nodes.
/// - Applies operator precedence.
/// - Reports malformed expressions with their column.
pub mod parser;
/// Sessions that keep variables alive between lines.
pub mod session;
/// The value module defines the runtime data types for execution.
///
/// This module declares the values that live on the executor's stack and the
/// variable store shared by all lines of a session.
pub mod value;
