/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing, grouping and
/// building the expression tree of a line. Parse errors carry the byte column
/// of the offending input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a stack
/// machine program. Runtime errors carry the index of the failing
/// instruction.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that aborts the evaluation of a line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while executing.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
