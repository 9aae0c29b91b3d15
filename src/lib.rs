//! # stackcalc
//!
//! stackcalc evaluates a small infix expression language. A line of text is
//! tokenized, grouped by parentheses, built into an expression tree by
//! operator precedence, flattened into a post-order stack machine program and
//! finally executed against a variable store that persists between lines.
//!
//! The language has numbers, names, `+ - * /`, assignment with `=` and
//! statement sequencing with `;`:
//!
//! ```
//! use stackcalc::{interpret, interpreter::value::core::RuntimeValue};
//!
//! assert_eq!(interpret("a = 3; b = a + 2; b").unwrap(), vec![RuntimeValue::Number(5.0)]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::{
    ast::{Expr, Instruction},
    error::{Error, ParseError},
    interpreter::{
        executor::{EvalResult, execute},
        grouper::group,
        lexer::tokenize,
        parser::build,
        session::Session,
        value::{core::RuntimeValue, store::VariableStore},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` tree built by the parser, the `Operator`
/// set of the language and the `Instruction`s of the stack machine program
/// that the linearizer derives from a tree.
pub mod ast;
/// Provides unified error types for parsing and execution.
///
/// This module defines all errors that can be raised while tokenizing,
/// grouping, building or executing a line. Every error aborts the line and
/// carries the position of the failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, executor).
/// - Attaches columns and instruction indices for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of line evaluation.
///
/// This module ties together lexing, grouping, parsing, linearization,
/// execution and the runtime values they exchange.
///
/// # Responsibilities
/// - Coordinates all pipeline stages.
/// - Provides sessions that keep variables between lines.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

static TRACING_INIT: Once = Once::new();

/// Initializes tracing output on stderr.
///
/// The filter is taken from `RUST_LOG` when it is set. Otherwise `verbose`
/// selects between `stackcalc=debug`, which logs the output of every pipeline
/// stage, and warnings only. Safe to call multiple times.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default = if verbose { "stackcalc=debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                                .with_target(true))
                                              .with(filter)
                                              .try_init();
    });
}

/// Parses one line of source into an expression tree.
///
/// Runs the lexer, the grouper and the parser in sequence.
///
/// # Errors
/// Returns the first `ParseError` raised by any of the three stages.
///
/// ## Example
/// ```
/// use stackcalc::{error::ParseError, parse_line};
///
/// let expr = parse_line("(1 + 2) * 3").unwrap();
/// assert_eq!(expr.to_string(), "((1 + 2) * 3)");
///
/// assert!(matches!(parse_line("(1 + 2"), Err(ParseError::UnmatchedParenthesis { .. })));
/// ```
#[tracing::instrument(level = "debug")]
pub fn parse_line(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    let tree = group(&tokens)?;
    build(&tree)
}

/// Executes a program against a variable store.
///
/// This is the executor entry point; use
/// [`linearize`](interpreter::linearizer::linearize) to obtain a program from
/// an expression.
///
/// # Errors
/// Returns the first `RuntimeError` raised during execution.
pub fn run_line(program: &[Instruction], store: &mut VariableStore) -> EvalResult<Vec<RuntimeValue>> {
    execute(program, store)
}

/// Evaluates one line in a fresh session.
///
/// ## Example
/// ```
/// use stackcalc::{error::Error, interpret, interpreter::value::core::RuntimeValue};
///
/// assert_eq!(interpret("1 + 2 * 3").unwrap(), vec![RuntimeValue::Number(7.0)]);
/// assert!(matches!(interpret("x + 1"), Err(Error::Runtime(_))));
/// ```
pub fn interpret(source: &str) -> Result<Vec<RuntimeValue>, Error> {
    Session::new().eval_line(source)
}
