use crate::{
    error::Error,
    interpreter::{
        linearizer::linearize,
        value::{core::RuntimeValue, store::VariableStore},
    },
    parse_line, run_line,
};

/// An interactive session.
///
/// A session owns the variable store that persists between evaluated lines,
/// so a REPL (or any other host) only has to keep one `Session` alive.
///
/// ## Usage
///
/// ```
/// use stackcalc::interpreter::{session::Session, value::core::RuntimeValue};
///
/// let mut session = Session::new();
/// assert_eq!(session.eval_line("a = 3").unwrap(), vec![]);
/// assert_eq!(session.eval_line("a * 2").unwrap(), vec![RuntimeValue::Number(6.0)]);
/// assert_eq!(session.store().get("a"), Some(3.0));
/// ```
#[derive(Debug, Default)]
pub struct Session {
    store: VariableStore,
}

impl Session {
    /// Creates a session with an empty variable store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses, linearizes and executes one line of source.
    ///
    /// # Returns
    /// The value stack left by the line.
    ///
    /// # Errors
    /// Returns the first parse or runtime error. Assignments that completed
    /// before a runtime error remain in the store.
    pub fn eval_line(&mut self, source: &str) -> Result<Vec<RuntimeValue>, Error> {
        let expr = parse_line(source)?;
        let program = linearize(&expr);
        Ok(run_line(&program, &mut self.store)?)
    }

    /// Returns the variables assigned so far.
    #[must_use]
    pub const fn store(&self) -> &VariableStore {
        &self.store
    }
}
