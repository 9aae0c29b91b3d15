use crate::{
    ast::{Instruction, Operator},
    error::RuntimeError,
    interpreter::value::{core::RuntimeValue, store::VariableStore},
};

/// Result type used by the executor.
///
/// All execution functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state of one program execution.
///
/// The value stack is scratch space owned by a single run. The variable store
/// is borrowed from the caller so that assignments outlive the run.
pub struct Machine<'a> {
    /// Operands waiting to be consumed.
    pub stack: Vec<RuntimeValue>,
    store:     &'a mut VariableStore,
}

impl<'a> Machine<'a> {
    /// Creates a machine with an empty stack over an existing store.
    #[must_use]
    pub const fn new(store: &'a mut VariableStore) -> Self {
        Self { stack: Vec::new(),
               store }
    }

    /// Executes a single instruction.
    ///
    /// # Parameters
    /// - `instruction`: The instruction to execute.
    /// - `index`: Position of the instruction in its program, used for error
    ///   reporting.
    pub fn step(&mut self, instruction: &Instruction, index: usize) -> EvalResult<()> {
        tracing::trace!(index, %instruction, depth = self.stack.len(), "executing");
        match instruction {
            Instruction::PushNumber(value) => self.stack.push((*value).into()),
            Instruction::ReadVariable(name) => {
                let value =
                    self.store
                        .get(name)
                        .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                         index })?;
                self.stack.push(value.into());
            },
            Instruction::WriteVariable(name) => self.stack.push(RuntimeValue::Target(name.clone())),
            Instruction::Operate(op) => self.operate(*op, index)?,
        }
        Ok(())
    }

    /// Applies a binary operator to the top two stack values.
    ///
    /// `;` only separates statements that are already fully reduced, so it
    /// leaves the stack untouched. `=` stores its right operand under the
    /// target name on its left and pushes nothing back.
    fn operate(&mut self, op: Operator, index: usize) -> EvalResult<()> {
        if op == Operator::Sequence {
            return Ok(());
        }

        let (left, right) = self.pop_operands(op, index)?;

        if op == Operator::Assign {
            return self.assign(left, right, index);
        }

        let lhs = expect_number(&left, op, "left", index)?;
        let rhs = expect_number(&right, op, "right", index)?;
        let result = op.apply(lhs, rhs)
                       .ok_or(RuntimeError::UnknownOperator { operator: op,
                                                              index })?;
        self.stack.push(result.into());
        Ok(())
    }

    /// Pops the right operand and then the left one.
    fn pop_operands(&mut self, op: Operator, index: usize) -> EvalResult<(RuntimeValue, RuntimeValue)> {
        let right = self.stack.pop();
        let left = self.stack.pop();
        match (left, right) {
            (Some(left), Some(right)) => Ok((left, right)),
            _ => Err(RuntimeError::StackUnderflow { operator: op,
                                                    index }),
        }
    }

    fn assign(&mut self, target: RuntimeValue, value: RuntimeValue, index: usize) -> EvalResult<()> {
        let name = match target {
            RuntimeValue::Target(name) => name,
            RuntimeValue::Number(n) => {
                return Err(RuntimeError::TypeMismatch { details: format!("left operand of '=' must be a variable name, found {n}"),
                                                        index });
            },
        };
        let value = expect_number(&value, Operator::Assign, "right", index)?;

        tracing::trace!(%name, value, "assigning");
        self.store.set(&name, value);
        Ok(())
    }
}

fn expect_number(value: &RuntimeValue, op: Operator, side: &str, index: usize) -> EvalResult<f64> {
    value.as_number().ok_or_else(|| RuntimeError::TypeMismatch { details: format!("{side} operand of '{op}' must be a number, found variable name '{value}'"),
                                                                  index })
}

/// Runs a program against a variable store.
///
/// Instructions are executed left to right on a fresh value stack. The store
/// is updated in place by every completed `=`; if a later instruction fails,
/// those assignments stay in the store.
///
/// # Returns
/// The value stack left behind by the program.
///
/// # Errors
/// Returns the first `RuntimeError` raised: an undefined variable, missing
/// operands, or an operand of the wrong kind.
///
/// ## Example
/// ```
/// use stackcalc::{
///     ast::{Instruction, Operator},
///     interpreter::{
///         executor::execute,
///         value::{core::RuntimeValue, store::VariableStore},
///     },
/// };
///
/// let mut store = VariableStore::new();
/// let program = [Instruction::WriteVariable("a".to_string()),
///                Instruction::PushNumber(4.0),
///                Instruction::Operate(Operator::Assign),
///                Instruction::ReadVariable("a".to_string()),
///                Instruction::Operate(Operator::Sequence)];
///
/// assert_eq!(execute(&program, &mut store).unwrap(), vec![RuntimeValue::Number(4.0)]);
/// assert_eq!(store.get("a"), Some(4.0));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(instructions = program.len()))]
pub fn execute(program: &[Instruction], store: &mut VariableStore) -> EvalResult<Vec<RuntimeValue>> {
    let mut machine = Machine::new(store);
    for (index, instruction) in program.iter().enumerate() {
        machine.step(instruction, index)?;
    }

    tracing::debug!(stack = ?machine.stack, store = %machine.store, "execution finished");
    Ok(machine.stack)
}
