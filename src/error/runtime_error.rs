use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while executing a program.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Error at instruction {index}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:  String,
        /// The index of the failing instruction.
        index: usize,
    },
    /// An operator needed more operands than the stack holds.
    #[error("Error at instruction {index}: Not enough operands for '{operator}'.")]
    StackUnderflow {
        /// The operator that was being applied.
        operator: Operator,
        /// The index of the failing instruction.
        index:    usize,
    },
    /// An operand had the wrong kind for its operator.
    #[error("Error at instruction {index}: Type mismatch: {details}.")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The index of the failing instruction.
        index:   usize,
    },
    /// An operator has no runtime meaning.
    #[error("Error at instruction {index}: Unknown operator '{operator}'.")]
    UnknownOperator {
        /// The operator.
        operator: Operator,
        /// The index of the failing instruction.
        index:    usize,
    },
}
