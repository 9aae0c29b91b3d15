use crate::ast::{Expr, Instruction, Operator};

/// Where a sub-expression sits relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// The left operand of `=`.
    AssignTarget,
    /// Anywhere else.
    Operand,
}

/// Flattens an expression tree into a stack machine program.
///
/// The tree is traversed in post-order: left operand, right operand, then
/// the operator. A name is compiled to `WriteVariable` when it is the left
/// operand of `=` and to `ReadVariable` everywhere else.
///
/// ## Example
/// ```
/// use stackcalc::{
///     ast::{Instruction, Operator},
///     interpreter::linearizer::linearize,
///     parse_line,
/// };
///
/// let program = linearize(&parse_line("a = a + 1").unwrap());
/// assert_eq!(program,
///            vec![Instruction::WriteVariable("a".to_string()),
///                 Instruction::ReadVariable("a".to_string()),
///                 Instruction::PushNumber(1.0),
///                 Instruction::Operate(Operator::Add),
///                 Instruction::Operate(Operator::Assign)]);
/// ```
#[must_use]
pub fn linearize(expr: &Expr) -> Vec<Instruction> {
    let mut program = Vec::new();
    emit(expr, Position::Operand, &mut program);
    tracing::debug!(instructions = program.len(), "linearized expression");
    program
}

fn emit(expr: &Expr, position: Position, program: &mut Vec<Instruction>) {
    match expr {
        Expr::Number(value) => program.push(Instruction::PushNumber(*value)),
        Expr::Name(name) => match position {
            Position::AssignTarget => program.push(Instruction::WriteVariable(name.clone())),
            Position::Operand => program.push(Instruction::ReadVariable(name.clone())),
        },
        Expr::Binary { op, left, right } => {
            let left_position = if *op == Operator::Assign {
                Position::AssignTarget
            } else {
                Position::Operand
            };
            emit(left, left_position, program);
            emit(right, Position::Operand, program);
            program.push(Instruction::Operate(*op));
        },
    }
}
