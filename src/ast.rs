use std::fmt;

/// The binary operators of the language.
///
/// Every operator is infix and takes exactly two operands. `;` sequences two
/// statements and `=` assigns its right operand to the name on its left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `=`
    Assign,
    /// `;`
    Sequence,
}

impl Operator {
    /// Returns the source symbol of the operator.
    ///
    /// ## Example
    /// ```
    /// use stackcalc::ast::Operator;
    ///
    /// assert_eq!(Operator::Assign.symbol(), '=');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Assign => '=',
            Self::Sequence => ';',
        }
    }

    /// Applies an arithmetic operator to two numbers.
    ///
    /// Follows IEEE 754 double semantics, so division by zero yields an
    /// infinity or `NaN` instead of an error.
    ///
    /// # Returns
    /// - `Some(f64)`: The result for `+`, `-`, `*` and `/`.
    /// - `None`: For operators without an arithmetic meaning.
    ///
    /// ## Example
    /// ```
    /// use stackcalc::ast::Operator;
    ///
    /// assert_eq!(Operator::Mul.apply(2.0, 3.0), Some(6.0));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), Some(f64::INFINITY));
    /// assert_eq!(Operator::Sequence.apply(1.0, 2.0), None);
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> Option<f64> {
        match self {
            Self::Add => Some(left + right),
            Self::Sub => Some(left - right),
            Self::Mul => Some(left * right),
            Self::Div => Some(left / right),
            Self::Assign | Self::Sequence => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An abstract syntax tree node.
///
/// The language is strictly binary infix, so an expression is either a leaf
/// (a number or a name) or an operator applied to exactly two
/// sub-expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A variable name. Whether it is read or written depends on its position
    /// in the tree.
    Name(String),
    /// A binary operation.
    Binary {
        /// The operator.
        op:    Operator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary node from two operands.
    ///
    /// ## Example
    /// ```
    /// use stackcalc::ast::{Expr, Operator};
    ///
    /// let sum = Expr::binary(Operator::Add, Expr::Number(1.0), Expr::Number(2.0));
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(op: Operator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }
}

/// Renders the tree fully parenthesized, so the grouping chosen by the parser
/// is visible.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Name(name) => write!(f, "{name}"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// A single stack machine instruction.
///
/// A program is the post-order sequence of instructions for one expression
/// tree: operands are always pushed before the operator that consumes them.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Push a numeric literal.
    PushNumber(f64),
    /// Push the current value of a variable.
    ReadVariable(String),
    /// Push the variable name itself as the target of a later `=`.
    WriteVariable(String),
    /// Pop the operands of a binary operator and apply it.
    Operate(Operator),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PushNumber(value) => write!(f, "push {value}"),
            Self::ReadVariable(name) => write!(f, "read {name}"),
            Self::WriteVariable(name) => write!(f, "write {name}"),
            Self::Operate(op) => write!(f, "op {op}"),
        }
    }
}
