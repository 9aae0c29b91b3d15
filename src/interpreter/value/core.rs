use std::fmt;

/// Represents a value on the executor's stack.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeValue {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// The name of a variable pushed by `WriteVariable`. It waits on the
    /// stack until an `=` consumes it as its left operand.
    Target(String),
}

impl From<f64> for RuntimeValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl RuntimeValue {
    /// Returns the number held by the value, if any.
    ///
    /// ## Example
    /// ```
    /// use stackcalc::interpreter::value::core::RuntimeValue;
    ///
    /// assert_eq!(RuntimeValue::Number(2.5).as_number(), Some(2.5));
    /// assert_eq!(RuntimeValue::Target("x".to_string()).as_number(), None);
    /// ```
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Target(_) => None,
        }
    }
}

impl fmt::Display for RuntimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Target(name) => write!(f, "{name}"),
        }
    }
}

/// Formats a value stack as a bracketed, comma-separated list.
///
/// ## Example
/// ```
/// use stackcalc::interpreter::value::core::{RuntimeValue, render_stack};
///
/// assert_eq!(render_stack(&[RuntimeValue::Number(3.0), RuntimeValue::Number(0.5)]),
///            "[3, 0.5]");
/// assert_eq!(render_stack(&[]), "[]");
/// ```
#[must_use]
pub fn render_stack(values: &[RuntimeValue]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
