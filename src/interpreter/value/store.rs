use std::{collections::BTreeMap, fmt};

/// Maps variable names to their numeric values.
///
/// A store lives for a whole session so that later lines can read what
/// earlier lines assigned. Entries are created or overwritten by `=` and are
/// never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableStore {
    variables: BTreeMap<String, f64>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value of a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Assigns a value to a variable and returns the previous value.
    ///
    /// ## Example
    /// ```
    /// use stackcalc::interpreter::value::store::VariableStore;
    ///
    /// let mut store = VariableStore::new();
    /// assert_eq!(store.set("a", 1.0), None);
    /// assert_eq!(store.set("a", 2.0), Some(1.0));
    /// assert_eq!(store.get("a"), Some(2.0));
    /// ```
    pub fn set(&mut self, name: &str, value: f64) -> Option<f64> {
        self.variables.insert(name.to_string(), value)
    }

    /// Returns `true` if the variable has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Returns the number of assigned variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over the variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// Lists the variables as `name = value` pairs in name order.
impl fmt::Display for VariableStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}
