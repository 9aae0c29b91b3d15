/// Runtime stack values.
///
/// Defines the `RuntimeValue` type held on the executor's value stack: either
/// a number or the name of a variable waiting to be assigned.
pub mod core;
/// Persistent variable storage.
///
/// Defines the `VariableStore` that maps names to numbers across every line
/// evaluated in a session. It is only mutated by a completed assignment.
pub mod store;
