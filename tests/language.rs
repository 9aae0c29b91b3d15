use std::fs;

use stackcalc::{
    error::{Error, ParseError, RuntimeError},
    interpret,
    interpreter::{
        session::Session,
        value::core::{RuntimeValue, render_stack},
    },
};
use walkdir::WalkDir;

#[test]
fn session_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        run_script(&content).unwrap_or_else(|e| panic!("Script {path:?} failed:\n{e}"));
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

/// Runs a script in one session. A line of the form `# expect <stack>`
/// checks the rendered stack of the statement line before it.
fn run_script(content: &str) -> Result<(), String> {
    let mut session = Session::new();
    let mut last = None;

    for line in content.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(expected) = line.strip_prefix("# expect ") {
            let actual = last.take().ok_or_else(|| format!("'{line}' has no statement to check"))?;
            if actual != expected {
                return Err(format!("expected {expected}, found {actual}"));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }
        let stack = session.eval_line(line).map_err(|e| format!("{line}: {e}"))?;
        last = Some(render_stack(&stack));
    }

    Ok(())
}

fn numbers(values: &[f64]) -> Vec<RuntimeValue> {
    values.iter().copied().map(RuntimeValue::Number).collect()
}

fn assert_stack(src: &str, expected: &[f64]) {
    match interpret(src) {
        Ok(stack) => assert_eq!(stack, numbers(expected), "for input {src:?}"),
        Err(e) => panic!("Line {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match interpret(src) {
        Ok(stack) => panic!("Line {src:?} succeeded with {stack:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_stack("1 + 2", &[3.0]);
    assert_stack("2 * 3", &[6.0]);
    assert_stack("5 - 3", &[2.0]);
    assert_stack("8 / 4", &[2.0]);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_stack("1 + 2 * 3", &[7.0]);
    assert_stack("2 * 3 + 1", &[7.0]);
    assert_stack("10 - 6 / 2", &[7.0]);
}

#[test]
fn parentheses_group_subexpressions() {
    assert_stack("(1 + 2) * 3", &[9.0]);
    assert_stack("(((1 + 2))) * 3", &[9.0]);
    assert_stack("2 * (3 + (4 - 1))", &[12.0]);
    assert_stack("(7)", &[7.0]);
}

#[test]
fn equal_precedence_chains_split_at_first_operator() {
    assert_stack("8 - 4 - 2", &[6.0]);
    assert_stack("(8 - 4) - 2", &[2.0]);
    assert_stack("8 / 4 / 2", &[4.0]);
    assert_stack("1 + 2 + 3 + 4", &[10.0]);
}

#[test]
fn whitespace_is_optional_and_flexible() {
    assert_stack("1+2*3", &[7.0]);
    assert_stack("  1 \t+\t2  ", &[3.0]);
}

#[test]
fn division_follows_ieee_754() {
    assert_stack("1 / 0", &[f64::INFINITY]);
    let stack = interpret("0 / 0").unwrap();
    assert!(matches!(stack.as_slice(), [RuntimeValue::Number(n)] if n.is_nan()));
}

#[test]
fn assignment_and_sequencing() {
    let mut session = Session::new();
    let stack = session.eval_line("a = 3; b = a + 2; b").unwrap();

    assert_eq!(stack, numbers(&[5.0]));
    assert_eq!(session.store().get("a"), Some(3.0));
    assert_eq!(session.store().get("b"), Some(5.0));
}

#[test]
fn assignment_leaves_nothing_on_the_stack() {
    assert_stack("a = 3", &[]);
    assert_stack("a = 1 + 2 * 3; a", &[7.0]);
}

#[test]
fn statements_keep_their_results() {
    assert_stack("1; 2", &[1.0, 2.0]);
    assert_stack("1 + 1; x = 4; x * x", &[2.0, 16.0]);
}

#[test]
fn names_may_contain_digits_and_underscores() {
    assert_stack("_x1 = 2; _x1 * _x1", &[4.0]);
    assert_stack("Total_2 = 10; Total_2 / 4", &[2.5]);
}

#[test]
fn variables_persist_across_lines() {
    let mut session = Session::new();
    session.eval_line("rate = 4").unwrap();
    session.eval_line("hours = 10").unwrap();

    assert_eq!(session.eval_line("rate * hours").unwrap(), numbers(&[40.0]));

    session.eval_line("rate = rate + 1").unwrap();
    assert_eq!(session.store().get("rate"), Some(5.0));
    assert_eq!(session.store().len(), 2);
}

#[test]
fn undefined_variable_is_error() {
    let err = assert_failure("x + 1");
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::UndefinedVariable { ref name, index: 0 }) if name == "x"));
    assert_eq!(err.to_string(), "Error at instruction 0: Undefined variable 'x'.");
}

#[test]
fn unmatched_parenthesis_is_error() {
    assert!(matches!(assert_failure("(1 + 2"),
                     Error::Parse(ParseError::UnmatchedParenthesis { column: 0 })));
    assert!(matches!(assert_failure("1 + 2)"),
                     Error::Parse(ParseError::UnmatchedParenthesis { column: 5 })));
    assert!(matches!(assert_failure("((1)"),
                     Error::Parse(ParseError::UnmatchedParenthesis { column: 0 })));
}

#[test]
fn invalid_character_is_error() {
    let err = assert_failure("1 + @");
    assert!(matches!(err,
                     Error::Parse(ParseError::InvalidCharacter { character: '@', column: 4 })));
    assert_eq!(err.to_string(), "Error at column 4: Invalid character '@'.");

    assert!(matches!(assert_failure("1.5"),
                     Error::Parse(ParseError::InvalidCharacter { character: '.', column: 1 })));
}

#[test]
fn malformed_expressions_are_errors() {
    assert!(matches!(assert_failure(""),
                     Error::Parse(ParseError::MalformedExpression { column: 0, .. })));
    assert!(matches!(assert_failure("1 2"),
                     Error::Parse(ParseError::MalformedExpression { column: 2, .. })));
    assert!(matches!(assert_failure("1 +"),
                     Error::Parse(ParseError::MalformedExpression { column: 2, .. })));
    assert!(matches!(assert_failure("()"),
                     Error::Parse(ParseError::MalformedExpression { column: 0, .. })));
    assert!(matches!(assert_failure("a = 3;"),
                     Error::Parse(ParseError::MalformedExpression { column: 5, .. })));
}

#[test]
fn assigning_to_a_number_is_error() {
    assert!(matches!(assert_failure("3 = 4"),
                     Error::Runtime(RuntimeError::TypeMismatch { index: 2, .. })));

    let mut session = Session::new();
    session.eval_line("a = 1; b = 2").unwrap();
    assert!(matches!(session.eval_line("a + b = 3"),
                     Err(Error::Runtime(RuntimeError::TypeMismatch { .. }))));
}

#[test]
fn nested_assignment_is_error() {
    let mut session = Session::new();
    let err = session.eval_line("a = (b = 5)").unwrap_err();

    assert!(matches!(err,
                     Error::Runtime(RuntimeError::StackUnderflow { index: 4, .. })));
    assert_eq!(session.store().get("b"), Some(5.0));
    assert!(!session.store().contains("a"));
}

#[test]
fn failed_line_keeps_earlier_assignments() {
    let mut session = Session::new();
    let err = session.eval_line("x = 1; y + 1").unwrap_err();

    assert!(matches!(err,
                     Error::Runtime(RuntimeError::UndefinedVariable { index: 3, .. })));
    assert_eq!(session.store().get("x"), Some(1.0));
}

#[test]
fn long_chains_are_rejected_instead_of_overflowing() {
    let chain = vec!["1"; 10_000].join(" + ");
    assert!(matches!(assert_failure(&chain),
                     Error::Parse(ParseError::MalformedExpression { ref details, .. })
                         if details == "expression nested too deeply"));

    let nested = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(assert_failure(&nested), Error::Parse(_)));
}

#[test]
fn moderately_long_chains_still_evaluate() {
    let chain = vec!["1"; 100].join(" + ");
    assert_stack(&chain, &[100.0]);

    let nested = format!("{}7{}", "(".repeat(100), ")".repeat(100));
    assert_stack(&nested, &[7.0]);
}

#[test]
fn session_survives_a_line_that_is_too_deep() {
    let mut session = Session::new();
    session.eval_line("kept = 5").unwrap();

    let chain = vec!["kept"; 10_000].join(" * ");
    assert!(session.eval_line(&chain).is_err());
    assert_eq!(session.eval_line("kept + 1").unwrap(), numbers(&[6.0]));
}
