use std::{
    io::Write,
    process::{Command, Stdio},
};

fn run_repl(input: &str) -> (String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_stackcalc")).stdin(Stdio::piped())
                                                                 .stdout(Stdio::piped())
                                                                 .stderr(Stdio::piped())
                                                                 .env_remove("RUST_LOG")
                                                                 .spawn()
                                                                 .expect("failed to start stackcalc");
    child.stdin
         .take()
         .expect("stdin is piped")
         .write_all(input.as_bytes())
         .expect("failed to write to stdin");

    let output = child.wait_with_output().expect("stackcalc did not finish");
    assert!(output.status.success());
    (String::from_utf8_lossy(&output.stdout).into_owned(),
     String::from_utf8_lossy(&output.stderr).into_owned())
}

#[test]
fn repl_prints_results_on_stdout_and_errors_on_stderr() {
    let (stdout, stderr) = run_repl("x + 1\na = 2; a * 3\n");

    assert!(stdout.contains("[6]"), "stdout was {stdout:?}");
    assert!(!stdout.contains("Undefined"), "stdout was {stdout:?}");
    assert!(stderr.contains("Undefined variable 'x'"), "stderr was {stderr:?}");
}

#[test]
fn repl_keeps_variables_after_an_error() {
    let (stdout, stderr) = run_repl("n = 4\n1 + @\nn * n\n");

    assert!(stdout.contains("[16]"), "stdout was {stdout:?}");
    assert!(stderr.contains("Invalid character '@'"), "stderr was {stderr:?}");
}
