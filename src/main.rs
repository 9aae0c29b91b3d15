use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use stackcalc::{
    init_tracing,
    interpreter::{session::Session, value::core::render_stack},
};

/// stackcalc evaluates infix arithmetic with variables on a small stack
/// machine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stackcalc to read `contents` as a path to a script, one statement
    /// line per line.
    #[arg(short, long)]
    file: bool,

    /// Logs the tokens, tree, program and final store of every line.
    #[arg(short, long)]
    verbose: bool,

    /// A line to evaluate. Starts an interactive session when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut session = Session::new();

    match args.contents {
        None => {
            if let Err(e) = run_repl(&mut session) {
                eprintln!("Failed to read from stdin: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        },
        Some(path) if args.file => {
            let Ok(script) = fs::read_to_string(&path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            };
            run_script(&mut session, &script)
        },
        Some(line) => run_script(&mut session, &line),
    }
}

/// Evaluates every non-blank line, stopping at the first error.
fn run_script(session: &mut Session, script: &str) -> ExitCode {
    for line in script.lines().filter(|line| !line.trim().is_empty()) {
        match session.eval_line(line) {
            Ok(stack) => println!("{}", render_stack(&stack)),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }
    ExitCode::SUCCESS
}

/// Reads lines from stdin until it closes, reporting errors on stderr without
/// leaving the session.
fn run_repl(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match session.eval_line(&line) {
                Ok(stack) => writeln!(stdout, "{}", render_stack(&stack))?,
                Err(e) => eprintln!("{e}"),
            }
        }

        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    writeln!(stdout)
}
