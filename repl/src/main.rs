//! FILENAME: repl/src/main.rs
//! PURPOSE: Interactive read-eval-print loop over the expression engine.
//! CONTEXT: Reads one expression per line, evaluates it against the builtin
//! table, and prints either the value or a message for the error kind.
//! Terminates on an empty line or end of input.

use engine::{builtins, Error, Evaluator};
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    let mut evaluator = Evaluator::new();
    builtins::install(&mut evaluator);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let expression = line.trim();
        if expression.is_empty() {
            break;
        }

        match evaluator.evaluate(expression) {
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(Error::Parse(error)) => writeln!(stdout, "parse error: {error}")?,
            Err(Error::Eval(error)) => writeln!(stdout, "evaluation error: {error}")?,
        }
    }

    Ok(())
}
