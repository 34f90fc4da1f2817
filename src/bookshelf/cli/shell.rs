//! Interactive shell.
//!
//! Reads one command per line and runs it against the same catalog, so books
//! added, deleted or sorted stay that way until the session ends. Lines are
//! split like a POSIX shell would (`set title "The Hobbit"`) and parsed with
//! the same subcommands the one-shot CLI accepts.

use super::commands::{dispatch, AppContext};
use super::setup::ShellLine;
use bookshelf::error::Result;
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::ops::ControlFlow;

const PROMPT: &str = "bookshelf> ";
const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

pub fn run(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!(
            "Bookshelf: {} books. Type `help` for commands, `quit` to leave.",
            ctx.catalog.count()?
        );
    }
    run_lines(ctx, stdin.lock(), interactive)
}

/// Prompts only when a person is typing; piped scripts get bare output.
pub fn run_lines<R: BufRead>(ctx: &mut AppContext, input: R, interactive: bool) -> Result<()> {
    let mut lines = input.lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        if execute_line(ctx, &line?).is_break() {
            break;
        }
    }
    tracing::debug!("shell session ended");
    Ok(())
}

/// Errors are reported and the session carries on.
fn execute_line(ctx: &mut AppContext, line: &str) -> ControlFlow<()> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return ControlFlow::Continue(());
    }
    if QUIT_WORDS.contains(&line) {
        return ControlFlow::Break(());
    }

    let words = match shell_words::split(line) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ControlFlow::Continue(());
        }
    };

    match ShellLine::try_parse_from(words) {
        Ok(parsed) => {
            if let Err(e) = dispatch(ctx, parsed.command) {
                eprintln!("Error: {}", e);
            }
        }
        Err(e) => {
            let _ = e.print();
        }
    }
    ControlFlow::Continue(())
}
