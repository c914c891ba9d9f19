//! Read-eval-print loop
//!
//! On a terminal, lines come from a `rustyline` editor whose completion is
//! driven by the command grammar. Otherwise stdin is read line by line with
//! no prompt, so sessions can be scripted.

use anyhow::anyhow;
use reqqueue_core::{Completion, Evaluator, Grammar};
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::io::{self, BufRead, IsTerminal, Write};

const PROMPT: &str = "> ";

enum Flow {
    Continue,
    Exit,
}

/// Run a session against `evaluator` until exit or end of input
pub fn run(evaluator: &mut dyn Evaluator, grammar: &Grammar) -> anyhow::Result<()> {
    if io::stdin().is_terminal() {
        interactive(evaluator, grammar)
    } else {
        scripted(evaluator, grammar, io::stdin().lock(), &mut io::stdout().lock())
    }
}

fn interactive(evaluator: &mut dyn Evaluator, grammar: &Grammar) -> anyhow::Result<()> {
    let mut rl: Editor<ReplHelper, DefaultHistory> =
        Editor::new().map_err(|e| anyhow!("failed to init rustyline: {e}"))?;
    rl.set_helper(Some(ReplHelper::new(grammar.clone())));

    println!("Type `help` for commands, `exit` to quit.");
    let mut out = io::stdout();
    loop {
        let line = match rl.readline(PROMPT) {
            Ok(l) => l,
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => continue,
            Err(e) => return Err(anyhow!("readline error: {e}")),
        };

        if !line.trim().is_empty() {
            rl.add_history_entry(line.as_str())
                .map_err(|e| anyhow!("failed to record history: {e}"))?;
        }

        if let Flow::Exit = respond(evaluator, grammar, &line, &mut out)? {
            break;
        }
    }
    Ok(())
}

fn scripted<R: BufRead, W: Write>(
    evaluator: &mut dyn Evaluator,
    grammar: &Grammar,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        if let Flow::Exit = respond(evaluator, grammar, &line?, out)? {
            break;
        }
    }
    Ok(())
}

/// Handle one input line, printing whatever it produces
fn respond<W: Write>(
    evaluator: &mut dyn Evaluator,
    grammar: &Grammar,
    line: &str,
    out: &mut W,
) -> io::Result<Flow> {
    match line.trim() {
        "" => {}
        "exit" | "quit" => return Ok(Flow::Exit),
        "help" => {
            writeln!(out, "Commands:")?;
            for usage in grammar.usage_lines() {
                writeln!(out, "  {}", usage)?;
            }
            writeln!(out, "  help")?;
            writeln!(out, "  exit")?;
        }
        line => writeln!(out, "{}", evaluator.eval(line))?,
    }
    out.flush()?;
    Ok(Flow::Continue)
}

struct ReplHelper {
    grammar: Grammar,
    files: FilenameCompleter,
}

impl ReplHelper {
    fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            files: FilenameCompleter::new(),
        }
    }
}

impl Helper for ReplHelper {}

impl Highlighter for ReplHelper {}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Validator for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        match self.grammar.complete(line, pos) {
            Completion::Candidates { start, items } => Ok((
                start,
                items
                    .into_iter()
                    .map(|item| Pair {
                        display: item.clone(),
                        replacement: item,
                    })
                    .collect(),
            )),
            Completion::Path { .. } => self.files.complete(line, pos, ctx),
            Completion::Nothing => Ok((pos, Vec::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqqueue_core::{ArgumentKind, CommandDescriptor, CommandStatus};

    /// Echoes lines back, failing on "bad"
    struct Echo;

    impl Evaluator for Echo {
        fn descriptors(&self) -> Vec<CommandDescriptor> {
            vec![
                CommandDescriptor::new("ping", ArgumentKind::None),
                CommandDescriptor::new("load", ArgumentKind::FilePath),
            ]
        }

        fn eval(&mut self, line: &str) -> CommandStatus {
            if line == "bad" {
                CommandStatus::Error("nope".to_string())
            } else {
                CommandStatus::Success(format!("ran {}", line))
            }
        }
    }

    fn session(input: &str) -> String {
        let mut echo = Echo;
        let grammar = Grammar::build(&echo.descriptors(), None);
        let mut out = Vec::new();
        scripted(&mut echo, &grammar, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_each_line_prints_its_status() {
        assert_eq!(session("ping\n\n  ping x \nbad\n"), "ran ping\nran ping x\nError: nope\n");
    }

    #[test]
    fn test_exit_stops_reading() {
        assert_eq!(session("ping\nexit\nping\n"), "ran ping\n");
        assert_eq!(session("quit\nping\n"), "");
    }

    #[test]
    fn test_help_lists_usage() {
        let out = session("help\n");
        assert!(out.contains("  ping\n"));
        assert!(out.contains("  load <path>\n"));
        assert!(out.contains("  exit\n"));
    }
}
