//! Line dispatcher
//!
//! `CommandRunner` owns the live queue and a command set. `eval` splits one
//! input line into a command name and the raw remainder, runs the matching
//! command and turns any failure into an `Error` status, so the caller's
//! input loop never has to handle errors itself.

use crate::command::{CommandDescriptor, CommandList, CommandStatus, QueueCommand};
use crate::errors::{ExError, ReqQueueError};
use crate::queue::{Prioritized, PriorityQueue};
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

/// Something that can evaluate input lines, locally or remotely
pub trait Evaluator {
    /// Available commands in help/completion order
    fn descriptors(&self) -> Vec<CommandDescriptor>;

    /// Execute one input line
    fn eval(&mut self, line: &str) -> CommandStatus;
}

/// Split a line into a command name and the raw argument text
///
/// The argument keeps its inner whitespace; only the separator and
/// surrounding blanks are dropped.
pub fn split_line(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (line, ""),
    }
}

/// Dispatches input lines to a local command set
pub struct CommandRunner<T> {
    commands: Vec<Box<dyn QueueCommand<T>>>,
    queue: PriorityQueue<T>,
}

impl<T: Prioritized> CommandRunner<T> {
    pub fn new(commands: impl CommandList<T>, queue: PriorityQueue<T>) -> Self {
        Self {
            commands: commands.into_commands(),
            queue,
        }
    }

    pub fn queue(&self) -> &PriorityQueue<T> {
        &self.queue
    }

    /// Run the command `name` with raw argument text `args`
    pub fn execute(&mut self, name: &str, args: &str) -> CommandStatus {
        log_op_start!("dispatch", command = name);
        let start = Instant::now();

        let Some(command) = self.commands.iter().find(|c| c.name() == name) else {
            let err = ReqQueueError::UnknownCommand {
                name: name.to_string(),
            };
            let message = err.to_string();
            log_op_error!(
                "dispatch",
                err,
                duration_ms = start.elapsed().as_millis() as u64,
                command = name
            );
            return CommandStatus::Error(message);
        };

        match command.run(args, &mut self.queue) {
            Ok(status) => {
                log_op_end!(
                    "dispatch",
                    duration_ms = start.elapsed().as_millis() as u64,
                    command = name,
                    outcome = status.outcome(),
                    queue_len = self.queue.len() as u64
                );
                status
            }
            Err(err) => {
                log_op_error!(
                    "dispatch",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    command = name
                );
                CommandStatus::Error(status_message(&err))
            }
        }
    }
}

impl<T: Prioritized> Evaluator for CommandRunner<T> {
    fn descriptors(&self) -> Vec<CommandDescriptor> {
        self.commands.iter().map(|c| c.descriptor()).collect()
    }

    fn eval(&mut self, line: &str) -> CommandStatus {
        let (name, args) = split_line(line);
        self.execute(name, args)
    }
}

/// Operator-facing text for a failed command.
fn status_message(err: &ExError) -> String {
    match err.path() {
        Some(path) if !err.message().contains(path) => format!("{} ({})", err.message(), path),
        _ => err.message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ArgumentKind;
    use crate::errors::Result;
    use std::cmp::Ordering;

    #[derive(Debug, Clone, PartialEq)]
    struct Num(i32);

    impl Prioritized for Num {
        fn priority_cmp(&self, other: &Self) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    struct Push;

    impl QueueCommand<Num> for Push {
        fn name(&self) -> &str {
            "push"
        }

        fn argument(&self) -> ArgumentKind {
            ArgumentKind::Structured
        }

        fn run(&self, args: &str, queue: &mut PriorityQueue<Num>) -> Result<CommandStatus> {
            let n: i32 = crate::command::parse_json_argument(args)?;
            queue.push(Num(n));
            Ok(CommandStatus::Success(format!("pushed {}", n)))
        }
    }

    struct Echo;

    impl QueueCommand<Num> for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn argument(&self) -> ArgumentKind {
            ArgumentKind::FilePath
        }

        fn run(&self, args: &str, _queue: &mut PriorityQueue<Num>) -> Result<CommandStatus> {
            Ok(CommandStatus::Neutral(format!("[{}]", args)))
        }
    }

    fn runner() -> CommandRunner<Num> {
        let commands: Vec<Box<dyn QueueCommand<Num>>> = vec![Box::new(Push), Box::new(Echo)];
        CommandRunner::new(commands, PriorityQueue::new())
    }

    #[test]
    fn test_split_line() {
        assert_eq!(split_line("add {\"a\": 1}"), ("add", "{\"a\": 1}"));
        assert_eq!(split_line("  info  "), ("info", ""));
        assert_eq!(split_line("import   some dir/f.json "), ("import", "some dir/f.json"));
        assert_eq!(split_line(""), ("", ""));
    }

    #[test]
    fn test_unknown_command_is_error_and_queue_unchanged() {
        let mut runner = runner();
        runner.eval("push 1");

        let status = runner.eval("foo bar");

        assert_eq!(
            status,
            CommandStatus::Error("unknown command \"foo\"".to_string())
        );
        assert_eq!(runner.queue().len(), 1);
    }

    #[test]
    fn test_parse_failure_becomes_error_status() {
        let mut runner = runner();

        let status = runner.eval("push not-a-number");

        assert!(status.is_error());
        assert!(status.message().starts_with("Invalid argument"));
        assert!(runner.queue().is_empty());
    }

    #[test]
    fn test_status_propagates_unchanged() {
        let mut runner = runner();
        assert_eq!(
            runner.eval("push 7"),
            CommandStatus::Success("pushed 7".to_string())
        );
        assert_eq!(
            runner.eval("echo  a b "),
            CommandStatus::Neutral("[a b]".to_string())
        );
    }

    #[test]
    fn test_descriptors_keep_registration_order() {
        let names: Vec<String> = runner().descriptors().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["push", "echo"]);
    }
}
