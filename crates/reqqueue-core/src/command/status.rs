use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of executing one command
///
/// Equality compares the variant and the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum CommandStatus {
    /// The command changed the queue or the backing file
    Success(String),
    /// The command ran but had nothing to do, or only reports
    Neutral(String),
    /// The command could not run
    Error(String),
}

impl CommandStatus {
    pub fn message(&self) -> &str {
        match self {
            CommandStatus::Success(m) | CommandStatus::Neutral(m) | CommandStatus::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CommandStatus::Error(_))
    }

    /// Short outcome name for logs
    pub fn outcome(&self) -> &'static str {
        match self {
            CommandStatus::Success(_) => "success",
            CommandStatus::Neutral(_) => "neutral",
            CommandStatus::Error(_) => "error",
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandStatus::Error(m) => write!(f, "Error: {}", m),
            CommandStatus::Success(m) | CommandStatus::Neutral(m) => f.write_str(m),
        }
    }
}
