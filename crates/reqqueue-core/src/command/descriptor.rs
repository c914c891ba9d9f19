use serde::{Deserialize, Serialize};

/// Shape of the argument text that follows a command name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgumentKind {
    /// Nothing follows the name
    #[serde(rename = "none")]
    None,
    /// A JSON object describing a record
    #[serde(rename = "json")]
    Structured,
    /// A single file path, taken verbatim after trimming
    #[serde(rename = "file_path")]
    FilePath,
}

impl ArgumentKind {
    /// Wire tag
    pub fn tag(&self) -> &'static str {
        match self {
            ArgumentKind::None => "none",
            ArgumentKind::Structured => "json",
            ArgumentKind::FilePath => "file_path",
        }
    }

    /// Parse a wire tag; unrecognized tags mean no argument.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "json" => ArgumentKind::Structured,
            "file_path" => ArgumentKind::FilePath,
            _ => ArgumentKind::None,
        }
    }
}

/// Name and argument kind of a command, wherever it executes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    pub name: String,
    pub argument: ArgumentKind,
}

impl CommandDescriptor {
    pub fn new(name: impl Into<String>, argument: ArgumentKind) -> Self {
        Self {
            name: name.into(),
            argument,
        }
    }
}
