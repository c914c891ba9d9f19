//! Completion grammar built from command descriptors
//!
//! The command set is data, not code: a client learns it from the server at
//! startup. `Grammar` turns that list into one alternative per command
//! (name plus argument tail) and answers completion queries for an
//! interactive front end.

use crate::argument_schema::ArgumentSchema;
use crate::command::{ArgumentKind, CommandDescriptor};

/// What may follow a command name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    Bare,
    /// One or more JSON tokens
    JsonTokens,
    /// Exactly one path token
    PathToken,
}

impl From<ArgumentKind> for Tail {
    fn from(kind: ArgumentKind) -> Self {
        match kind {
            ArgumentKind::None => Tail::Bare,
            ArgumentKind::Structured => Tail::JsonTokens,
            ArgumentKind::FilePath => Tail::PathToken,
        }
    }
}

/// Grammar fragment for the command at `index` in descriptor order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    pub index: usize,
    pub name: String,
    pub tail: Tail,
}

/// Answer to a completion query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Replace the text from byte `start` up to the cursor with one of `items`
    Candidates { start: usize, items: Vec<String> },
    /// A path is expected from byte `start`; resolve against the filesystem
    Path { start: usize },
    Nothing,
}

#[derive(Debug, Clone)]
pub struct Grammar {
    alternatives: Vec<Alternative>,
    json_tokens: Vec<String>,
}

impl Grammar {
    /// Build alternatives from `descriptors`, in their order
    ///
    /// Without a schema, JSON arguments only complete object braces.
    pub fn build(descriptors: &[CommandDescriptor], schema: Option<&ArgumentSchema>) -> Self {
        let alternatives = descriptors
            .iter()
            .enumerate()
            .map(|(index, d)| Alternative {
                index,
                name: d.name.clone(),
                tail: d.argument.into(),
            })
            .collect();

        let json_tokens = match schema {
            Some(schema) => schema.completion_tokens(),
            None => vec!["{".to_string(), "}".to_string()],
        };

        Self {
            alternatives,
            json_tokens,
        }
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Textual form, e.g. `C0 | C1 JSON+ | C13 PATH`
    pub fn pattern(&self) -> String {
        self.alternatives
            .iter()
            .map(|alt| match alt.tail {
                Tail::Bare => format!("C{}", alt.index),
                Tail::JsonTokens => format!("C{} JSON+", alt.index),
                Tail::PathToken => format!("C{} PATH", alt.index),
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// One usage line per command, for help output
    pub fn usage_lines(&self) -> Vec<String> {
        self.alternatives
            .iter()
            .map(|alt| match alt.tail {
                Tail::Bare => alt.name.clone(),
                Tail::JsonTokens => format!("{} {{json}}", alt.name),
                Tail::PathToken => format!("{} <path>", alt.name),
            })
            .collect()
    }

    /// Complete `line` at byte offset `pos`
    pub fn complete(&self, line: &str, pos: usize) -> Completion {
        let text = line.get(..pos.min(line.len())).unwrap_or(line);
        let body = text.trim_start();
        let offset = text.len() - body.len();

        let Some((name, _)) = body.split_once(char::is_whitespace) else {
            let items: Vec<String> = self
                .alternatives
                .iter()
                .filter(|alt| alt.name.starts_with(body))
                .map(|alt| alt.name.clone())
                .collect();
            return candidates(offset, items);
        };

        let Some(alt) = self.alternatives.iter().find(|alt| alt.name == name) else {
            return Completion::Nothing;
        };

        match alt.tail {
            Tail::Bare => Completion::Nothing,
            Tail::PathToken => {
                let after_name = offset + name.len();
                let rest = &text[after_name..];
                let start = after_name + (rest.len() - rest.trim_start().len());
                Completion::Path { start }
            }
            Tail::JsonTokens => {
                let start = text
                    .char_indices()
                    .rev()
                    .find(|&(_, c)| c.is_whitespace() || matches!(c, '{' | ',' | ':'))
                    .map_or(0, |(i, c)| i + c.len_utf8());
                let word = &text[start..];
                let items: Vec<String> = self
                    .json_tokens
                    .iter()
                    .filter(|token| token.starts_with(word))
                    .cloned()
                    .collect();
                candidates(start, items)
            }
        }
    }
}

fn candidates(start: usize, items: Vec<String>) -> Completion {
    if items.is_empty() {
        Completion::Nothing
    } else {
        Completion::Candidates { start, items }
    }
}
