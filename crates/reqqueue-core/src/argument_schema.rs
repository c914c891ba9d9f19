//! Shape description of a structured (JSON) command argument
//!
//! The server sends this to clients so they can offer field names and enum
//! values while the user types. It is a hint only: clients never validate
//! arguments against it, the server stays the sole judge of what parses.

use serde::{Deserialize, Serialize};

/// JSON object shape accepted by structured-argument commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSchema {
    /// Record type name
    pub title: String,
    /// Object properties in declaration order
    pub properties: Vec<SchemaProperty>,
}

/// One property of the argument object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaProperty {
    pub name: String,
    pub kind: PropertyKind,
    pub required: bool,
}

/// Value kind of a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyKind {
    String,
    /// ISO-8601 local date-time, e.g. `2026-10-19T12:00:00`
    DateTime,
    /// One of a fixed set of string values
    Enum { values: Vec<String> },
}

impl ArgumentSchema {
    /// Tokens worth offering while typing a JSON argument
    ///
    /// Object braces, every `"property":` key, and every quoted enum value.
    pub fn completion_tokens(&self) -> Vec<String> {
        let mut tokens = vec!["{".to_string(), "}".to_string()];
        for property in &self.properties {
            tokens.push(format!("\"{}\":", property.name));
        }
        for property in &self.properties {
            if let PropertyKind::Enum { values } = &property.kind {
                tokens.extend(values.iter().map(|v| format!("\"{}\"", v)));
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArgumentSchema {
        ArgumentSchema {
            title: "Ticket".to_string(),
            properties: vec![
                SchemaProperty {
                    name: "owner".to_string(),
                    kind: PropertyKind::String,
                    required: true,
                },
                SchemaProperty {
                    name: "state".to_string(),
                    kind: PropertyKind::Enum {
                        values: vec!["Open".to_string(), "Closed".to_string()],
                    },
                    required: false,
                },
            ],
        }
    }

    #[test]
    fn test_completion_tokens_cover_keys_and_enum_values() {
        let tokens = sample().completion_tokens();
        assert_eq!(
            tokens,
            vec!["{", "}", "\"owner\":", "\"state\":", "\"Open\"", "\"Closed\""]
        );
    }

    #[test]
    fn test_property_kind_is_internally_tagged() {
        let json = serde_json::to_value(&sample().properties[1].kind).unwrap();
        assert_eq!(json["type"], "enum");
        assert_eq!(json["values"][0], "Open");
    }
}
