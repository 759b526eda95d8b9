//! Answer payloads and extraction
//!
//! The answer service replies with either a bare JSON string or an object.
//! Objects are probed for the primary field pair (`resposta` + `fontes`)
//! first, then the secondary pair (`answer` + `sources`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shown when a successful response carries no recognizable answer field
pub const UNRECOGNIZED_FORMAT: &str = "Answer received, but its format was not recognized.";

/// (answer field, sources field) pairs in probe order
const FIELD_ALIASES: [(&str, &str); 2] = [("resposta", "fontes"), ("answer", "sources")];

/// Parsed body of a successful answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerPayload {
    /// Bare string: the whole body is the answer
    Text(String),
    /// Anything else; only objects carry a usable answer
    Structured(Value),
}

/// Answer text plus ordered source labels
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<String>,
}

impl AnswerPayload {
    /// Build a structured payload using the primary field names
    pub fn structured(text: impl Into<String>, sources: &[&str]) -> Self {
        let mut object = Map::new();
        object.insert("resposta".to_string(), Value::String(text.into()));
        object.insert(
            "fontes".to_string(),
            Value::Array(
                sources
                    .iter()
                    .map(|s| Value::String((*s).to_string()))
                    .collect(),
            ),
        );
        Self::Structured(Value::Object(object))
    }

    /// Extract the answer text and sources, consuming the payload
    pub fn into_answer(self) -> Answer {
        let object = match self {
            AnswerPayload::Text(text) => {
                return Answer {
                    text,
                    sources: Vec::new(),
                }
            }
            AnswerPayload::Structured(Value::Object(object)) => object,
            AnswerPayload::Structured(other) => {
                tracing::debug!("Unrecognized answer payload shape: {}", other);
                return Answer {
                    text: UNRECOGNIZED_FORMAT.to_string(),
                    sources: Vec::new(),
                };
            }
        };

        for (text_key, sources_key) in FIELD_ALIASES {
            // Empty strings count as absent, same as a missing field
            if let Some(Value::String(text)) = object.get(text_key) {
                if !text.is_empty() {
                    return Answer {
                        text: text.clone(),
                        sources: source_labels(object.get(sources_key)),
                    };
                }
            }
        }

        Answer {
            text: UNRECOGNIZED_FORMAT.to_string(),
            sources: Vec::new(),
        }
    }
}

/// Source list: arrays only, nulls dropped, non-strings as their JSON text
fn source_labels(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|v| !v.is_null())
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}
