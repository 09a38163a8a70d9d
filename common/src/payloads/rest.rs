use crate::NewMessage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields are kept as raw JSON so that any falsy value (`null`, `false`,
/// `0`, `""`, `[]`, `{}`) reads as missing instead of failing to parse.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
}

impl CreateMessage {
    /// Returns `None` when `body` or `username` is missing or falsy.
    pub fn into_new_message(self) -> Option<NewMessage> {
        let body = self.body.and_then(into_text)?;
        let username = self.username.and_then(into_text)?;

        Some(NewMessage::new(body, username))
    }
}

/// Strings are taken as they are, numbers and `true` as their JSON text.
/// Falsy values and non-empty arrays or objects have no text form.
fn into_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    }
}

/// Only `body` can change after creation; any other field sent is ignored.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self {
            message: "Message deleted".to_string(),
        }
    }
}

impl Default for DeleteConfirmation {
    fn default() -> Self {
        Self::new()
    }
}
