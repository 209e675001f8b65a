use crate::error::{ClassifierError, Result};
use serde_json::Value;

/// Payload field holding the token sequence
pub const DATA_FIELD: &str = "data";

/// One input element after ingestion.
///
/// The boundary accepts any JSON value; only strings take part in
/// classification, everything else is carried as `Ignored` so positions
/// stay meaningful for callers that care about them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(String),
    Ignored,
}

impl Token {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Token::Text(s.clone()),
            _ => Token::Ignored,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text(s) => Some(s.as_str()),
            Token::Ignored => None,
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Text(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::Text(s)
    }
}

/// Convert a JSON array into tokens, rejecting anything that is not an array
pub fn tokens_from_value(value: &Value) -> Result<Vec<Token>> {
    match value {
        Value::Array(items) => Ok(items.iter().map(Token::from_json).collect()),
        _ => Err(ClassifierError::not_a_sequence(DATA_FIELD)),
    }
}

/// Extract and ingest the `data` field of a request body
pub fn tokens_from_payload(payload: &Value) -> Result<Vec<Token>> {
    let object = payload.as_object().ok_or(ClassifierError::NotAnObject)?;

    match object.get(DATA_FIELD) {
        Some(data) => tokens_from_value(data),
        None => Err(ClassifierError::not_a_sequence(DATA_FIELD)),
    }
}
