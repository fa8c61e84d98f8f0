//! Extraction of the task payload from a raw model response.
//! Responses may wrap the JSON in a tagged or generic code fence, or be a
//! bare object/array.

use serde_json::Value;

use crate::planner::types::RawTask;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a task array, got {0}")]
    UnexpectedShape(String),
}

/// Pull the task records out of a raw response.
///
/// Fence policy, in order: content of the first ```json fence, content of the
/// first generic ``` fence, else the whole text. The recovered payload must be
/// either an array of task objects or an object whose "tasks" key holds one.
pub fn extract_tasks(raw: &str) -> Result<Vec<RawTask>, ParseError> {
    let payload = extract_json_payload(raw);
    let value: Value = serde_json::from_str(payload.trim())?;

    let items = match value {
        Value::Object(mut map) => match map.remove("tasks") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(ParseError::UnexpectedShape(format!(
                    "object whose \"tasks\" key is {}",
                    type_name(&other)
                )));
            }
            None => {
                return Err(ParseError::UnexpectedShape(
                    "object without a \"tasks\" key".to_string(),
                ));
            }
        },
        Value::Array(items) => items,
        other => return Err(ParseError::UnexpectedShape(type_name(&other).to_string())),
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ParseError::from))
        .collect()
}

/// Slice out the fenced portion of a response, if any. An unclosed fence runs
/// to the end of the input.
fn extract_json_payload(raw: &str) -> &str {
    if let Some(start) = raw.find("```json") {
        let body = &raw[start + "```json".len()..];
        return match body.find("```") {
            Some(end) => &body[..end],
            None => body,
        };
    }
    if let Some(start) = raw.find("```") {
        let body = &raw[start + 3..];
        return match body.find("```") {
            Some(end) => &body[..end],
            None => body,
        };
    }
    raw
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
