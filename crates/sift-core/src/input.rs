//! Decoding payload and event documents from text.
//!
//! Payload text that is not valid JSON is still a payload: it becomes a
//! [`RawPayload::Text`] and goes down the fallback path. Event logs are
//! stricter, since a malformed log cannot be displayed meaningfully.

use crate::payload::RawPayload;
use crate::types::{EventContent, StreamEvent};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while decoding an event log.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid event on line {line}: {source}")]
    EventLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("event {index} is not usable: {reason}")]
    EventShape { index: usize, reason: String },
}

/// Decode a payload. JSON documents keep their shape; anything else is
/// taken as raw text (minus a trailing newline).
pub fn parse_payload(text: &str) -> RawPayload {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => value.into(),
        Err(_) => RawPayload::Text(text.trim_end_matches(['\n', '\r']).to_string()),
    }
}

/// Decode an event log given either as a JSON array or as JSON lines.
/// Blank input is an empty log.
pub fn parse_events(text: &str) -> Result<Vec<StreamEvent>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        let values: Vec<Value> = serde_json::from_str(trimmed)?;
        return values
            .into_iter()
            .enumerate()
            .map(|(index, value)| event_from_value(index, value))
            .collect();
    }

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .enumerate()
        .map(|(index, (n, line))| {
            let value = serde_json::from_str(line)
                .map_err(|source| InputError::EventLine { line: n + 1, source })?;
            event_from_value(index, value)
        })
        .collect()
}

fn event_from_value(index: usize, value: Value) -> Result<StreamEvent, InputError> {
    let Value::Object(mut map) = value else {
        return Err(InputError::EventShape {
            index,
            reason: "expected an object with `step` and `content`".to_string(),
        });
    };
    let step = match map.remove("step") {
        Some(Value::String(s)) => s,
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    };
    let content = map
        .remove("content")
        .map(|v| EventContent::from(RawPayload::from(v)))
        .unwrap_or_else(|| EventContent::Text(String::new()));
    Ok(StreamEvent { step, content })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
