//! Flattener: reduces any payload to one whitespace-joined string of its
//! leaf values.
//!
//! Keys of records are discarded, list and record children are joined with a
//! single space in iteration order, and falsy values contribute the empty
//! string. Containers at or below the depth cap are emitted as compact JSON
//! instead of being descended into.

use crate::payload::RawPayload;

/// Descent cap used when no configuration is supplied.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Flatten with the default depth cap.
pub fn flatten(value: &RawPayload) -> String {
    flatten_with_depth(value, DEFAULT_MAX_DEPTH)
}

/// Flatten, descending at most `max_depth` container levels.
pub fn flatten_with_depth(value: &RawPayload, max_depth: usize) -> String {
    let mut capped = false;
    let out = flatten_at(value, 0, max_depth, &mut capped);
    if capped {
        tracing::warn!(max_depth, "payload nesting exceeds depth cap; deeper values kept as JSON text");
    }
    out
}

fn flatten_at(value: &RawPayload, depth: usize, max_depth: usize, capped: &mut bool) -> String {
    if value.is_falsy() {
        return String::new();
    }
    match value {
        RawPayload::Null => String::new(),
        RawPayload::Text(t) => t.clone(),
        RawPayload::Scalar(s) => s.to_string(),
        RawPayload::List(_) | RawPayload::Record(_) if depth >= max_depth => {
            *capped = true;
            value.to_json_string()
        }
        RawPayload::List(items) => items
            .iter()
            .map(|item| flatten_at(item, depth + 1, max_depth, capped))
            .collect::<Vec<_>>()
            .join(" "),
        RawPayload::Record(record) => record
            .values()
            .map(|v| flatten_at(v, depth + 1, max_depth, capped))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Truncate `text` to at most `max_bytes`, backing off to a char boundary.
///
/// Returns `true` if anything was cut.
pub fn clamp(text: &mut String, max_bytes: usize) -> bool {
    if text.len() <= max_bytes {
        return false;
    }
    let mut cut = max_bytes;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
