//! Test builders: ergonomic constructors for payloads and event logs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use sift_core::{RawPayload, Record, StreamEvent};

// ---------------------------------------------------------------------------
// PayloadBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for structured payload fixtures.
///
/// # Example
///
/// ```rust
/// let payload = PayloadBuilder::new()
///     .idea(Record::new().with("market_score", 7).with("risks", strings(&["crowded"])))
///     .overall("Promising.")
///     .build();
/// ```
#[derive(Default)]
pub struct PayloadBuilder {
    root: Record,
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn idea(self, section: Record) -> Self {
        self.field("idea_validation", section)
    }

    pub fn legal(self, section: Record) -> Self {
        self.field("legal_analysis", section)
    }

    pub fn swot(self, section: Record) -> Self {
        self.field("swot_analysis", section)
    }

    pub fn overall(self, summary: impl Into<RawPayload>) -> Self {
        self.field("overall_summary", summary)
    }

    pub fn field(mut self, key: &str, value: impl Into<RawPayload>) -> Self {
        self.root.insert(key, value);
        self
    }

    pub fn build(self) -> RawPayload {
        RawPayload::Record(self.root)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A list payload of strings.
pub fn strings(items: &[&str]) -> RawPayload {
    RawPayload::List(items.iter().map(|s| RawPayload::from(*s)).collect())
}

/// A text-content event log from `(step, content)` pairs.
pub fn events(pairs: &[(&str, &str)]) -> Vec<StreamEvent> {
    pairs
        .iter()
        .map(|(step, content)| StreamEvent::text(*step, *content))
        .collect()
}

/// A payload from a JSON value.
pub fn json_payload(value: serde_json::Value) -> RawPayload {
    value.into()
}
