//! Render-tier classifier.
//!
//! A result is shown as sections only when it carries something to show.
//! Otherwise the consumer displays a verbatim log: the payload's designated
//! raw-text field as one synthetic event, or the streamed event log.

use crate::payload::RawPayload;
use crate::types::{CanonicalResult, EventContent, StreamEvent};

/// Step name of the synthetic event wrapping the raw-text field.
pub const RAW_STEP: &str = "raw";

/// What the presentation layer should display.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    /// Show the section layout for the canonical result.
    Sections,
    /// Show these events verbatim.
    Raw(Vec<StreamEvent>),
}

/// Any section present, or a non-empty overall summary.
pub fn is_structured(result: &CanonicalResult) -> bool {
    result.has_sections() || !result.overall_summary.is_empty()
}

/// Decide what to display for `result`.
pub fn plan(
    result: &CanonicalResult,
    payload: &RawPayload,
    events: &[StreamEvent],
    raw_field: &str,
) -> RenderPlan {
    if is_structured(result) {
        return RenderPlan::Sections;
    }
    match raw_text_event(payload, raw_field) {
        Some(event) => RenderPlan::Raw(vec![event]),
        None => RenderPlan::Raw(events.to_vec()),
    }
}

fn raw_text_event(payload: &RawPayload, raw_field: &str) -> Option<StreamEvent> {
    let value = payload.as_record()?.get(raw_field)?;
    if value.is_falsy() {
        return None;
    }
    Some(StreamEvent {
        step: RAW_STEP.to_string(),
        content: EventContent::from(value.clone()),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
