//! Core types for sift-core.
//!
//! This module defines the engine's output, the [`CanonicalResult`] and its
//! three optional sections, plus the [`StreamEvent`] log entries that the
//! upstream collaborator streams while an analysis runs.

use crate::payload::{RawPayload, Record};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Canonical result
// ---------------------------------------------------------------------------

/// The single normalised result produced for every payload.
///
/// A section is `None` when nothing recognisable was found for it. The render
/// tier decides structured-vs-raw display from section presence, so an absent
/// section is never represented as an all-empty value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CanonicalResult {
    pub idea_validation: Option<IdeaValidation>,
    pub legal_analysis: Option<LegalAnalysis>,
    pub swot_analysis: Option<SwotAnalysis>,
    /// Empty string, never null, when absent.
    pub overall_summary: String,
}

impl CanonicalResult {
    /// Whether any of the three sections is present.
    pub fn has_sections(&self) -> bool {
        self.idea_validation.is_some() || self.legal_analysis.is_some() || self.swot_analysis.is_some()
    }
}

/// Market fit assessment of the idea.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IdeaValidation {
    pub market_score: Option<f64>,
    pub competition_score: Option<f64>,
    pub risks: Vec<String>,
    pub summary: String,
}

impl IdeaValidation {
    pub fn is_empty(&self) -> bool {
        self.market_score.is_none()
            && self.competition_score.is_none()
            && self.risks.is_empty()
            && self.summary.is_empty()
    }
}

/// Legal exposure and next steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LegalAnalysis {
    pub legal_risks: Vec<String>,
    pub recommended_steps: Vec<String>,
    pub summary: String,
}

impl LegalAnalysis {
    pub fn is_empty(&self) -> bool {
        self.legal_risks.is_empty() && self.recommended_steps.is_empty() && self.summary.is_empty()
    }
}

/// Strengths, weaknesses, opportunities and threats, plus scenario notes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SwotAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
    pub scenarios: Vec<String>,
    pub summary: String,
}

impl SwotAnalysis {
    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
            && self.weaknesses.is_empty()
            && self.opportunities.is_empty()
            && self.threats.is_empty()
            && self.scenarios.is_empty()
            && self.summary.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Stream events
// ---------------------------------------------------------------------------

/// One entry of the side-channel log streamed during processing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamEvent {
    pub step: String,
    pub content: EventContent,
}

impl StreamEvent {
    pub fn text(step: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            content: EventContent::Text(content.into()),
        }
    }

    pub fn record(step: impl Into<String>, content: Record) -> Self {
        Self {
            step: step.into(),
            content: EventContent::Record(content),
        }
    }
}

/// Event content is either free text or a structured record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventContent {
    Text(String),
    Record(Record),
}

impl EventContent {
    /// Text verbatim; records as compact JSON.
    pub fn display(&self) -> String {
        match self {
            EventContent::Text(t) => t.clone(),
            EventContent::Record(r) => serde_json::Value::from(r).to_string(),
        }
    }
}

/// Null becomes empty text; lists and scalars keep their JSON text.
impl From<RawPayload> for EventContent {
    fn from(payload: RawPayload) -> Self {
        match payload {
            RawPayload::Text(t) => EventContent::Text(t),
            RawPayload::Record(r) => EventContent::Record(r),
            RawPayload::Null => EventContent::Text(String::new()),
            other => EventContent::Text(other.to_json_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
