//! Normalizer: turns a [`RawPayload`] into one [`CanonicalResult`].
//!
//! Two strategies are tried in order, without backtracking:
//!
//! 1. **Structured**: the payload is a record whose `idea_validation` is a
//!    record. Sections are read by field access with per-field defaults.
//! 2. **Fallback**: the payload is flattened to text and the extractors are
//!    run over it. If none of `market_score`, `risks`, `legal_risks` or
//!    `strengths` is found, all three sections are dropped so the render tier
//!    falls back to raw display.
//!
//! In the fallback text, the unlabeled `summary` field is emitted once per
//! section in the order idea validation, legal, SWOT, overall. The fourth
//! occurrence is used as the overall summary only when no explicit
//! `overall_summary=` is present. This positional rule is a heuristic kept for
//! compatibility with the upstream dump format.

use crate::config::EngineConfig;
use crate::extract;
use crate::flatten::{clamp, flatten_with_depth};
use crate::payload::{RawPayload, Record};
use crate::render::{self, RenderPlan};
use crate::types::{CanonicalResult, IdeaValidation, LegalAnalysis, StreamEvent, SwotAnalysis};
use crate::vocab::{FieldKey, Section};

/// Which strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Structured,
    Fallback,
}

/// A normalised result together with its render decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub result: CanonicalResult,
    pub strategy: Strategy,
    pub plan: RenderPlan,
}

impl Analysis {
    /// Whether the section layout should be shown.
    pub fn is_structured(&self) -> bool {
        matches!(self.plan, RenderPlan::Sections)
    }
}

/// Stateless normalisation engine.
///
/// Holds only configuration, so one instance can be shared freely between
/// callers.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    cfg: EngineConfig,
}

impl Normalizer {
    pub fn new(cfg: EngineConfig) -> Self {
        Self { cfg }
    }

    /// Normalise `payload`. The event log is not consulted for field values;
    /// it only matters to the render tier.
    pub fn normalize(&self, payload: &RawPayload, events: &[StreamEvent]) -> CanonicalResult {
        self.normalize_with_strategy(payload, events).0
    }

    /// Normalise, classify and pick what to render.
    pub fn analyze(&self, payload: &RawPayload, events: &[StreamEvent]) -> Analysis {
        let (result, strategy) = self.normalize_with_strategy(payload, events);
        let plan = render::plan(&result, payload, events, &self.cfg.raw_field);
        Analysis {
            result,
            strategy,
            plan,
        }
    }

    fn normalize_with_strategy(
        &self,
        payload: &RawPayload,
        events: &[StreamEvent],
    ) -> (CanonicalResult, Strategy) {
        match structured_root(payload) {
            Some((root, idea)) => {
                tracing::debug!(events = events.len(), "payload is structured; reading sections directly");
                (self.read_structured(root, idea), Strategy::Structured)
            }
            None => {
                tracing::debug!(events = events.len(), "payload is not structured; extracting from text");
                (self.read_fallback(payload), Strategy::Fallback)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Structured path
    // -----------------------------------------------------------------------

    fn read_structured(&self, root: &Record, idea: &Record) -> CanonicalResult {
        let empty = Record::new();
        let legal = sub_record(root, Section::LegalAnalysis).unwrap_or(&empty);
        let swot = sub_record(root, Section::SwotAnalysis).unwrap_or(&empty);
        let depth = self.cfg.max_depth;

        let overall_summary = match root.get(Section::OverallSummary.key()) {
            Some(RawPayload::Text(t)) => t.clone(),
            Some(other) => flatten_with_depth(other, depth),
            None => String::new(),
        };

        CanonicalResult {
            idea_validation: Some(IdeaValidation {
                market_score: read_score(idea, FieldKey::MarketScore),
                competition_score: read_score(idea, FieldKey::CompetitionScore),
                risks: read_list(idea, FieldKey::Risks, depth),
                summary: read_text(idea, FieldKey::Summary, depth),
            }),
            legal_analysis: Some(LegalAnalysis {
                legal_risks: read_list(legal, FieldKey::LegalRisks, depth),
                recommended_steps: read_list(legal, FieldKey::RecommendedSteps, depth),
                summary: read_text(legal, FieldKey::Summary, depth),
            }),
            swot_analysis: Some(SwotAnalysis {
                strengths: read_list(swot, FieldKey::Strengths, depth),
                weaknesses: read_list(swot, FieldKey::Weaknesses, depth),
                opportunities: read_list(swot, FieldKey::Opportunities, depth),
                threats: read_list(swot, FieldKey::Threats, depth),
                scenarios: read_list(swot, FieldKey::Scenarios, depth),
                summary: read_text(swot, FieldKey::Summary, depth),
            }),
            overall_summary,
        }
    }

    // -----------------------------------------------------------------------
    // Fallback path
    // -----------------------------------------------------------------------

    fn read_fallback(&self, payload: &RawPayload) -> CanonicalResult {
        let mut raw = flatten_with_depth(payload, self.cfg.max_depth);
        if raw.is_empty() {
            return CanonicalResult::default();
        }
        let original_len = raw.len();
        if clamp(&mut raw, self.cfg.max_input_bytes) {
            tracing::warn!(
                original_len,
                max_input_bytes = self.cfg.max_input_bytes,
                "flattened payload truncated before extraction"
            );
        }
        tracing::warn!(
            bytes = raw.len(),
            "structured sections missing; falling back to text extraction (upstream format drift?)"
        );

        let text = raw.as_str();
        let mut summaries = extract::quoted_all(text, FieldKey::Summary).into_iter();
        let idea_summary = summaries.next().unwrap_or_default();
        let legal_summary = summaries.next().unwrap_or_default();
        let swot_summary = summaries.next().unwrap_or_default();
        let fourth_summary = summaries.next().unwrap_or_default();

        let explicit_overall = extract::quoted(text, FieldKey::OverallSummary);
        let overall_summary = if explicit_overall.is_empty() {
            fourth_summary
        } else {
            explicit_overall
        };

        let idea = IdeaValidation {
            market_score: extract::float(text, FieldKey::MarketScore),
            competition_score: extract::float(text, FieldKey::CompetitionScore),
            risks: extract::list(text, FieldKey::Risks),
            summary: idea_summary,
        };
        let legal = LegalAnalysis {
            legal_risks: extract::list(text, FieldKey::LegalRisks),
            recommended_steps: extract::list(text, FieldKey::RecommendedSteps),
            summary: legal_summary,
        };
        let swot = SwotAnalysis {
            strengths: extract::list(text, FieldKey::Strengths),
            weaknesses: extract::list(text, FieldKey::Weaknesses),
            opportunities: extract::list(text, FieldKey::Opportunities),
            threats: extract::list(text, FieldKey::Threats),
            scenarios: extract::list(text, FieldKey::Scenarios),
            summary: swot_summary,
        };

        let has_data = idea.market_score.is_some()
            || !idea.risks.is_empty()
            || !legal.legal_risks.is_empty()
            || !swot.strengths.is_empty();
        if !has_data {
            tracing::debug!("no recognisable fields in flattened payload");
            return CanonicalResult {
                overall_summary,
                ..CanonicalResult::default()
            };
        }

        CanonicalResult {
            idea_validation: (!idea.is_empty()).then_some(idea),
            legal_analysis: (!legal.is_empty()).then_some(legal),
            swot_analysis: (!swot.is_empty()).then_some(swot),
            overall_summary,
        }
    }
}

/// Normalise with the default engine configuration.
pub fn normalize(payload: &RawPayload, events: &[StreamEvent]) -> CanonicalResult {
    Normalizer::default().normalize(payload, events)
}

// ---------------------------------------------------------------------------
// Field readers
// ---------------------------------------------------------------------------

/// The root record and its `idea_validation` record, if the payload is
/// shaped for the structured path.
fn structured_root(payload: &RawPayload) -> Option<(&Record, &Record)> {
    let root = payload.as_record()?;
    let idea = sub_record(root, Section::IdeaValidation)?;
    Some((root, idea))
}

fn sub_record(root: &Record, section: Section) -> Option<&Record> {
    root.get(section.key()).and_then(RawPayload::as_record)
}

/// Numbers are taken as-is; numeric strings are parsed. Anything else is
/// treated as missing.
fn read_score(record: &Record, key: FieldKey) -> Option<f64> {
    let score = match record.get(key.as_str())? {
        RawPayload::Scalar(s) => s.as_f64(),
        RawPayload::Text(t) => t.trim().parse::<f64>().ok(),
        _ => None,
    };
    score.filter(|f| f.is_finite())
}

/// Each list item flattened to text, empty items dropped. A lone non-empty
/// string counts as a one-item list.
fn read_list(record: &Record, key: FieldKey, depth: usize) -> Vec<String> {
    match record.get(key.as_str()) {
        Some(RawPayload::List(items)) => items
            .iter()
            .map(|item| flatten_with_depth(item, depth))
            .filter(|item| !item.is_empty())
            .collect(),
        Some(RawPayload::Text(t)) if !t.is_empty() => vec![t.clone()],
        _ => Vec::new(),
    }
}

fn read_text(record: &Record, key: FieldKey, depth: usize) -> String {
    match record.get(key.as_str()) {
        Some(RawPayload::Text(t)) => t.clone(),
        Some(other) => flatten_with_depth(other, depth),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
