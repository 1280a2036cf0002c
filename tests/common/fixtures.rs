//! Canonical payload corpora shared across harnesses.

use super::builders::{events, strings, PayloadBuilder};
use sift_core::{RawPayload, Record, StreamEvent};

/// Flattened debug dump covering every section.
pub const DUMP_FULL: &str = "idea_validation(market_score=8.5, risks=['low margin'], summary='Strong idea') \
legal_analysis(legal_risks=['IP risk'], summary='Needs counsel') \
swot_analysis(strengths=['team'], summary='Balanced') overall_summary='Go for it.'";

/// Dump with four unlabeled summaries and no explicit overall key.
pub const DUMP_POSITIONAL: &str = "IdeaValidation(market_score=6, risks=['churn'], summary='one') \
LegalAnalysis(legal_risks=[], recommended_steps=['incorporate'], summary='two') \
SwotAnalysis(strengths=['speed'], weaknesses=['cash'], summary='three') summary='four'";

/// Dump using double quotes and escaped characters.
pub const DUMP_DOUBLE_QUOTED: &str =
    r#"market_score=7.25 competition_score=3 risks=["a, b", "c"] summary="it\"s fine""#;

/// Text that mentions keys without any recognisable values.
pub const NO_KEYS: &str = "hello world, no keys here";

/// The clean nested record the pipeline normally delivers.
pub fn structured_payload() -> RawPayload {
    PayloadBuilder::new()
        .idea(
            Record::new()
                .with("market_score", 7)
                .with("competition_score", 4)
                .with("risks", strings(&["crowded market"]))
                .with("summary", "Good potential"),
        )
        .legal(
            Record::new()
                .with("legal_risks", strings(&[]))
                .with("recommended_steps", strings(&["file trademark"]))
                .with("summary", ""),
        )
        .swot(Record::new())
        .overall("Promising with caveats.")
        .build()
}

/// A list of log lines with no recognisable structure.
pub fn log_lines_payload() -> RawPayload {
    strings(&["log line one", "log line two"])
}

pub fn fetch_events() -> Vec<StreamEvent> {
    events(&[("fetch", "ok")])
}

/// Fallback text payloads paired with the market score they carry.
pub fn fallback_corpus() -> Vec<(&'static str, Option<f64>)> {
    vec![
        (DUMP_FULL, Some(8.5)),
        (DUMP_POSITIONAL, Some(6.0)),
        (DUMP_DOUBLE_QUOTED, Some(7.25)),
        ("risks=['only risks']", None),
        ("legal_risks=['gdpr']", None),
        ("strengths=['brand']", None),
    ]
}

/// Payloads that must never be classified as structured.
pub fn unrecognised_corpus() -> Vec<RawPayload> {
    vec![
        RawPayload::Null,
        RawPayload::from(""),
        RawPayload::from(NO_KEYS),
        RawPayload::from(false),
        RawPayload::from(0),
        log_lines_payload(),
        RawPayload::Record(Record::new().with("status", "done").with("took_ms", 1200)),
        // `idea_validation` present but not a record, with no key=value text.
        RawPayload::Record(Record::new().with("idea_validation", "pending")),
    ]
}
