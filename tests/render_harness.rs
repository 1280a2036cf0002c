#![allow(unused)]
//! Render harness: from payload to the text a user sees.
//!
//! # What this covers
//!
//! - **Section cards**: present sections become cards in display order and
//!   empty fields are left out.
//! - **Raw fallback**: unrecognised payloads show the event log, or the
//!   payload's raw-text field as a single synthetic event.
//! - **Progress log**: only the most recent events are shown, each cut to the
//!   configured preview length.
//!
//! # Running
//!
//! ```sh
//! cargo test --test render_harness
//! ```

mod common;
use common::*;
use pretty_assertions::assert_eq;
use sift_core::config::ViewConfig;
use sift_core::{Normalizer, RawPayload, Record, Section, StreamEvent};
use sift_view::{progress_lines, text, Catalogue, Screen, SectionBody};

fn screen_for(payload: &RawPayload, events: &[StreamEvent]) -> Screen {
    let analysis = Normalizer::default().analyze(payload, events);
    Screen::build(&analysis, &Catalogue::load_default(), &ViewConfig::default())
}

#[test]
fn structured_payload_renders_every_card() {
    let out = text::render(&screen_for(&structured_payload(), &[]));
    assert_eq!(
        out,
        "💡 Idea Validation\n\
         \x20 MARKET SCORE: 7\n\
         \x20 COMPETITION SCORE: 4\n\
         \x20 RISKS: crowded market\n\
         \x20 SUMMARY: Good potential\n\
         \n\
         ⚖️ Legal Analysis\n\
         \x20 RECOMMENDED STEPS: file trademark\n\
         \n\
         📊 SWOT Analysis\n\
         \n\
         🧠 Overall Summary\n\
         \x20 Promising with caveats.\n"
    );
}

#[test]
fn dump_renders_sections_in_order() {
    let Screen::Sections(views) = screen_for(&RawPayload::from(DUMP_FULL), &[]) else {
        panic!("expected section cards");
    };
    let order: Vec<Section> = views.iter().map(|v| v.section).collect();
    assert_eq!(
        order,
        vec![
            Section::IdeaValidation,
            Section::LegalAnalysis,
            Section::SwotAnalysis,
            Section::OverallSummary,
        ]
    );
    assert_eq!(
        views[3].body,
        SectionBody::Paragraphs(vec!["Go for it.".to_string()])
    );
}

#[test]
fn absent_sections_have_no_card() {
    let Screen::Sections(views) = screen_for(&RawPayload::from("legal_risks=['gdpr']"), &[]) else {
        panic!("expected section cards");
    };
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].section, Section::LegalAnalysis);
    assert_eq!(views[0].label.title, "Legal Analysis");
}

#[test]
fn unrecognised_payload_shows_event_log() {
    let out = text::render(&screen_for(&log_lines_payload(), &fetch_events()));
    assert_eq!(out, "◈ Stream Output\n  [fetch] ok\n");
}

#[test]
fn raw_field_replaces_event_log() {
    let payload = PayloadBuilder::new().field("_raw", "agent crashed").build();
    let out = text::render(&screen_for(&payload, &fetch_events()));
    assert_eq!(out, "◈ Stream Output\n  [raw] agent crashed\n");
}

#[test]
fn empty_raw_field_keeps_event_log() {
    let payload = PayloadBuilder::new().field("_raw", "").build();
    let out = text::render(&screen_for(&payload, &fetch_events()));
    assert_eq!(out, "◈ Stream Output\n  [fetch] ok\n");
}

#[test]
fn record_events_render_as_json() {
    let events = vec![StreamEvent::record(
        "score",
        Record::new().with("market", 7).with("note", "ok"),
    )];
    let out = text::render(&screen_for(&RawPayload::Null, &events));
    assert_eq!(out, "◈ Stream Output\n  [score] {\"market\":7,\"note\":\"ok\"}\n");
}

#[test]
fn long_overall_summary_is_split_into_sentences() {
    let summary = format!("{}. Second point! Third?", "a".repeat(300));
    let payload = PayloadBuilder::new().idea(Record::new()).overall(summary).build();
    let Screen::Sections(views) = screen_for(&payload, &[]) else {
        panic!("expected section cards");
    };
    let overall = views
        .iter()
        .find(|v| v.section == Section::OverallSummary)
        .expect("overall card");
    assert_eq!(
        overall.body,
        SectionBody::Paragraphs(vec![
            format!("{}.", "a".repeat(300)),
            "Second point!".to_string(),
            "Third?".to_string(),
        ])
    );
}

#[test]
fn progress_log_shows_recent_events() {
    let events: Vec<StreamEvent> = (0..15)
        .map(|i| StreamEvent::text(format!("step{i}"), "x".repeat(200)))
        .collect();
    let lines = progress_lines(&events, &ViewConfig::default());
    let out = text::render_progress(&lines);

    assert_eq!(lines.len(), 12);
    assert!(out.starts_with("Real-Time Analysis Log\n  [step3] "));
    assert!(out.contains(&format!("[step14] {}...", "x".repeat(130))));
}
