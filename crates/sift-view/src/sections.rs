//! Section views: one card per present section of a [`CanonicalResult`].
//!
//! Record-like sections become labelled rows (label = field key with `_`
//! replaced by spaces, uppercased; lists joined with `, `). Empty rows are
//! skipped. The overall summary is a run of paragraphs, split into sentences
//! once it is longer than the configured threshold.

use crate::catalogue::{Catalogue, Label};
use sift_core::config::ViewConfig;
use sift_core::{CanonicalResult, FieldKey, IdeaValidation, LegalAnalysis, Section, SwotAnalysis};

/// A labelled value inside a section card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Fields(Vec<FieldRow>),
    Paragraphs(Vec<String>),
}

/// One result card ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub section: Section,
    pub label: Label,
    pub body: SectionBody,
}

/// Cards for every present section, in display order.
pub fn section_views(
    result: &CanonicalResult,
    catalogue: &Catalogue,
    cfg: &ViewConfig,
) -> Vec<SectionView> {
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let body = section_body(result, section, cfg)?;
            Some(SectionView {
                section,
                label: catalogue.label(section).clone(),
                body,
            })
        })
        .collect()
}

fn section_body(result: &CanonicalResult, section: Section, cfg: &ViewConfig) -> Option<SectionBody> {
    match section {
        Section::IdeaValidation => result.idea_validation.as_ref().map(idea_rows),
        Section::LegalAnalysis => result.legal_analysis.as_ref().map(legal_rows),
        Section::SwotAnalysis => result.swot_analysis.as_ref().map(swot_rows),
        Section::OverallSummary => {
            let summary = result.overall_summary.trim();
            if summary.is_empty() {
                return None;
            }
            let paragraphs = if summary.chars().count() > cfg.sentence_split_chars {
                split_sentences(summary)
            } else {
                vec![summary.to_string()]
            };
            Some(SectionBody::Paragraphs(paragraphs))
        }
    }
}

fn idea_rows(iv: &IdeaValidation) -> SectionBody {
    let mut rows = Rows::default();
    rows.score(FieldKey::MarketScore, iv.market_score);
    rows.score(FieldKey::CompetitionScore, iv.competition_score);
    rows.list(FieldKey::Risks, &iv.risks);
    rows.text(FieldKey::Summary, &iv.summary);
    rows.finish()
}

fn legal_rows(la: &LegalAnalysis) -> SectionBody {
    let mut rows = Rows::default();
    rows.list(FieldKey::LegalRisks, &la.legal_risks);
    rows.list(FieldKey::RecommendedSteps, &la.recommended_steps);
    rows.text(FieldKey::Summary, &la.summary);
    rows.finish()
}

fn swot_rows(sw: &SwotAnalysis) -> SectionBody {
    let mut rows = Rows::default();
    rows.list(FieldKey::Strengths, &sw.strengths);
    rows.list(FieldKey::Weaknesses, &sw.weaknesses);
    rows.list(FieldKey::Opportunities, &sw.opportunities);
    rows.list(FieldKey::Threats, &sw.threats);
    rows.list(FieldKey::Scenarios, &sw.scenarios);
    rows.text(FieldKey::Summary, &sw.summary);
    rows.finish()
}

#[derive(Default)]
struct Rows(Vec<FieldRow>);

impl Rows {
    fn push(&mut self, key: FieldKey, value: String) {
        if !value.is_empty() {
            self.0.push(FieldRow {
                label: field_label(key),
                value,
            });
        }
    }

    fn score(&mut self, key: FieldKey, score: Option<f64>) {
        if let Some(score) = score {
            self.push(key, score.to_string());
        }
    }

    fn list(&mut self, key: FieldKey, items: &[String]) {
        self.push(key, items.join(", "));
    }

    fn text(&mut self, key: FieldKey, text: &str) {
        self.push(key, text.trim().to_string());
    }

    fn finish(self) -> SectionBody {
        SectionBody::Fields(self.0)
    }
}

/// `recommended_steps` → `RECOMMENDED STEPS`.
pub fn field_label(key: FieldKey) -> String {
    key.as_str().replace('_', " ").to_uppercase()
}

/// Split text after `.`, `!` or `?` when followed by whitespace.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let at_break = matches!(c, '.' | '!' | '?')
            && chars.peek().is_some_and(|(_, next)| next.is_whitespace());
        if at_break {
            let end = i + c.len_utf8();
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(out: &mut Vec<String>, s: &str) {
    let s = s.trim();
    if !s.is_empty() {
        out.push(s.to_string());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cfg() -> ViewConfig {
        ViewConfig::default()
    }

    #[test]
    fn absent_sections_produce_no_cards() {
        let views = section_views(&CanonicalResult::default(), &Catalogue::load_default(), &cfg());
        assert!(views.is_empty());
    }

    #[test]
    fn idea_rows_skip_empty_fields() {
        let result = CanonicalResult {
            idea_validation: Some(IdeaValidation {
                market_score: Some(7.0),
                risks: vec!["crowded market".into(), "thin margins".into()],
                ..Default::default()
            }),
            ..Default::default()
        };
        let views = section_views(&result, &Catalogue::load_default(), &cfg());
        assert_eq!(views.len(), 1);
        assert_eq!(
            views[0].body,
            SectionBody::Fields(vec![
                FieldRow { label: "MARKET SCORE".into(), value: "7".into() },
                FieldRow { label: "RISKS".into(), value: "crowded market, thin margins".into() },
            ])
        );
    }

    #[test]
    fn present_but_empty_section_still_renders_a_card() {
        let result = CanonicalResult {
            swot_analysis: Some(SwotAnalysis::default()),
            ..Default::default()
        };
        let views = section_views(&result, &Catalogue::load_default(), &cfg());
        assert_eq!(views[0].section, Section::SwotAnalysis);
        assert_eq!(views[0].body, SectionBody::Fields(vec![]));
    }

    #[test]
    fn short_overall_summary_is_one_paragraph() {
        let result = CanonicalResult {
            overall_summary: "Go. Now.".into(),
            ..Default::default()
        };
        let views = section_views(&result, &Catalogue::load_default(), &cfg());
        assert_eq!(views[0].body, SectionBody::Paragraphs(vec!["Go. Now.".into()]));
    }

    #[test]
    fn long_overall_summary_is_split_into_sentences() {
        let cfg = ViewConfig {
            sentence_split_chars: 10,
            ..ViewConfig::default()
        };
        let result = CanonicalResult {
            overall_summary: "Strong team. Risky market! Worth it? Yes".into(),
            ..Default::default()
        };
        let views = section_views(&result, &Catalogue::load_default(), &cfg);
        assert_eq!(
            views[0].body,
            SectionBody::Paragraphs(vec![
                "Strong team.".into(),
                "Risky market!".into(),
                "Worth it?".into(),
                "Yes".into(),
            ])
        );
    }

    #[test]
    fn decimals_inside_sentences_do_not_split() {
        assert_eq!(split_sentences("Score 8.5 overall. Fine."), ["Score 8.5 overall.", "Fine."]);
    }

    #[test]
    fn labels() {
        assert_eq!(field_label(FieldKey::RecommendedSteps), "RECOMMENDED STEPS");
        assert_eq!(field_label(FieldKey::Risks), "RISKS");
    }
}
