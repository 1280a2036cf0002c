//! The fixed key vocabulary understood by the engine.
//!
//! Field names are looked up through compile-time perfect hash maps so that
//! free-form names (CLI arguments, catalogue keys) resolve to the closed
//! [`FieldKey`] and [`Section`] enums without string matching elsewhere.

use phf::phf_map;
use std::fmt;

/// A field name the extractors recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    MarketScore,
    CompetitionScore,
    Risks,
    LegalRisks,
    RecommendedSteps,
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
    Scenarios,
    Summary,
    OverallSummary,
}

/// How a field's value is written in the fallback text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `key=7.5`
    Score,
    /// `key=['a', 'b']`
    List,
    /// `key='text'` or `key="text"`
    Text,
}

static FIELD_KEYS: phf::Map<&'static str, FieldKey> = phf_map! {
    "market_score" => FieldKey::MarketScore,
    "competition_score" => FieldKey::CompetitionScore,
    "risks" => FieldKey::Risks,
    "legal_risks" => FieldKey::LegalRisks,
    "recommended_steps" => FieldKey::RecommendedSteps,
    "strengths" => FieldKey::Strengths,
    "weaknesses" => FieldKey::Weaknesses,
    "opportunities" => FieldKey::Opportunities,
    "threats" => FieldKey::Threats,
    "scenarios" => FieldKey::Scenarios,
    "summary" => FieldKey::Summary,
    "overall_summary" => FieldKey::OverallSummary,
};

impl FieldKey {
    pub const ALL: [FieldKey; 12] = [
        FieldKey::MarketScore,
        FieldKey::CompetitionScore,
        FieldKey::Risks,
        FieldKey::LegalRisks,
        FieldKey::RecommendedSteps,
        FieldKey::Strengths,
        FieldKey::Weaknesses,
        FieldKey::Opportunities,
        FieldKey::Threats,
        FieldKey::Scenarios,
        FieldKey::Summary,
        FieldKey::OverallSummary,
    ];

    /// Resolve a field name, or `None` if it is outside the vocabulary.
    pub fn parse(name: &str) -> Option<FieldKey> {
        FIELD_KEYS.get(name).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::MarketScore => "market_score",
            FieldKey::CompetitionScore => "competition_score",
            FieldKey::Risks => "risks",
            FieldKey::LegalRisks => "legal_risks",
            FieldKey::RecommendedSteps => "recommended_steps",
            FieldKey::Strengths => "strengths",
            FieldKey::Weaknesses => "weaknesses",
            FieldKey::Opportunities => "opportunities",
            FieldKey::Threats => "threats",
            FieldKey::Scenarios => "scenarios",
            FieldKey::Summary => "summary",
            FieldKey::OverallSummary => "overall_summary",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldKey::MarketScore | FieldKey::CompetitionScore => FieldKind::Score,
            FieldKey::Summary | FieldKey::OverallSummary => FieldKind::Text,
            _ => FieldKind::List,
        }
    }

    /// Position in [`FieldKey::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level result section, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    IdeaValidation,
    LegalAnalysis,
    SwotAnalysis,
    OverallSummary,
}

static SECTION_KEYS: phf::Map<&'static str, Section> = phf_map! {
    "idea_validation" => Section::IdeaValidation,
    "legal_analysis" => Section::LegalAnalysis,
    "swot_analysis" => Section::SwotAnalysis,
    "overall_summary" => Section::OverallSummary,
};

impl Section {
    pub const ALL: [Section; 4] = [
        Section::IdeaValidation,
        Section::LegalAnalysis,
        Section::SwotAnalysis,
        Section::OverallSummary,
    ];

    pub fn parse(name: &str) -> Option<Section> {
        SECTION_KEYS.get(name).copied()
    }

    /// The payload key of this section.
    pub fn key(self) -> &'static str {
        match self {
            Section::IdeaValidation => "idea_validation",
            Section::LegalAnalysis => "legal_analysis",
            Section::SwotAnalysis => "swot_analysis",
            Section::OverallSummary => "overall_summary",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
