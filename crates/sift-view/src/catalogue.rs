//! Section catalogue: titles and icons for each result card.
//!
//! The catalogue is a TOML file embedded in the binary via [`include_str!`],
//! so rendering works without any files on disk. Call
//! [`Catalogue::load_default`] once and pass the result by reference.

use config::{Config, File, FileFormat};
use serde::Deserialize;
use sift_core::Section;

const DEFAULT_CATALOGUE_SRC: &str = include_str!("catalogue/sections.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types, mirroring the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawLabel {
    title: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    wide: bool,
}

impl RawLabel {
    fn into_label(self) -> Label {
        Label {
            title: self.title,
            icon: self.icon,
            wide: self.wide,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawCatalogue {
    idea_validation: RawLabel,
    legal_analysis: RawLabel,
    swot_analysis: RawLabel,
    overall_summary: RawLabel,
    stream: RawLabel,
}

// ---------------------------------------------------------------------------
// Public Catalogue type
// ---------------------------------------------------------------------------

/// Display label of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub title: String,
    pub icon: String,
    /// Spans the full width of the results grid.
    pub wide: bool,
}

/// Labels for the four result sections and the raw stream card.
#[derive(Debug, Clone)]
pub struct Catalogue {
    idea_validation: Label,
    legal_analysis: Label,
    swot_analysis: Label,
    overall_summary: Label,
    /// Label of the raw fallback card.
    pub stream: Label,
}

impl Catalogue {
    /// Load and parse the embedded default catalogue.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_CATALOGUE_SRC)
            .expect("embedded section catalogue must be valid TOML")
    }

    /// Parse a catalogue from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawCatalogue = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            idea_validation: raw.idea_validation.into_label(),
            legal_analysis: raw.legal_analysis.into_label(),
            swot_analysis: raw.swot_analysis.into_label(),
            overall_summary: raw.overall_summary.into_label(),
            stream: raw.stream.into_label(),
        })
    }

    pub fn label(&self, section: Section) -> &Label {
        match section {
            Section::IdeaValidation => &self.idea_validation,
            Section::LegalAnalysis => &self.legal_analysis,
            Section::SwotAnalysis => &self.swot_analysis,
            Section::OverallSummary => &self.overall_summary,
        }
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::load_default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
