//! sift view — turns an [`Analysis`] into displayable cards and plain text.
//!
//! The view never inspects payloads itself: it consumes the canonical result
//! and the render plan chosen by the engine.

pub mod catalogue;
pub mod sections;
pub mod stream;
pub mod text;

pub use catalogue::{Catalogue, Label};
pub use sections::{section_views, FieldRow, SectionBody, SectionView};
pub use stream::{event_lines, progress_lines, EventLine};

use sift_core::config::ViewConfig;
use sift_core::{Analysis, RenderPlan};

/// The results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The section grid.
    Sections(Vec<SectionView>),
    /// The raw fallback card with its verbatim event lines.
    Stream { label: Label, lines: Vec<EventLine> },
}

impl Screen {
    pub fn build(analysis: &Analysis, catalogue: &Catalogue, cfg: &ViewConfig) -> Self {
        match &analysis.plan {
            RenderPlan::Sections => Screen::Sections(section_views(&analysis.result, catalogue, cfg)),
            RenderPlan::Raw(events) => {
                tracing::debug!(events = events.len(), "no structured results; showing raw stream");
                Screen::Stream {
                    label: catalogue.stream.clone(),
                    lines: event_lines(events),
                }
            }
        }
    }
}
