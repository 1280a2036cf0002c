//! Plain-text rendering of a [`Screen`] and of the live progress log.
//!
//! Cards are separated by a blank line. Each card starts with its icon and
//! title; body lines are indented by two spaces.

use crate::sections::SectionBody;
use crate::stream::EventLine;
use crate::{Label, Screen};

const INDENT: &str = "  ";

/// Render the results screen.
pub fn render(screen: &Screen) -> String {
    let cards: Vec<String> = match screen {
        Screen::Sections(views) => views
            .iter()
            .map(|view| card(&view.label, &body_lines(&view.body)))
            .collect(),
        Screen::Stream { label, lines } => {
            let lines: Vec<String> = lines.iter().map(EventLine::to_string).collect();
            vec![card(label, &lines)]
        }
    };
    cards.join("\n")
}

/// Render the progress log shown while an analysis is still streaming.
pub fn render_progress(lines: &[EventLine]) -> String {
    let body: Vec<String> = lines.iter().map(EventLine::to_string).collect();
    card(
        &Label {
            title: "Real-Time Analysis Log".to_string(),
            icon: String::new(),
            wide: true,
        },
        &body,
    )
}

fn body_lines(body: &SectionBody) -> Vec<String> {
    match body {
        SectionBody::Fields(rows) => rows
            .iter()
            .map(|row| format!("{}: {}", row.label, row.value))
            .collect(),
        SectionBody::Paragraphs(paragraphs) => paragraphs.clone(),
    }
}

fn card(label: &Label, lines: &[String]) -> String {
    let mut out = if label.icon.is_empty() {
        label.title.clone()
    } else {
        format!("{} {}", label.icon, label.title)
    };
    out.push('\n');
    for line in lines {
        out.push_str(INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{FieldRow, SectionView};
    use pretty_assertions::assert_eq;
    use sift_core::Section;

    fn label(title: &str, icon: &str) -> Label {
        Label {
            title: title.into(),
            icon: icon.into(),
            wide: false,
        }
    }

    #[test]
    fn sections_are_separated_by_blank_lines() {
        let screen = Screen::Sections(vec![
            SectionView {
                section: Section::IdeaValidation,
                label: label("Idea Validation", "*"),
                body: SectionBody::Fields(vec![FieldRow {
                    label: "MARKET SCORE".into(),
                    value: "8.5".into(),
                }]),
            },
            SectionView {
                section: Section::OverallSummary,
                label: label("Overall Summary", "#"),
                body: SectionBody::Paragraphs(vec!["Go for it.".into()]),
            },
        ]);
        assert_eq!(
            render(&screen),
            "* Idea Validation\n  MARKET SCORE: 8.5\n\n# Overall Summary\n  Go for it.\n"
        );
    }

    #[test]
    fn stream_card_lists_event_lines() {
        let screen = Screen::Stream {
            label: label("Stream Output", ""),
            lines: vec![EventLine {
                step: "fetch".into(),
                content: "ok".into(),
            }],
        };
        assert_eq!(render(&screen), "Stream Output\n  [fetch] ok\n");
    }

    #[test]
    fn progress_has_a_title() {
        let out = render_progress(&[EventLine {
            step: "idea".into(),
            content: "scoring".into(),
        }]);
        assert_eq!(out, "Real-Time Analysis Log\n  [idea] scoring\n");
    }

    #[test]
    fn empty_screen_renders_nothing() {
        assert_eq!(render(&Screen::Sections(vec![])), "");
    }
}
