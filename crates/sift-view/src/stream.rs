//! Event lines for the raw fallback card and the live progress log.

use sift_core::config::ViewConfig;
use sift_core::StreamEvent;

/// One `[step] content` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLine {
    pub step: String,
    pub content: String,
}

impl EventLine {
    pub fn from_event(event: &StreamEvent) -> Self {
        Self {
            step: event.step.clone(),
            content: event.content.display(),
        }
    }
}

impl std::fmt::Display for EventLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.step, self.content)
    }
}

/// Full, untruncated lines.
pub fn event_lines(events: &[StreamEvent]) -> Vec<EventLine> {
    events.iter().map(EventLine::from_event).collect()
}

/// The last `stream_tail` events, each cut to `event_preview_chars`.
pub fn progress_lines(events: &[StreamEvent], cfg: &ViewConfig) -> Vec<EventLine> {
    let skip = events.len().saturating_sub(cfg.stream_tail);
    events[skip..]
        .iter()
        .map(|event| {
            let mut line = EventLine::from_event(event);
            line.content = truncate_chars(&line.content, cfg.event_preview_chars);
            line
        })
        .collect()
}

/// Cut `s` to at most `max` chars, appending `...` when anything was cut.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
