//! Field extractors: pattern-based readers over flattened payload text.
//!
//! The fallback text format is a loose `key=value` dump:
//!
//! | Kind  | Form                         | Reader              |
//! |-------|------------------------------|---------------------|
//! | score | `market_score=7.5`           | [`float`]           |
//! | list  | `risks=['a', "b", c]`        | [`list`]            |
//! | text  | `summary='it\'s'` / `"..."`  | [`quoted`], [`quoted_all`] |
//!
//! Keys must start at a word boundary, so `summary=` never matches inside
//! `overall_summary=`. A quoted value ends at the first unescaped closing
//! quote that is followed by `,`, `)` or the end of the text; a quote
//! followed by anything else is part of the value. Lists are one bracket
//! pair with no nesting; items are split on commas.
//!
//! Patterns are compiled once per key and run on the `regex` crate's
//! linear-time engine. For quoted values the regex only finds the opening
//! `key='`; the body is scanned by hand so that a value may itself end in a
//! quote (`'founders''`).

use crate::vocab::{FieldKey, FieldKind};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

struct KeyPatterns {
    float: Regex,
    list: Regex,
    /// `key='` or `key="`, capturing the quote.
    opener: Regex,
}

impl KeyPatterns {
    fn compile(key: FieldKey) -> Self {
        let k = regex::escape(key.as_str());
        let build = |pattern: String| {
            Regex::new(&pattern).expect("extractor patterns are built from a fixed vocabulary")
        };
        Self {
            float: build(format!(r"\b{k}=([0-9]+(?:\.[0-9]*)?|\.[0-9]+)")),
            list: build(format!(r"\b{k}=\[([^\]]*)\]")),
            opener: build(format!(r#"\b{k}=(['"])"#)),
        }
    }
}

static PATTERNS: LazyLock<Vec<KeyPatterns>> =
    LazyLock::new(|| FieldKey::ALL.iter().map(|k| KeyPatterns::compile(*k)).collect());

fn patterns(key: FieldKey) -> &'static KeyPatterns {
    &PATTERNS[key.index()]
}

// ---------------------------------------------------------------------------
// Extractors
// ---------------------------------------------------------------------------

/// First `key=<number>` as a float; `None` if absent or unparsable.
pub fn float(text: &str, key: FieldKey) -> Option<f64> {
    let caps = patterns(key).float.captures(text)?;
    caps.get(1)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
}

/// Items of the first `key=[...]`, trimmed of quotes and whitespace, with
/// empty items dropped. Empty when absent.
pub fn list(text: &str, key: FieldKey) -> Vec<String> {
    let Some(interior) = patterns(key)
        .list
        .captures(text)
        .and_then(|caps| caps.get(1))
    else {
        return Vec::new();
    };
    interior
        .as_str()
        .split(',')
        .map(|item| item.trim_matches(|c: char| c.is_whitespace() || c == '\'' || c == '"'))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// First single-quoted `key='...'`, else first double-quoted `key="..."`,
/// unescaped. Empty when neither form matches.
pub fn quoted(text: &str, key: FieldKey) -> String {
    let first = |q: char| quoted_spans(text, key, |c| c == q, 1).into_iter().next();
    first('\'').or_else(|| first('"')).map(unescape).unwrap_or_default()
}

/// Every quoted `key=` value, either quote style, in document order.
pub fn quoted_all(text: &str, key: FieldKey) -> Vec<String> {
    quoted_spans(text, key, |_| true, usize::MAX)
        .into_iter()
        .map(unescape)
        .collect()
}

/// Raw bodies of up to `limit` non-overlapping quoted values whose quote
/// char passes `accept`.
///
/// Once a body of one quote style runs to the end of the text unterminated,
/// every later opener of that style would too, so they are skipped. This
/// keeps the whole search linear.
fn quoted_spans(
    text: &str,
    key: FieldKey,
    accept: impl Fn(char) -> bool,
    limit: usize,
) -> Vec<&str> {
    let opener = &patterns(key).opener;
    let mut spans = Vec::new();
    let mut unterminated = [false; 2];
    let mut pos = 0;
    while spans.len() < limit {
        let Some(quote) = opener.captures_at(text, pos).and_then(|caps| caps.get(1)) else {
            break;
        };
        let q = if quote.as_str() == "'" { '\'' } else { '"' };
        let style = usize::from(q == '"');
        pos = quote.end();
        if !accept(q) || unterminated[style] {
            continue;
        }
        match scan_body(text, quote.end(), q) {
            Some((body, end)) => {
                spans.push(body);
                pos = end;
            }
            None => unterminated[style] = true,
        }
    }
    spans
}

/// Scan from `start` (just past the opening quote) to the first unescaped
/// `q` followed by `,`, `)` or the end of the text. Returns the body and the
/// offset just past the closing quote.
fn scan_body(text: &str, start: usize, q: char) -> Option<(&str, usize)> {
    let mut chars = text[start..].char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            chars.next();
            continue;
        }
        if c == q && matches!(chars.peek(), None | Some((_, ',' | ')'))) {
            let end = start + i;
            return Some((&text[start..end], end + q.len_utf8()));
        }
    }
    None
}

/// Resolve backslash escapes. Unknown escapes are kept verbatim.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(q @ ('\'' | '"' | '\\')) => out.push(q),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Kind-directed extraction
// ---------------------------------------------------------------------------

/// The value read for one key, shaped by the key's [`FieldKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Score(Option<f64>),
    List(Vec<String>),
    Text(String),
    /// The repeated, unlabeled `summary` field.
    Occurrences(Vec<String>),
}

/// Run the extractor that matches `key`'s kind.
pub fn field(text: &str, key: FieldKey) -> FieldValue {
    match (key, key.kind()) {
        (FieldKey::Summary, _) => FieldValue::Occurrences(quoted_all(text, key)),
        (_, FieldKind::Score) => FieldValue::Score(float(text, key)),
        (_, FieldKind::List) => FieldValue::List(list(text, key)),
        (_, FieldKind::Text) => FieldValue::Text(quoted(text, key)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
