//! sift — normalises startup-analysis payloads into renderable results.
//!
//! The upstream multi-agent pipeline delivers its result as a clean nested
//! record, a flattened debug-style dump of one, or a pile of log events. This
//! crate re-exports the two layers so that integration tests and embedding
//! applications can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! payload + events ──► sift_core (normalize, classify) ──► sift_view (cards, text)
//! ```

pub use sift_core as engine;
pub use sift_view as view;

pub use sift_core::{normalize, Analysis, CanonicalResult, Normalizer, RawPayload, StreamEvent};
