//! sift-core — payload normalization engine.
//!
//! Takes an arbitrarily-shaped analysis payload plus the streamed event log
//! and produces one typed [`CanonicalResult`] and a render-tier decision.
//!
//! # Architecture
//!
//! ```text
//! RawPayload ──► Normalizer ──┬─► structured path ──┐
//!                             └─► Flattener ──► Extractors ──┴─► CanonicalResult ──► RenderPlan
//! ```
//!
//! Everything here is pure and synchronous: no I/O, no shared mutable state.

pub mod config;
pub mod extract;
pub mod flatten;
pub mod input;
pub mod normalizer;
pub mod payload;
pub mod render;
pub mod types;
pub mod vocab;

pub use normalizer::{normalize, Analysis, Normalizer, Strategy};
pub use payload::{RawPayload, Record, Scalar};
pub use render::{is_structured, RenderPlan};
pub use types::{
    CanonicalResult, EventContent, IdeaValidation, LegalAnalysis, StreamEvent, SwotAnalysis,
};
pub use vocab::{FieldKey, FieldKind, Section};
