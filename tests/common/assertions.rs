//! Domain-specific assertion macros for sift harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which result invariant was violated.

use sift_core::CanonicalResult;

/// Assert that none of the three sections is present.
///
/// ```rust
/// assert_sections_null!(result);
/// ```
#[macro_export]
macro_rules! assert_sections_null {
    ($result:expr) => {{
        let result: &sift_core::CanonicalResult = &$result;
        if result.has_sections() {
            panic!(
                "assert_sections_null! failed:\n  idea_validation: {:?}\n  legal_analysis:  {:?}\n  swot_analysis:   {:?}",
                result.idea_validation, result.legal_analysis, result.swot_analysis
            );
        }
    }};
}

/// Assert the render-tier decision for a result.
///
/// ```rust
/// assert_structured!(result, true);
/// ```
#[macro_export]
macro_rules! assert_structured {
    ($result:expr, $expected:expr) => {{
        let result: &sift_core::CanonicalResult = &$result;
        let expected: bool = $expected;
        let actual = sift_core::is_structured(result);
        if actual != expected {
            panic!(
                "assert_structured! failed:\n  expected: {}\n  actual:   {}\n  result:   {:#?}",
                expected, actual, result
            );
        }
    }};
}

/// Assert that no present section is all-empty. Structured payloads may
/// legitimately carry empty sections, so only use this for text payloads.
pub fn assert_no_empty_sections(result: &CanonicalResult) {
    if let Some(iv) = &result.idea_validation {
        assert!(!iv.is_empty(), "idea_validation present but empty: {result:#?}");
    }
    if let Some(la) = &result.legal_analysis {
        assert!(!la.is_empty(), "legal_analysis present but empty: {result:#?}");
    }
    if let Some(sw) = &result.swot_analysis {
        assert!(!sw.is_empty(), "swot_analysis present but empty: {result:#?}");
    }
}
