//! Merging of critical-path extraction results.
//!
//! Critical CSS extraction itself is an external collaborator; it yields
//! one `(identifier, css)` pair per page. When several pages are involved,
//! their results are concatenated and run through the same dedup
//! collaborator the reduction engine uses.

use crate::dedupe::dedupe;

/// One critical-path extraction result.
#[derive(Debug, Clone)]
pub struct CriticalResult {
    /// The identifier of the page the CSS was extracted for.
    pub identifier: String,
    /// The extracted CSS text.
    pub css: String,
}

impl CriticalResult {
    /// Creates a result.
    pub fn new(identifier: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            css: css.into(),
        }
    }
}

/// Merges critical CSS results into one stylesheet.
///
/// A single result is passed through unchanged; multiple results are
/// concatenated in order and deduplicated.
pub fn merge_results(results: &[CriticalResult]) -> String {
    match results {
        [] => String::new(),
        [only] => only.css.clone(),
        many => {
            let combined = many
                .iter()
                .map(|r| r.css.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            dedupe(&combined)
        }
    }
}
