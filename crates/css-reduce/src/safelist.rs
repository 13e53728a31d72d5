//! Safelist policy construction.
//!
//! A policy combines caller-supplied class names with the classifier's
//! dynamic-state fragments into the retention rules the purge engine
//! honors. Two strategies exist: descendant-preserving (safer, larger
//! output) and flat (tighter pruning, corrected later by the merge step's
//! strip pass).

use indexmap::IndexSet;
use regex::Regex;

/// The retention policy applied during purging.
#[derive(Debug)]
pub struct SafelistPolicy {
    /// Literal entries that must never be discarded outright: caller class
    /// names plus dynamic-state fragments.
    pub standard: Vec<String>,
    /// One pattern per dynamic-state fragment, matching the fragment
    /// followed by whitespace, a child combinator or end of selector.
    /// Present only under the descendant-preserving strategy, where each
    /// pattern retains both the matched rule and rules nested beneath it.
    pub descendant_patterns: Vec<Regex>,
}

impl SafelistPolicy {
    /// Builds a policy from caller class names and classified fragments.
    pub fn build(
        caller_classes: &[String],
        fragments: &[String],
        preserve_children: bool,
    ) -> Self {
        let mut standard: IndexSet<String> = caller_classes.iter().cloned().collect();
        standard.extend(fragments.iter().cloned());

        let descendant_patterns = if preserve_children {
            fragments
                .iter()
                .map(|fragment| {
                    let pattern = format!(r"{}(\s|>|$)", regex::escape(fragment));
                    Regex::new(&pattern).expect("escaped fragment forms a valid pattern")
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            standard: standard.into_iter().collect(),
            descendant_patterns,
        }
    }

    /// Returns true under the descendant-preserving strategy.
    pub fn preserves_descendants(&self) -> bool {
        !self.descendant_patterns.is_empty()
    }
}
