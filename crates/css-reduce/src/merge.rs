//! Merging and postprocessing of purge results.
//!
//! Unions the per-source purge results, deduplicates, reattaches the
//! conditional blocks untouched, and under the flat strategy strips
//! descendant rules of caller-supplied safelisted classes that slipped
//! through.

use crate::dedupe::dedupe;
use css_parser::Item;
use regex::Regex;

/// Merges purge results (in content-source order) into the final
/// stylesheet text.
pub fn merge(
    results: &[String],
    conditional_css: &str,
    caller_safelist: &[String],
    preserve_children: bool,
) -> String {
    let combined = results
        .iter()
        .filter(|css| !css.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");

    let mut merged = dedupe(&combined);

    if !conditional_css.is_empty() {
        if merged.is_empty() {
            merged = conditional_css.to_string();
        } else {
            merged.push('\n');
            merged.push_str(conditional_css);
        }
    }

    if !preserve_children {
        merged = strip_safelisted_descendants(&merged, caller_safelist);
    }

    merged
}

/// Removes every top-level rule whose selector is a descendant of a
/// caller-supplied safelisted class (`.safe ` or `.safe>` prefix, or
/// `\.safe\s+` anywhere). The safelisted rule itself is never removed, and
/// conditional blocks are never touched: only plain top-level rules are
/// inspected.
pub fn strip_safelisted_descendants(css: &str, caller_safelist: &[String]) -> String {
    if caller_safelist.is_empty() {
        return css.to_string();
    }

    let result = css_parser::parse(css);
    if !result.errors.is_empty() {
        return css.to_string();
    }

    let matchers: Vec<DescendantMatcher> = caller_safelist
        .iter()
        .map(|class| DescendantMatcher::new(class))
        .collect();

    let kept: Vec<String> = result
        .stylesheet
        .items
        .iter()
        .filter(|item| match item {
            Item::AtRule(_) => true,
            Item::Rule(rule) => !matchers.iter().any(|m| m.matches(&rule.selector)),
        })
        .map(Item::to_css)
        .collect();

    kept.join("\n")
}

struct DescendantMatcher {
    space_prefix: String,
    child_prefix: String,
    anywhere: Regex,
}

impl DescendantMatcher {
    fn new(class: &str) -> Self {
        let pattern = format!(r"\.{}\s+", regex::escape(class));
        Self {
            space_prefix: format!(".{class} "),
            child_prefix: format!(".{class}>"),
            anywhere: Regex::new(&pattern).expect("escaped class forms a valid pattern"),
        }
    }

    fn matches(&self, selector: &str) -> bool {
        selector.starts_with(&self.space_prefix)
            || selector.starts_with(&self.child_prefix)
            || self.anywhere.is_match(selector)
    }
}
