//! Exact-duplicate rule elimination.
//!
//! Two rules are duplicates iff their serialized text is byte-identical;
//! the first occurrence wins and order is otherwise preserved. Losing the
//! dedup optimization is safe but losing rules is not, so this degrades
//! gracefully: any input the parser reports errors on is returned
//! unchanged.

use css_parser::Item;
use rustc_hash::FxHashSet;

/// Removes byte-identical duplicate top-level items from CSS text.
pub fn dedupe(css: &str) -> String {
    let result = css_parser::parse(css);
    if !result.errors.is_empty() {
        return css.to_string();
    }

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut kept: Vec<String> = Vec::new();

    for item in &result.stylesheet.items {
        let text = Item::to_css(item);
        if seen.insert(text.clone()) {
            kept.push(text);
        }
    }

    kept.join("\n")
}
