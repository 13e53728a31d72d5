//! Dynamic-state selector classification.
//!
//! Scans selector text for pseudo-class/pseudo-element fragments whose
//! match depends on transient runtime state (hover, focus, structural
//! position). Any rule containing one is a retention candidate rather than
//! something usage analysis can judge from a static snapshot.

use css_parser::selector::is_ident_char;
use css_parser::Stylesheet;
use indexmap::IndexSet;

/// The closed list of recognized dynamic-state pseudo keywords.
pub const DYNAMIC_STATE_FRAGMENTS: &[&str] = &[
    "after",
    "before",
    "where",
    "is",
    "not",
    "has",
    "nth-child",
    "nth-of-type",
    "first-child",
    "last-child",
    "focus-within",
    "focus",
    "hover",
];

/// Returns the dynamic-state fragments (`:hover`, `:nth-child`, ...)
/// present in the stylesheet's selectors, ordered by first occurrence,
/// duplicate-free.
///
/// Detection is lexical: fragments are found inside compound and
/// combinator selectors (`.btn:hover > span`) without a full selector
/// parse. An identifier-boundary check keeps `:hover` from firing inside
/// `:hover-card`.
pub fn classify(standard: &Stylesheet) -> Vec<String> {
    let mut found: IndexSet<String> = IndexSet::new();

    for rule in standard.rules() {
        scan_selector(&rule.selector, &mut found);
    }

    found.into_iter().collect()
}

fn scan_selector(selector: &str, found: &mut IndexSet<String>) {
    for (idx, c) in selector.char_indices() {
        if c != ':' {
            continue;
        }
        let rest = &selector[idx + 1..];
        for keyword in DYNAMIC_STATE_FRAGMENTS {
            if !rest.starts_with(keyword) {
                continue;
            }
            let boundary = rest[keyword.len()..].chars().next();
            if boundary.map(is_ident_char).unwrap_or(false) {
                continue;
            }
            found.insert(format!(":{keyword}"));
            break;
        }
    }
}
