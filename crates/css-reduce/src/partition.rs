//! Media partitioning.
//!
//! Splits a stylesheet into its top-level conditional at-rule blocks and
//! everything else. Conditional blocks depend on runtime viewport/feature
//! state the engine cannot observe statically, so they are carried through
//! the reduction untouched and never evaluated for usage.

use crate::error::ReduceError;
use css_parser::{Item, Stylesheet};

/// At-rule keywords whose blocks are retained unconditionally.
pub const CONDITIONAL_AT_RULES: &[&str] = &["media"];

/// The result of partitioning a stylesheet.
#[derive(Debug)]
pub struct Partition {
    /// Every conditional at-rule, serialized verbatim in source order.
    pub conditional_css: String,
    /// The remaining standard rules and at-rules.
    pub standard: Stylesheet,
}

fn is_conditional(name: &str) -> bool {
    CONDITIONAL_AT_RULES.contains(&name)
}

/// Partitions CSS text into conditional and standard portions.
///
/// Parsing is lenient; the only fatal case is input from which even the
/// recovering parser salvages nothing.
pub fn partition(css: &str) -> Result<Partition, ReduceError> {
    let result = css_parser::parse(css);

    if result.stylesheet.is_empty() {
        if let Some(error) = result.errors.first() {
            return Err(ReduceError::MalformedInput(error.to_string()));
        }
    }

    let mut conditional = Vec::new();
    let mut standard = Vec::new();

    for item in result.stylesheet.items {
        match item {
            Item::AtRule(at_rule) if is_conditional(&at_rule.name) => {
                conditional.push(at_rule.raw);
            }
            other => standard.push(other),
        }
    }

    Ok(Partition {
        conditional_css: conditional.join("\n"),
        standard: Stylesheet { items: standard },
    })
}
