//! AST types for a parsed stylesheet.
//!
//! The parser only resolves top-level structure. Declaration bodies are
//! opaque text, and at-rules keep their full source text so they can be
//! re-emitted byte-identical.

/// A parsed stylesheet: an ordered sequence of top-level items.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    /// The top-level items in source order.
    pub items: Vec<Item>,
}

/// A top-level stylesheet item.
#[derive(Debug, Clone)]
pub enum Item {
    /// A plain style rule.
    Rule(Rule),
    /// An at-rule, kept verbatim.
    AtRule(AtRule),
}

/// A style rule: a selector and an opaque declaration body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The selector text, trimmed.
    pub selector: String,
    /// The raw declaration text between the braces, trimmed. Never
    /// inspected by the parser.
    pub body: String,
}

/// An at-rule such as `@media ... { ... }` or `@import ...;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    /// The keyword without the leading `@` (e.g. `media`).
    pub name: String,
    /// The prelude between the keyword and the block or semicolon, trimmed.
    pub params: String,
    /// The full source text of the at-rule, verbatim.
    pub raw: String,
    /// Whether the at-rule has a `{ ... }` block.
    pub has_block: bool,
}

impl Rule {
    /// Serializes the rule back to CSS text.
    pub fn to_css(&self) -> String {
        if self.body.is_empty() {
            format!("{} {{}}", self.selector)
        } else {
            format!("{} {{ {} }}", self.selector, self.body)
        }
    }
}

impl Item {
    /// Serializes the item back to CSS text.
    pub fn to_css(&self) -> String {
        match self {
            Item::Rule(rule) => rule.to_css(),
            Item::AtRule(at_rule) => at_rule.raw.clone(),
        }
    }
}

impl Stylesheet {
    /// Returns true if the stylesheet has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the plain rules, skipping at-rules.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.items.iter().filter_map(|item| match item {
            Item::Rule(rule) => Some(rule),
            Item::AtRule(_) => None,
        })
    }

    /// Serializes the stylesheet back to CSS text, one item per line.
    pub fn to_css(&self) -> String {
        self.items
            .iter()
            .map(Item::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
