//! Lexical selector utilities.
//!
//! These helpers work over selector text without a full selector-grammar
//! parse: splitting selector lists, extracting the literal class/id/element
//! tokens a selector references, and boundary-aware pseudo fragment lookup.

/// The literal tokens referenced by a single selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorTokens {
    /// Class names, without the leading `.`.
    pub classes: Vec<String>,
    /// Id names, without the leading `#`.
    pub ids: Vec<String>,
    /// Bare element names.
    pub elements: Vec<String>,
}

impl SelectorTokens {
    /// Returns true if the selector references no literal tokens
    /// (e.g. `*` or a lone pseudo-element).
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.ids.is_empty() && self.elements.is_empty()
    }

    /// Iterates over all tokens regardless of kind.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.classes
            .iter()
            .chain(self.ids.iter())
            .chain(self.elements.iter())
            .map(String::as_str)
    }
}

/// Returns true if `c` can appear inside a CSS identifier.
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Splits a selector list at top-level commas, respecting parentheses and
/// brackets (`:is(a, b)` stays intact). Parts are trimmed.
pub fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (idx, c) in selector.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let part = selector[start..idx].trim();
                if !part.is_empty() {
                    parts.push(part);
                }
                start = idx + 1;
            }
            _ => {}
        }
    }

    let last = selector[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    parts
}

/// Extracts the class/id/element tokens a single selector references.
///
/// Pseudo-classes (with their arguments) and attribute blocks are skipped:
/// they constrain a match but are not usage evidence on their own.
pub fn selector_tokens(selector: &str) -> SelectorTokens {
    let mut tokens = SelectorTokens::default();
    let bytes: Vec<char> = selector.chars().collect();
    let mut i = 0usize;
    // Whether the previous significant char ended a simple selector, in
    // which case a bare ident starts a new element name.
    let mut at_element_position = true;

    while i < bytes.len() {
        let c = bytes[i];
        match c {
            '.' | '#' => {
                i += 1;
                let start = i;
                while i < bytes.len() && is_ident_char(bytes[i]) {
                    i += 1;
                }
                if i > start {
                    let name: String = bytes[start..i].iter().collect();
                    if c == '.' {
                        tokens.classes.push(name);
                    } else {
                        tokens.ids.push(name);
                    }
                }
                at_element_position = false;
            }
            ':' => {
                i += 1;
                if i < bytes.len() && bytes[i] == ':' {
                    i += 1;
                }
                while i < bytes.len() && is_ident_char(bytes[i]) {
                    i += 1;
                }
                if i < bytes.len() && bytes[i] == '(' {
                    let mut depth = 1usize;
                    i += 1;
                    while i < bytes.len() && depth > 0 {
                        match bytes[i] {
                            '(' => depth += 1,
                            ')' => depth -= 1,
                            _ => {}
                        }
                        i += 1;
                    }
                }
                at_element_position = false;
            }
            '[' => {
                let mut depth = 1usize;
                i += 1;
                while i < bytes.len() && depth > 0 {
                    match bytes[i] {
                        '[' => depth += 1,
                        ']' => depth -= 1,
                        _ => {}
                    }
                    i += 1;
                }
                at_element_position = false;
            }
            ' ' | '\t' | '\n' | '>' | '+' | '~' => {
                i += 1;
                at_element_position = true;
            }
            '*' => {
                i += 1;
                at_element_position = false;
            }
            _ if at_element_position && (c.is_ascii_alphabetic() || c == '-' || c == '_') => {
                let start = i;
                while i < bytes.len() && is_ident_char(bytes[i]) {
                    i += 1;
                }
                tokens.elements.push(bytes[start..i].iter().collect());
                at_element_position = false;
            }
            _ => {
                i += 1;
                at_element_position = false;
            }
        }
    }

    tokens
}

/// Returns true if `selector` contains the pseudo `fragment` (e.g.
/// `:hover`) at an identifier boundary, so `:hover` does not fire inside
/// `:hover-card`.
pub fn contains_pseudo_fragment(selector: &str, fragment: &str) -> bool {
    let mut search_from = 0usize;
    while let Some(found) = selector[search_from..].find(fragment) {
        let end = search_from + found + fragment.len();
        match selector[end..].chars().next() {
            Some(c) if is_ident_char(c) => search_from = end,
            _ => return true,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_plain_list() {
        assert_eq!(split_selector_list(".a, .b"), vec![".a", ".b"]);
    }

    #[test]
    fn test_split_respects_parens() {
        assert_eq!(
            split_selector_list(":is(.a, .b) .c, .d"),
            vec![":is(.a, .b) .c", ".d"]
        );
    }

    #[test]
    fn test_tokens_classes_and_ids() {
        let tokens = selector_tokens(".btn#main .icon");
        assert_eq!(tokens.classes, vec!["btn", "icon"]);
        assert_eq!(tokens.ids, vec!["main"]);
        assert!(tokens.elements.is_empty());
    }

    #[test]
    fn test_tokens_elements() {
        let tokens = selector_tokens("nav > ul li");
        assert_eq!(tokens.elements, vec!["nav", "ul", "li"]);
    }

    #[test]
    fn test_pseudo_and_attributes_skipped() {
        let tokens = selector_tokens(".btn:hover[data-state=\"on\"]::after");
        assert_eq!(tokens.classes, vec!["btn"]);
        assert!(tokens.ids.is_empty());
        assert!(tokens.elements.is_empty());
    }

    #[test]
    fn test_pseudo_arguments_skipped() {
        // .hidden only constrains the :not() match; it is not evidence that
        // .card uses it.
        let tokens = selector_tokens(".card:not(.hidden)");
        assert_eq!(tokens.classes, vec!["card"]);
    }

    #[test]
    fn test_universal_selector_has_no_tokens() {
        assert!(selector_tokens("*").is_empty());
    }

    #[test]
    fn test_contains_pseudo_fragment_boundary() {
        assert!(contains_pseudo_fragment(".btn:hover > span", ":hover"));
        assert!(contains_pseudo_fragment(".btn:hover", ":hover"));
        assert!(!contains_pseudo_fragment(".btn:hover-card", ":hover"));
        assert!(contains_pseudo_fragment("li:nth-child(2)", ":nth-child"));
    }

    #[test]
    fn test_double_colon_pseudo_element() {
        // `::after` contains `:after` starting at the second colon.
        assert!(contains_pseudo_fragment(".a::after", ":after"));
    }
}
