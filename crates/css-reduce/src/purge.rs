//! Usage purging.
//!
//! Given the standard (non-conditional) stylesheet, a token set scanned
//! from one content source and a safelist policy, keeps the subset of
//! rules whose selectors are structurally referenced or explicitly
//! retained. Purging is deterministic: identical inputs yield identical
//! output, which the idempotence guarantee depends on.

use crate::safelist::SafelistPolicy;
use content_scan::TokenSet;
use css_parser::selector::{contains_pseudo_fragment, selector_tokens, split_selector_list};
use css_parser::{Item, Rule, Stylesheet};

/// Purges unused rules from the standard stylesheet against one content
/// source.
///
/// Selector lists are split at top-level commas and rewritten to their
/// retained members; a rule with no retained selector is dropped. At-rules
/// in the standard portion (`@font-face`, `@keyframes`, `@import`, ...)
/// are kept untouched.
pub fn purge(standard: &Stylesheet, tokens: &TokenSet, policy: &SafelistPolicy) -> Stylesheet {
    let mut items = Vec::new();

    for item in &standard.items {
        match item {
            Item::AtRule(at_rule) => items.push(Item::AtRule(at_rule.clone())),
            Item::Rule(rule) => {
                let kept: Vec<&str> = split_selector_list(&rule.selector)
                    .into_iter()
                    .filter(|sel| keep_selector(sel, tokens, policy))
                    .collect();
                if !kept.is_empty() {
                    items.push(Item::Rule(Rule {
                        selector: kept.join(", "),
                        body: rule.body.clone(),
                    }));
                }
            }
        }
    }

    Stylesheet { items }
}

/// Decides whether a single selector survives.
fn keep_selector(selector: &str, tokens: &TokenSet, policy: &SafelistPolicy) -> bool {
    if matches_standard_safelist(selector, policy) {
        return true;
    }
    if policy
        .descendant_patterns
        .iter()
        .any(|pattern| pattern.is_match(selector))
    {
        return true;
    }
    is_used(selector, tokens)
}

/// A selector matches the standard safelist if a pseudo entry occurs in it
/// at an identifier boundary, or a class entry equals one of its literal
/// tokens.
fn matches_standard_safelist(selector: &str, policy: &SafelistPolicy) -> bool {
    let words = selector_tokens(selector);
    policy.standard.iter().any(|entry| {
        if entry.starts_with(':') {
            contains_pseudo_fragment(selector, entry)
        } else {
            words.words().any(|word| word == entry)
        }
    })
}

/// A selector is structurally used if every literal token it references
/// appears in the content source. Selectors referencing no literal tokens
/// (e.g. `*`) cannot be judged and are kept.
fn is_used(selector: &str, tokens: &TokenSet) -> bool {
    let words = selector_tokens(selector);
    if words.is_empty() {
        return true;
    }
    let used = words.words().all(|word| tokens.contains(word));
    used
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_scan::ContentSource;
    use pretty_assertions::assert_eq;

    fn tokens_for(content: &str) -> TokenSet {
        content_scan::scan(&ContentSource::markup(content)).unwrap()
    }

    fn run(css: &str, content: &str, policy: &SafelistPolicy) -> String {
        let standard = css_parser::parse(css).stylesheet;
        purge(&standard, &tokens_for(content), policy).to_css()
    }

    fn empty_policy() -> SafelistPolicy {
        SafelistPolicy::build(&[], &[], false)
    }

    #[test]
    fn test_used_class_kept_unused_dropped() {
        let out = run(
            ".a{color:red}.b{color:blue}",
            r#"<div class="a"></div>"#,
            &empty_policy(),
        );
        assert_eq!(out, ".a { color:red }");
    }

    #[test]
    fn test_all_tokens_must_be_used() {
        let out = run(
            ".a .b{color:red}",
            r#"<div class="a"></div>"#,
            &empty_policy(),
        );
        assert_eq!(out, "");
    }

    #[test]
    fn test_element_selector_usage() {
        let out = run(
            "nav{color:red}aside{color:blue}",
            "<nav>menu</nav>",
            &empty_policy(),
        );
        assert_eq!(out, "nav { color:red }");
    }

    #[test]
    fn test_selector_list_rewritten() {
        let out = run(
            ".a, .b{color:red}",
            r#"<div class="a"></div>"#,
            &empty_policy(),
        );
        assert_eq!(out, ".a { color:red }");
    }

    #[test]
    fn test_safelisted_class_kept_without_usage() {
        let policy = SafelistPolicy::build(&["btn".to_string()], &[], false);
        let out = run(".btn{color:red}", "<div></div>", &policy);
        assert_eq!(out, ".btn { color:red }");
    }

    #[test]
    fn test_pseudo_fragment_entry_retains_rule() {
        let policy = SafelistPolicy::build(&[], &[":hover".to_string()], false);
        let out = run(".btn:hover{color:red}", "<div></div>", &policy);
        assert_eq!(out, ".btn:hover { color:red }");
    }

    #[test]
    fn test_descendant_pattern_retains_nested_rule() {
        let policy = SafelistPolicy::build(&[], &[":hover".to_string()], true);
        let out = run(".btn:hover .icon{fill:red}", "<div></div>", &policy);
        assert_eq!(out, ".btn:hover .icon { fill:red }");
    }

    #[test]
    fn test_standard_entry_matches_at_identifier_boundary_only() {
        let policy = SafelistPolicy::build(&[], &[":hover".to_string()], false);
        let out = run(".btn:hover-card{color:red}", "<div></div>", &policy);
        assert_eq!(out, "");
    }

    #[test]
    fn test_class_entry_does_not_match_substring() {
        let policy = SafelistPolicy::build(&["btn".to_string()], &[], false);
        let out = run(".btn-large{color:red}", "<div></div>", &policy);
        assert_eq!(out, "");
    }

    #[test]
    fn test_universal_selector_kept() {
        let out = run("*{box-sizing:border-box}", "<div></div>", &empty_policy());
        assert_eq!(out, "* { box-sizing:border-box }");
    }

    #[test]
    fn test_at_rules_pass_through() {
        let out = run(
            "@font-face{font-family:X}.gone{color:red}",
            "<div></div>",
            &empty_policy(),
        );
        assert_eq!(out, "@font-face{font-family:X}");
    }

    #[test]
    fn test_deterministic() {
        let policy = SafelistPolicy::build(&["btn".to_string()], &[":hover".to_string()], true);
        let css = ".btn{a:b}.x:hover{c:d}.dead{e:f}";
        let first = run(css, "<p class=\"y\"></p>", &policy);
        let second = run(css, "<p class=\"y\"></p>", &policy);
        assert_eq!(first, second);
    }
}
