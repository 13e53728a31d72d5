//! Unused-style reduction engine for css-reduce-rs.
//!
//! Reduces a stylesheet to the subset of rules a rendered page actually
//! needs, while preserving rules whose applicability depends on transient
//! UI state that a static snapshot cannot observe:
//!
//! - conditional at-rule blocks (media queries) are carried through
//!   untouched,
//! - rules with dynamic-state pseudo selectors (`:hover`, `:nth-child`,
//!   ...) are safelisted,
//! - everything else must show usage evidence in at least one content
//!   source (rendered markup, script text) to survive.
//!
//! # Example
//!
//! ```
//! use css_reduce::{reduce, ContentSource, ReduceOptions};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let css = ".used{color:red}.unused{color:blue}";
//! let markup = ContentSource::markup(r#"<div class="used"></div>"#);
//!
//! let out = reduce(css, &[], true, vec![markup], ReduceOptions::default())
//!     .await
//!     .unwrap();
//! assert_eq!(out, ".used { color:red }");
//! # }
//! ```

pub mod classify;
pub mod critical;
pub mod dedupe;
mod error;
pub mod merge;
pub mod partition;
pub mod purge;
pub mod safelist;

pub use content_scan::{ContentKind, ContentSource};
pub use error::ReduceError;
pub use safelist::SafelistPolicy;

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Options for a reduction call.
#[derive(Debug, Clone, Default)]
pub struct ReduceOptions {
    /// Overall deadline for the call. `None` means no deadline.
    pub timeout: Option<Duration>,
}

/// Strips `!important` markers so specificity hacks do not leak into the
/// reduced output.
pub fn sanitize(css: &str) -> String {
    css.replace("!important", "")
}

/// Reduces a stylesheet against the given content sources.
///
/// Each source is scanned and purged against independently (concurrently),
/// then the results are unioned, deduplicated and the conditional blocks
/// reattached. Every failure is fatal: no partial stylesheet is ever
/// returned, and there are no internal retries.
///
/// With no content sources there is no usage evidence to purge against;
/// the sheet is passed through (sanitized and deduplicated) rather than
/// emptied.
pub async fn reduce(
    css: &str,
    safelist_classes: &[String],
    preserve_children: bool,
    sources: Vec<ContentSource>,
    options: ReduceOptions,
) -> Result<String, ReduceError> {
    match options.timeout {
        Some(limit) => {
            tokio::time::timeout(
                limit,
                reduce_inner(css, safelist_classes, preserve_children, sources),
            )
            .await
            .map_err(|_| ReduceError::Timeout { limit })?
        }
        None => reduce_inner(css, safelist_classes, preserve_children, sources).await,
    }
}

async fn reduce_inner(
    css: &str,
    safelist_classes: &[String],
    preserve_children: bool,
    sources: Vec<ContentSource>,
) -> Result<String, ReduceError> {
    let css = sanitize(css);
    let partition = partition::partition(&css)?;
    let fragments = classify::classify(&partition.standard);
    let policy = Arc::new(SafelistPolicy::build(
        safelist_classes,
        &fragments,
        preserve_children,
    ));
    let standard = Arc::new(partition.standard);

    let results = if sources.is_empty() {
        vec![standard.to_css()]
    } else {
        purge_sources(sources, &standard, &policy).await?
    };

    Ok(merge::merge(
        &results,
        &partition.conditional_css,
        safelist_classes,
        preserve_children,
    ))
}

/// Purges the standard sheet against each source concurrently, returning
/// the results in source order.
async fn purge_sources(
    sources: Vec<ContentSource>,
    standard: &Arc<css_parser::Stylesheet>,
    policy: &Arc<SafelistPolicy>,
) -> Result<Vec<String>, ReduceError> {
    let mut join_set = JoinSet::new();
    let source_count = sources.len();

    for (index, source) in sources.into_iter().enumerate() {
        let standard = Arc::clone(standard);
        let policy = Arc::clone(policy);
        join_set.spawn(async move {
            let tokens = content_scan::scan(&source).map_err(|e| ReduceError::Analysis {
                label: source.label().to_string(),
                message: e.to_string(),
            })?;
            Ok::<_, ReduceError>((index, purge::purge(&standard, &tokens, &policy).to_css()))
        });
    }

    let mut results = vec![String::new(); source_count];
    while let Some(joined) = join_set.join_next().await {
        let (index, result_css) =
            joined.map_err(|e| ReduceError::TaskFailed(e.to_string()))??;
        results[index] = result_css;
    }

    Ok(results)
}
