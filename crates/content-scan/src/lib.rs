//! Content source scanning for css-reduce-rs.
//!
//! A [`ContentSource`] is an opaque addressable blob of rendered markup or
//! script text. [`scan`] extracts the set of literal class-name-like tokens
//! it contains, which the purge engine uses as usage evidence. Scanning is
//! purely lexical: script sources are never interpreted, only searched for
//! tokens.

use rustc_hash::FxHashSet;
use thiserror::Error;

/// An error that occurred while analyzing a content source. Callers attach
/// the source's label when reporting.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The source bytes are not valid UTF-8 and cannot be analyzed.
    #[error("content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// The kind of content a source carries. Informational only: every kind is
/// scanned the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Rendered page markup.
    Markup,
    /// Concatenated script text.
    Script,
    /// Anything else.
    Other,
}

/// An opaque blob of content evaluated for selector usage.
#[derive(Debug, Clone)]
pub struct ContentSource {
    label: String,
    kind: ContentKind,
    bytes: Vec<u8>,
}

impl ContentSource {
    /// Creates a content source with an explicit label and kind.
    pub fn new(label: impl Into<String>, kind: ContentKind, bytes: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            kind,
            bytes,
        }
    }

    /// Creates a rendered-markup source.
    pub fn markup(text: impl Into<String>) -> Self {
        Self::new("markup", ContentKind::Markup, text.into().into_bytes())
    }

    /// Creates a script-text source.
    pub fn script(text: impl Into<String>) -> Self {
        Self::new("scripts", ContentKind::Script, text.into().into_bytes())
    }

    /// The label identifying this source in errors and logs.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The kind of content.
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// The raw bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// The set of literal tokens found in a content source.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    tokens: FxHashSet<String>,
}

impl TokenSet {
    /// Returns true if the token is present.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// The number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens were found.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Scans a content source, returning every maximal `[A-Za-z0-9_-]+` run it
/// contains. Fails if the source cannot be decoded; the caller treats that
/// as fatal to the whole reduction.
pub fn scan(source: &ContentSource) -> Result<TokenSet, ScanError> {
    let text = std::str::from_utf8(source.bytes())?;

    let mut tokens = FxHashSet::default();
    let mut start = None;

    for (idx, c) in text.char_indices() {
        if is_token_char(c) {
            if start.is_none() {
                start = Some(idx);
            }
        } else if let Some(s) = start.take() {
            tokens.insert(text[s..idx].to_string());
        }
    }
    if let Some(s) = start {
        tokens.insert(text[s..].to_string());
    }

    Ok(TokenSet { tokens })
}
