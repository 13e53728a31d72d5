//! CSS lexer using logos.
//!
//! The lexer only distinguishes the structure-bearing tokens of a stylesheet
//! (braces, semicolons, at-keywords, strings, comments). Everything else is
//! opaque `Text`, so declarations and selectors survive verbatim.

use logos::Logos;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte span of the token in the source.
    pub span: std::ops::Range<usize>,
}

/// Token kinds for CSS structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos, Default)]
pub enum TokenKind {
    /// A `/* ... */` comment.
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    Comment,

    /// A quoted string. Braces and semicolons inside do not count as
    /// structure.
    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    String,

    /// An at-keyword such as `@media` or `@import`.
    #[regex(r"@[a-zA-Z-][a-zA-Z0-9-]*")]
    AtKeyword,

    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    /// `;`
    #[token(";")]
    Semicolon,

    /// A `/` that does not start a comment (e.g. `font: 12px/1.5`).
    #[token("/")]
    Slash,

    /// A lone `@` that does not start an at-keyword.
    #[token("@")]
    At,

    /// Any other run of characters, whitespace included.
    #[regex(r#"[^@{};/'"]+"#)]
    Text,

    /// End of file.
    Eof,

    /// Invalid input (e.g. an unterminated string delimiter).
    #[default]
    Error,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::AtKeyword => "at-keyword",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Semicolon => "';'",
            TokenKind::Slash => "'/'",
            TokenKind::At => "'@'",
            TokenKind::Text => "text",
            TokenKind::Eof => "end of file",
            TokenKind::Error => "invalid input",
        }
    }
}

/// A lexer for CSS source text.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            finished: false,
        }
    }

    /// Returns the source string being lexed.
    pub fn source(&self) -> &'src str {
        self.source
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(Ok(kind)) => Some(Token {
                kind,
                span: self.inner.span(),
            }),
            Some(Err(())) => Some(Token {
                kind: TokenKind::Error,
                span: self.inner.span(),
            }),
            None => {
                self.finished = true;
                let end = self.source.len();
                Some(Token {
                    kind: TokenKind::Eof,
                    span: end..end,
                })
            }
        }
    }
}
