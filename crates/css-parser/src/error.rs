//! Parse error types.

use thiserror::Error;

/// An error that occurred during parsing.
///
/// The parser is lenient: errors describe what was skipped during recovery,
/// they never abort the parse.
#[derive(Debug, Clone, Error)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The byte offset in the source where the error occurred.
    pub offset: usize,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, Error)]
pub enum ParseErrorKind {
    /// A `}` with no open block.
    #[error("unexpected '}}'")]
    UnexpectedCloseBrace,

    /// A `{` with nothing before it.
    #[error("block without a selector")]
    MissingSelector,

    /// A selector-looking prelude that never reached a `{`.
    #[error("expected a declaration block after '{prelude}'")]
    MissingBlock {
        /// The discarded prelude text.
        prelude: String,
    },

    /// A block that was still open at end of input. The parser closes it.
    #[error("unclosed block")]
    UnclosedBlock,

    /// Input the lexer could not make sense of.
    #[error("invalid input")]
    InvalidInput,
}
