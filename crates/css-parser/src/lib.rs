//! Lenient CSS parser for css-reduce-rs.
//!
//! This crate provides the parsing layer the reduction engine is built on:
//! - Lexer (tokenizer) using `logos`
//! - Top-level parser with error recovery: rules with opaque bodies,
//!   at-rules kept byte-verbatim
//! - Lexical selector utilities (list splitting, token extraction)
//!
//! The parser never fails: malformed input produces recovery errors
//! alongside whatever structure could be salvaged. Deciding whether a sheet
//! is hopeless is the caller's concern.
//!
//! # Example
//!
//! ```
//! use css_parser::parse;
//!
//! let result = parse(".btn:hover { color: red }");
//! assert!(result.errors.is_empty());
//! assert_eq!(result.stylesheet.items.len(), 1);
//! ```

mod ast;
mod error;
mod lexer;
mod parser;
pub mod selector;

pub use ast::{AtRule, Item, Rule, Stylesheet};
pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Lexer, Token, TokenKind};

/// The result of parsing a stylesheet.
#[derive(Debug)]
pub struct ParseResult {
    /// The parsed stylesheet.
    pub stylesheet: Stylesheet,
    /// Any errors encountered and recovered from during parsing.
    pub errors: Vec<ParseError>,
}

/// Parses CSS source text into a stylesheet, recovering from errors where
/// possible and returning both the stylesheet and the errors encountered.
pub fn parse(source: &str) -> ParseResult {
    parser::Parser::new(source).parse()
}
