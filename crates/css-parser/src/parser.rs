//! Lenient top-level CSS parser.
//!
//! The parser resolves a token stream into top-level rules and at-rules.
//! It recovers from malformed input by skipping to the next structural
//! token, so one broken declaration never aborts the rest of the sheet.
//! Unclosed blocks are closed at end of input.

use crate::ast::{AtRule, Item, Rule, Stylesheet};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::ParseResult;

/// The CSS parser.
pub struct Parser<'src> {
    /// The source being parsed.
    source: &'src str,
    /// The lexed tokens, including the trailing Eof.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
    /// Parse errors collected during recovery.
    errors: Vec<ParseError>,
    /// EOF token for when we're past the end.
    eof_token: Token,
}

impl<'src> Parser<'src> {
    /// Creates a new parser.
    pub fn new(source: &'src str) -> Self {
        let tokens: Vec<Token> = Lexer::new(source).collect();
        let eof_token = Token {
            kind: TokenKind::Eof,
            span: source.len()..source.len(),
        };
        Self {
            source,
            tokens,
            pos: 0,
            errors: Vec::new(),
            eof_token,
        }
    }

    /// Parses the source into a stylesheet.
    pub fn parse(mut self) -> ParseResult {
        let mut items = Vec::new();

        loop {
            match self.current_kind() {
                TokenKind::Eof => break,
                TokenKind::Comment => self.advance(),
                TokenKind::Semicolon => self.advance(),
                TokenKind::Text if self.current_text().trim().is_empty() => self.advance(),
                TokenKind::RBrace => {
                    self.error(ParseErrorKind::UnexpectedCloseBrace);
                    self.advance();
                }
                TokenKind::LBrace => {
                    self.error(ParseErrorKind::MissingSelector);
                    self.advance();
                    self.skip_block(1);
                }
                TokenKind::AtKeyword => {
                    if let Some(at_rule) = self.parse_at_rule() {
                        items.push(Item::AtRule(at_rule));
                    }
                }
                _ => {
                    if let Some(rule) = self.parse_rule() {
                        items.push(Item::Rule(rule));
                    }
                }
            }
        }

        ParseResult {
            stylesheet: Stylesheet { items },
            errors: self.errors,
        }
    }

    // === Token helpers ===

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof_token)
    }

    fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    fn current_text(&self) -> &'src str {
        let span = self.current().span.clone();
        &self.source[span]
    }

    fn current_start(&self) -> usize {
        self.current().span.start
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn error(&mut self, kind: ParseErrorKind) {
        self.errors.push(ParseError::new(kind, self.current_start()));
    }

    // === Items ===

    /// Parses a style rule: a prelude up to `{`, then an opaque body up to
    /// the matching `}`.
    fn parse_rule(&mut self) -> Option<Rule> {
        let prelude_start = self.current_start();

        loop {
            match self.current_kind() {
                TokenKind::LBrace => break,
                TokenKind::Eof | TokenKind::Semicolon => {
                    // A prelude that never reached a block is discarded.
                    let prelude = self.source[prelude_start..self.current_start()]
                        .trim()
                        .to_string();
                    self.error(ParseErrorKind::MissingBlock { prelude });
                    self.advance();
                    return None;
                }
                TokenKind::RBrace => {
                    let prelude = self.source[prelude_start..self.current_start()]
                        .trim()
                        .to_string();
                    self.error(ParseErrorKind::MissingBlock { prelude });
                    // Leave the '}' for the top-level loop to report.
                    return None;
                }
                _ => self.advance(),
            }
        }

        let selector = self.source[prelude_start..self.current_start()]
            .trim()
            .to_string();
        self.advance(); // past '{'

        let body_start = self.current_start();
        let body_end = self.consume_block_body();
        let body = self.source[body_start..body_end].trim().to_string();

        if selector.is_empty() {
            return None;
        }
        Some(Rule { selector, body })
    }

    /// Parses an at-rule, keeping its full source text verbatim.
    fn parse_at_rule(&mut self) -> Option<AtRule> {
        let start = self.current_start();
        let name = self.current_text()[1..].to_string();
        self.advance();
        let params_start = self.current_start();

        loop {
            match self.current_kind() {
                TokenKind::Semicolon => {
                    let params = self.source[params_start..self.current_start()]
                        .trim()
                        .to_string();
                    let end = self.current().span.end;
                    self.advance();
                    return Some(AtRule {
                        name,
                        params,
                        raw: self.source[start..end].to_string(),
                        has_block: false,
                    });
                }
                TokenKind::Eof => {
                    let params = self.source[params_start..].trim().to_string();
                    return Some(AtRule {
                        name,
                        params,
                        raw: self.source[start..].to_string(),
                        has_block: false,
                    });
                }
                TokenKind::LBrace => {
                    let params = self.source[params_start..self.current_start()]
                        .trim()
                        .to_string();
                    self.advance(); // past '{'
                    let (end, unclosed_depth) = self.consume_block_raw();
                    let mut raw = self.source[start..end].to_string();
                    for _ in 0..unclosed_depth {
                        raw.push('}');
                    }
                    return Some(AtRule {
                        name,
                        params,
                        raw,
                        has_block: true,
                    });
                }
                _ => self.advance(),
            }
        }
    }

    /// Consumes a rule body after its `{`, returning the byte offset just
    /// before the closing `}` (or end of input for an unclosed block).
    fn consume_block_body(&mut self) -> usize {
        let mut depth = 1usize;
        loop {
            match self.current_kind() {
                TokenKind::LBrace => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RBrace => {
                    depth -= 1;
                    let end = self.current_start();
                    self.advance();
                    if depth == 0 {
                        return end;
                    }
                }
                TokenKind::Eof => {
                    self.error(ParseErrorKind::UnclosedBlock);
                    return self.source.len();
                }
                _ => self.advance(),
            }
        }
    }

    /// Consumes a block after its `{` for verbatim capture, returning the
    /// byte offset just past the closing `}` and how many braces were still
    /// open at end of input.
    fn consume_block_raw(&mut self) -> (usize, usize) {
        let mut depth = 1usize;
        loop {
            match self.current_kind() {
                TokenKind::LBrace => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RBrace => {
                    depth -= 1;
                    let end = self.current().span.end;
                    self.advance();
                    if depth == 0 {
                        return (end, 0);
                    }
                }
                TokenKind::Eof => {
                    self.error(ParseErrorKind::UnclosedBlock);
                    return (self.source.len(), depth);
                }
                _ => self.advance(),
            }
        }
    }

    /// Skips a balanced block, used when discarding garbage.
    fn skip_block(&mut self, mut depth: usize) {
        while depth > 0 {
            match self.current_kind() {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth -= 1,
                TokenKind::Eof => return,
                _ => {}
            }
            self.advance();
        }
    }
}
