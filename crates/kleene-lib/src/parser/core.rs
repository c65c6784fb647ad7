//! Parser state and low-level token operations.

use super::lexer::{Token, TokenKind, token_text};
use crate::diagnostics::{ParseError, ParseErrorKind, Span};
use crate::graph::{Fragment, StateGraph};
use crate::{Error, Result};

/// Recursive-descent parser that grows a `StateGraph` as it goes.
///
/// All cursor state lives in this value, so independent parses never share
/// anything mutable.
pub struct Parser<'src, 'g> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) graph: &'g mut StateGraph,
    pub(super) depth: u32,
    recursion_fuel_limit: Option<u32>,
}

impl<'src, 'g> Parser<'src, 'g> {
    pub fn new(source: &'src str, tokens: Vec<Token>, graph: &'g mut StateGraph) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            graph,
            depth: 0,
            recursion_fuel_limit: None,
        }
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Parse the whole source into one fragment of the graph.
    ///
    /// The empty pattern yields a single state with no edges.
    pub fn parse(mut self) -> Result<Fragment> {
        if self.eof() {
            return Ok(self.graph.empty_fragment());
        }

        let fragment = self.parse_alternation()?;

        if let Some(token) = self.current_token() {
            let message = match token.kind {
                TokenKind::ParenClose => "unmatched `)`".to_string(),
                _ => ParseErrorKind::TrailingInput.fallback_message().to_string(),
            };
            return Err(self.error(ParseErrorKind::TrailingInput, token.span, message));
        }

        Ok(fragment)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn current_token(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    pub(super) fn current(&self) -> Option<TokenKind> {
        self.current_token().map(|t| t.kind)
    }

    pub(super) fn currently_is(&self, kind: TokenKind) -> bool {
        self.current() == Some(kind)
    }

    /// Span of the current token, or an empty span at end of input.
    pub(super) fn current_span(&self) -> Span {
        self.current_token()
            .map_or_else(|| Span::empty(self.source.len() as u32), |t| t.span)
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.current_token()
            .map_or("", |t| token_text(self.source, &t))
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: TokenKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn error(
        &self,
        kind: ParseErrorKind,
        span: Span,
        message: impl Into<String>,
    ) -> Error {
        Error::Parse(ParseError::new(kind, span).with_message(message))
    }

    pub(super) fn enter_recursion(&mut self) -> Result<()> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
