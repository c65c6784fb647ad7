//! Parse errors and their rendering.
//!
//! Parsing stops at the first error, so a failed compile carries exactly one
//! `ParseError`. Each error points at the byte span of the offending input.

mod printer;


use std::fmt;
use std::ops::Range;

pub use printer::DiagnosticsPrinter;

/// Byte range into the pattern source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Zero-width span at `offset`.
    pub fn empty(offset: u32) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start as u32, range.end as u32)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// What went wrong while parsing a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParseErrorKind {
    /// A `(` was never closed. Points at the `(`.
    UnmatchedParen,
    /// An atom was expected but the current input cannot start one.
    UnexpectedChar,
    /// Input remains after a complete top-level pattern.
    TrailingInput,
}

impl ParseErrorKind {
    /// Base message for this kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnmatchedParen => "missing closing `)`",
            Self::UnexpectedChar => "expected a character or `(`",
            Self::TrailingInput => "unexpected input after pattern",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UnmatchedParen => "unmatched paren",
            Self::UnexpectedChar => "unexpected char",
            Self::TrailingInput => "trailing input",
        };
        f.write_str(name)
    }
}

/// A pattern syntax error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} at offset {}", .message, .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self {
            kind,
            span,
            message: kind.fallback_message().to_string(),
        }
    }

    /// Replace the kind's default message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Byte offset of the offending character.
    pub fn offset(&self) -> usize {
        self.span.start as usize
    }

    pub fn printer<'s>(&self, source: &'s str) -> DiagnosticsPrinter<'_, 's> {
        DiagnosticsPrinter::new(self).source(source)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer(source).colored(colored).render()
    }
}
