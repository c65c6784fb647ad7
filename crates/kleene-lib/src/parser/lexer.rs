//! Lexer for the pattern language.
//!
//! Produces span-based tokens without storing text; text is sliced from the
//! source only when the parser needs the character behind a token.
//!
//! ## Error handling
//!
//! The only input Logos cannot recognize is a backslash with nothing after
//! it. Consecutive errors are coalesced into a single `Garbage` token, which
//! the parser then rejects as a non-atom.

use logos::Logos;

use crate::diagnostics::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("|")]
    Pipe,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    /// Backslash plus the character it makes literal.
    #[regex(r"\\(.|\n)")]
    Escape,

    /// Any character that is not a metacharacter.
    #[regex(r"[^()|*+?\\]")]
    Char,

    /// Coalesced unrecognized input.
    Garbage,
}

impl TokenKind {
    /// Postfix quantifier tokens.
    pub fn is_postfix(self) -> bool {
        matches!(self, Self::Star | Self::Plus | Self::Question)
    }

    /// Tokens that can begin an atom.
    pub fn starts_atom(self) -> bool {
        matches!(self, Self::ParenOpen | Self::Escape | Self::Char)
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes source into a vector of span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(source.len());
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, Span::from(start..end)));
                }
                tokens.push(Token::new(kind, Span::from(lexer.span())));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        Span::from(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[token.span.range()]
}
