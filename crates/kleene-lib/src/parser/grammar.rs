//! Grammar productions.
//!
//! ```text
//! Alternation   := Concatenation ('|' Concatenation)*
//! Concatenation := Quantified+
//! Quantified    := Atom Postfix*
//! Atom          := '(' Alternation ')' | '\' AnyChar | Char
//! Postfix       := '*' | '+' | '?'
//! ```
//!
//! Every production returns the `Fragment` it added to the graph.

use super::Parser;
use super::lexer::TokenKind;
use crate::Result;
use crate::diagnostics::ParseErrorKind;
use crate::graph::Fragment;

impl Parser<'_, '_> {
    pub(crate) fn parse_alternation(&mut self) -> Result<Fragment> {
        let mut alternatives = vec![self.parse_concatenation()?];

        while self.eat_token(TokenKind::Pipe) {
            alternatives.push(self.parse_concatenation()?);
        }

        Ok(self.graph.alternation(&alternatives))
    }

    /// Stops at end of input, `|` or `)`; the caller decides what those mean.
    fn parse_concatenation(&mut self) -> Result<Fragment> {
        let mut items = vec![self.parse_quantified()?];

        while !self.at_concatenation_end() {
            items.push(self.parse_quantified()?);
        }

        Ok(self.graph.concat(&items))
    }

    fn at_concatenation_end(&self) -> bool {
        matches!(
            self.current(),
            None | Some(TokenKind::Pipe) | Some(TokenKind::ParenClose)
        )
    }

    /// Postfixes apply left to right, each wrapping the fragment built so far.
    fn parse_quantified(&mut self) -> Result<Fragment> {
        let mut fragment = self.parse_atom()?;

        while let Some(kind) = self.current().filter(|k| k.is_postfix()) {
            fragment = match kind {
                TokenKind::Star => self.graph.zero_or_more(fragment),
                TokenKind::Plus => self.graph.one_or_more(fragment),
                TokenKind::Question => self.graph.zero_or_one(fragment),
                _ => unreachable!("filtered to postfix tokens"),
            };
            self.bump();
        }

        Ok(fragment)
    }

    fn parse_atom(&mut self) -> Result<Fragment> {
        match self.current() {
            Some(TokenKind::ParenOpen) => self.parse_group(),
            Some(TokenKind::Escape) => {
                let c = self.escaped_char();
                self.bump();
                Ok(self.graph.literal(c))
            }
            Some(TokenKind::Char) => {
                let c = self.literal_char();
                self.bump();
                Ok(self.graph.literal(c))
            }
            _ => Err(self.unexpected()),
        }
    }

    fn parse_group(&mut self) -> Result<Fragment> {
        let open = self.current_span();
        self.enter_recursion()?;
        self.bump();

        let inner = self.parse_alternation();
        self.exit_recursion();
        let inner = inner?;

        if !self.eat_token(TokenKind::ParenClose) {
            return Err(self.error(
                ParseErrorKind::UnmatchedParen,
                open,
                ParseErrorKind::UnmatchedParen.fallback_message(),
            ));
        }

        Ok(inner)
    }

    fn literal_char(&self) -> char {
        self.current_text()
            .chars()
            .next()
            .expect("char token holds one character")
    }

    fn escaped_char(&self) -> char {
        self.current_text()
            .chars()
            .nth(1)
            .expect("escape token holds a backslash and one character")
    }

    /// Error for a position where an atom was required.
    fn unexpected(&self) -> crate::Error {
        let span = self.current_span();
        let message = match self.current() {
            None => "unexpected end of pattern".to_string(),
            Some(kind) if kind.is_postfix() => {
                format!("`{}` has nothing to repeat", self.current_text())
            }
            Some(TokenKind::Garbage) => "`\\` must be followed by a character".to_string(),
            Some(_) => format!("expected a character or `(`, found `{}`", self.current_text()),
        };
        self.error(ParseErrorKind::UnexpectedChar, span, message)
    }
}
