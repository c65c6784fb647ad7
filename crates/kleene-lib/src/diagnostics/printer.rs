//! Builder-pattern printer for rendering parse errors.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::{ParseError, Span};

/// Builder for rendering a parse error with various options.
pub struct DiagnosticsPrinter<'e, 's> {
    error: &'e ParseError,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> DiagnosticsPrinter<'e, 's> {
    pub fn new(error: &'e ParseError) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let err = self.error;
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(err.span, source.len()))
                .label(&err.message),
        );

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&err.message).element(snippet)];

        write!(w, "{}", renderer.render(&report))
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        write!(
            w,
            "error at {}: {}",
            self.error.span.start, self.error.message
        )
    }
}

/// Widen zero-width spans to one character so the caret has something to point at.
fn adjust_range(span: Span, limit: usize) -> std::ops::Range<usize> {
    let range = span.range();

    if range.is_empty() {
        return range.start..(range.start + 1).min(limit);
    }

    range
}
