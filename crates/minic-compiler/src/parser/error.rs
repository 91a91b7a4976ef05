//! Syntax error type and rendering.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::span::Span;

/// A fatal syntax error: location plus human-readable message.
///
/// The parser raises at the first fault; there is no recovery, so one
/// error describes the whole failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SyntaxError {
    pub span: Span,
    pub message: String,
}

impl SyntaxError {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    pub fn at_offset(offset: u32, message: impl Into<String>) -> Self {
        Self::new(Span::empty(offset), message)
    }

    /// Render against the source using annotate-snippets, yielding the
    /// line/column annotated report.
    pub fn render(&self, source: &str, path: Option<&str>) -> String {
        render_error(source, self, path)
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            self.span.start, self.span.end, self.message
        )
    }
}

impl std::error::Error for SyntaxError {}

/// Render a syntax error with a source snippet.
pub fn render_error(source: &str, err: &SyntaxError, path: Option<&str>) -> String {
    let start = err.span.start as usize;
    let end = err.span.end as usize;
    // For zero-width spans, extend to at least 1 char for visibility
    let end = if start == end {
        (start + 1).min(source.len())
    } else {
        end
    };

    let mut snippet = Snippet::source(source)
        .line_start(1)
        .annotation(AnnotationKind::Primary.span(start..end).label(&err.message));

    if let Some(p) = path {
        snippet = snippet.path(p);
    }

    let report = [Level::ERROR.primary_title(&err.message).element(snippet)];
    Renderer::plain().render(&report).to_string()
}
