//! Semantic error type and rendering.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::span::Span;

/// A fatal semantic error raised by the translator: use of an undeclared
/// name, an unsupported construct, or a structurally impossible tree.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SemanticError {
    pub span: Span,
    pub message: String,
}

impl SemanticError {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Render against the source using annotate-snippets.
    pub fn render(&self, source: &str, path: Option<&str>) -> String {
        let start = self.span.start as usize;
        let end = self.span.end as usize;
        let end = if start == end {
            (start + 1).min(source.len())
        } else {
            end
        };

        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(start..end)
                .label(&self.message),
        );
        if let Some(p) = path {
            snippet = snippet.path(p);
        }

        let report = [Level::ERROR.primary_title(&self.message).element(snippet)];
        Renderer::plain().render(&report).to_string()
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            self.span.start, self.span.end, self.message
        )
    }
}

impl std::error::Error for SemanticError {}
