use serde::Serialize;

use crate::{
    rules::{Violation, ViolationKind},
    tree::Span,
};

/// One reported problem with a list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: ViolationKind,
    pub message: String,
    #[serde(skip)]
    pub span: Span,
    /// 1-based line of the offending node.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Diagnostic {
    pub fn from_violation(violation: Violation, index: &LineIndex) -> Self {
        let (line, column) = index.position(violation.span.start);
        Self {
            kind: violation.kind,
            message: violation.kind.to_string(),
            span: violation.span,
            line,
            column,
        }
    }
}

/// Receives diagnostics as entries fail, in document order.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Maps byte offsets of a source text to line and column numbers.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    /// 1-based `(line, column)` of `offset`. Offsets past the end clamp to it.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let start = self.line_starts[line];
        let column = self
            .source
            .get(start..offset)
            .map_or(offset - start, |prefix| prefix.chars().count());
        (line + 1, column + 1)
    }
}
