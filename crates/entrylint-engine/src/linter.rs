use std::path::Path;

use crate::{
    diagnostic::{Diagnostic, DiagnosticSink, LineIndex},
    error::LintError,
    rules::{RuleContext, validate_entry},
    scope::select_lists,
    text::{
        AbsoluteUrl, CaseClassifier, EmojiMatcher, IdentifierAllowList, Identifiers, UnicodeEmoji,
        UrlCheck, WordCaseClassifier,
    },
    tree::{Document, parse_markdown},
};

/// Validates the entries of every selected list in a document.
///
/// Each collaborator can be swapped; the defaults use the `url` crate for
/// URL syntax, Unicode emoji properties, letter-based casing and the
/// built-in identifier allow-list.
pub struct Linter {
    urls: Box<dyn UrlCheck>,
    emoji: Box<dyn EmojiMatcher>,
    casing: Box<dyn CaseClassifier>,
    identifiers: Box<dyn IdentifierAllowList>,
    respect_contents: bool,
}

impl Default for Linter {
    fn default() -> Self {
        Self {
            urls: Box::new(AbsoluteUrl),
            emoji: Box::new(UnicodeEmoji),
            casing: Box::new(WordCaseClassifier),
            identifiers: Box::new(Identifiers::default()),
            respect_contents: true,
        }
    }
}

impl Linter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifiers(mut self, identifiers: impl IdentifierAllowList + 'static) -> Self {
        self.identifiers = Box::new(identifiers);
        self
    }

    pub fn with_url_check(mut self, urls: impl UrlCheck + 'static) -> Self {
        self.urls = Box::new(urls);
        self
    }

    pub fn with_emoji_matcher(mut self, emoji: impl EmojiMatcher + 'static) -> Self {
        self.emoji = Box::new(emoji);
        self
    }

    pub fn with_case_classifier(mut self, casing: impl CaseClassifier + 'static) -> Self {
        self.casing = Box::new(casing);
        self
    }

    /// Whether a `Contents` heading limits validation to the lists after it.
    pub fn respect_contents(mut self, respect: bool) -> Self {
        self.respect_contents = respect;
        self
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext {
            urls: self.urls.as_ref(),
            emoji: self.emoji.as_ref(),
            casing: self.casing.as_ref(),
            identifiers: self.identifiers.as_ref(),
        }
    }

    /// Validates a parsed document, reporting at most one diagnostic per
    /// entry in document order. Returns the number of diagnostics reported.
    pub fn lint_document(
        &self,
        doc: &Document,
        index: &LineIndex<'_>,
        sink: &mut dyn DiagnosticSink,
    ) -> usize {
        let cx = self.context();
        let mut reported = 0;

        for list in select_lists(doc, self.respect_contents) {
            log::debug!(
                "validating list at bytes {}..{} with {} entries",
                list.span.start,
                list.span.end,
                list.items.len()
            );
            for item in &list.items {
                if let Err(violation) = validate_entry(&cx, item) {
                    sink.report(Diagnostic::from_violation(violation, index));
                    reported += 1;
                }
            }
        }

        reported
    }

    /// Parses and validates markdown source.
    pub fn lint_str(&self, source: &str) -> Vec<Diagnostic> {
        let doc = parse_markdown(source);
        let index = LineIndex::new(source);
        let mut diagnostics = Vec::new();
        self.lint_document(&doc, &index, &mut diagnostics);
        diagnostics
    }

    /// Reads and validates a markdown file.
    pub fn lint_file(&self, path: &Path) -> Result<Vec<Diagnostic>, LintError> {
        let source = std::fs::read_to_string(path).map_err(|source| LintError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let diagnostics = self.lint_str(&source);
        log::info!("{}: {} diagnostic(s)", path.display(), diagnostics.len());
        Ok(diagnostics)
    }
}
