use std::path::PathBuf;

/// Failures outside the rules themselves: reading documents and word lists.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
