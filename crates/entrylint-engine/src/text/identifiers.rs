use std::{collections::HashSet, path::Path};

use crate::error::LintError;

/// Literal words exempt from the starting-casing rule.
pub trait IdentifierAllowList {
    fn contains(&self, word: &str) -> bool;
}

/// Well-known names whose canonical spelling starts lowercase or is
/// otherwise irregular.
const BUILTIN_IDENTIFIERS: &[&str] = &[
    "a11y", "aws", "bash", "bzip2", "cURL", "d3", "dApp", "dApps", "deno", "eBook", "eBooks",
    "eCommerce", "eslint", "esbuild", "ffmpeg", "gRPC", "git", "gulp", "htop", "i18n", "iCloud",
    "iMessage", "iOS", "iPad", "iPadOS", "iPhone", "iPod", "iTunes", "jq", "jQuery", "k8s",
    "kubectl", "l10n", "libuv", "macOS", "micro:bit", "mdast", "nginx", "npm", "npx", "pnpm",
    "rollup", "rust-analyzer", "tmux", "tvOS", "unified", "vim", "vscode", "watchOS", "webpack",
    "wget", "xkcd", "yarn", "zsh",
];

/// The identifier allow-list: built-in names plus any configured extras.
#[derive(Debug, Clone)]
pub struct Identifiers {
    words: HashSet<String>,
}

impl Default for Identifiers {
    fn default() -> Self {
        Self {
            words: BUILTIN_IDENTIFIERS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Identifiers {
    /// An allow-list with no words at all.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
    }

    /// Adds the words of a words file: one per line, `#` starts a comment.
    pub fn extend_from_str(&mut self, content: &str) {
        let words = content
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default().trim())
            .filter(|word| !word.is_empty())
            .map(str::to_string);
        self.words.extend(words);
    }

    pub fn extend_from_file(&mut self, path: &Path) -> Result<(), LintError> {
        let content = std::fs::read_to_string(path).map_err(|source| LintError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.extend_from_str(&content);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl IdentifierAllowList for Identifiers {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
