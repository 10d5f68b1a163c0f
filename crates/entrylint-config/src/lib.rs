use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Project-level config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".entrylint.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config file not found at {config_path}")]
    ConfigNotFound { config_path: PathBuf },

    #[error("Invalid file pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glob patterns linted when no files are given on the command line.
    pub files: Vec<String>,
    /// Extra words accepted as a description's first word.
    pub identifiers: Vec<String>,
    /// File of extra words, one per line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifiers_file: Option<PathBuf>,
    /// Skip lists up to the end of a `Contents` section.
    pub respect_contents: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: vec!["README.md".to_string()],
            identifiers: Vec::new(),
            identifiers_file: None,
            respect_contents: true,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.identifiers_file = config
            .identifiers_file
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    /// Finds the config that applies in `dir`.
    ///
    /// An explicit path must exist. Otherwise `dir/.entrylint.toml` is tried,
    /// then the user config, and defaults are used when neither exists.
    pub fn discover(dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(config_path) = explicit {
            return Self::load_from_path(config_path)?.ok_or_else(|| {
                ConfigError::ConfigNotFound {
                    config_path: config_path.to_path_buf(),
                }
            });
        }

        for config_path in [dir.join(LOCAL_CONFIG_FILE), Self::config_path()] {
            if let Some(config) = Self::load_from_path(&config_path)? {
                log::debug!("Loaded config from {}", config_path.display());
                return Ok(config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/entrylint");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `files` relative to `base`, in pattern order without duplicates.
    ///
    /// A plain file name that matches nothing is kept as is so the caller
    /// can report it as unreadable.
    pub fn resolve_files(&self, base: &Path) -> Result<Vec<PathBuf>, ConfigError> {
        let prefix = glob::Pattern::escape(&base.to_string_lossy());
        let mut resolved: Vec<PathBuf> = Vec::new();

        for pattern in &self.files {
            let full = if prefix.is_empty() || Path::new(pattern).is_absolute() {
                pattern.clone()
            } else {
                format!("{}/{}", prefix.trim_end_matches('/'), pattern)
            };

            let paths = glob::glob(&full).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;

            let mut matched = false;
            for entry in paths {
                match entry {
                    Ok(path) => {
                        matched = true;
                        if !resolved.contains(&path) {
                            resolved.push(path);
                        }
                    }
                    Err(e) => log::warn!("Skipping {}: {}", e.path().display(), e.error()),
                }
            }

            if !matched && !has_glob_syntax(pattern) {
                let path = base.join(pattern);
                if !resolved.contains(&path) {
                    resolved.push(path);
                }
            }
        }

        Ok(resolved)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

fn has_glob_syntax(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
