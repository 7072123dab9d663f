//! Settings loaded from `design-patterns.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, Level};

use crate::{PatternError, Result};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_FILE: &str = "design-patterns.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Print a `=== Pattern (Variant) ===` line before each scenario
    pub headings: bool,
    /// Style headings with terminal colors
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            headings: true,
            color: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl LogSettings {
    /// Falls back to `WARN` when the configured name is not a level.
    pub fn level(&self) -> Level {
        self.level.parse().unwrap_or(Level::WARN)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputSettings,
    pub log: LogSettings,
}

impl Settings {
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| PatternError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents, path)
    }

    /// The explicit path wins; otherwise `design-patterns.toml` in `dir` if it exists.
    pub fn resolve_path(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let candidate = dir.join(DEFAULT_FILE);
        candidate.is_file().then_some(candidate)
    }

    /// Loads settings from the resolved file, or defaults when there is none.
    /// A missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let dir = std::env::current_dir()?;
        match Self::resolve_path(explicit, &dir) {
            Some(path) => {
                debug!(path = %path.display(), "loading settings");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.output.headings);
        assert!(settings.output.color);
        assert_eq!(settings.log.level(), Level::WARN);
        assert!(!settings.log.json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings =
            Settings::from_toml("[output]\ncolor = false\n", Path::new("x.toml")).unwrap();
        assert!(settings.output.headings);
        assert!(!settings.output.color);
        assert_eq!(settings.log, LogSettings::default());
    }

    #[test]
    fn test_level_names() {
        let mut log = LogSettings::default();
        log.level = "DEBUG".into();
        assert_eq!(log.level(), Level::DEBUG);
        log.level = "chatty".into();
        assert_eq!(log.level(), Level::WARN);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Settings::from_toml("[output\nheadings = 1", Path::new("bad.toml")).unwrap_err();
        match err {
            PatternError::Config { path, .. } => assert_eq!(path, Path::new("bad.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
