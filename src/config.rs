//! Configuration for the bias detector.

use crate::error::{BiasError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration, read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Custom lexicon file. Default: built-in word lists.
    pub lexicon_path: Option<PathBuf>,

    pub text: TextConfig,

    pub report: ReportConfig,
}

/// Tokenization options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Keep punctuation segments as tokens of their own.
    /// Default: true.
    pub keep_punctuation: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { keep_punctuation: true }
    }
}

/// Report rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of entries shown in the word frequency view.
    /// Default: 10.
    pub top_words: usize,

    /// Width in cells of the longest bar in the category chart.
    /// Default: 40.
    pub bar_width: usize,

    /// Colored terminal output.
    /// Default: true.
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_words: 10,
            bar_width: 40,
            color: true,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)
            .map_err(|e| BiasError::Config(format!("{}: {}", path.display(), e)))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads the file at `path`, or the default location when `path` is
    /// `None`. A missing default file is not an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_if_exists(Self::default_path().as_deref()),
        }
    }

    fn load_if_exists(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/bias-detector/config.json`
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("bias-detector");
        path.push("config.json");
        Some(path)
    }
}
