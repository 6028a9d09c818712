// File: src/error.rs
//! Error types for the bias detector.

use crate::core::types::BiasCategory;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiasError {
    /// The lexicon registers no category at all.
    #[error("Lexicon is empty: at least one bias category must be registered")]
    EmptyLexicon,

    #[error("Bias category registered twice: {0}")]
    DuplicateCategory(BiasCategory),

    /// A category is registered (or counted) without an explanation.
    #[error("No explanation for bias category: {0}")]
    MissingExplanation(BiasCategory),

    #[error("Unknown bias category id: {0}")]
    UnknownCategory(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Another render call panicked while holding the output lock.
    #[error("Render lock poisoned")]
    RenderLockPoisoned,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, BiasError>;

impl From<bincode::Error> for BiasError {
    fn from(err: bincode::Error) -> Self {
        BiasError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for BiasError {
    fn from(err: serde_json::Error) -> Self {
        BiasError::Serialization(err.to_string())
    }
}
