// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod render;
pub mod report;

pub use crate::config::{Config, ReportConfig, TextConfig};
pub use crate::core::classifier::BiasClassifier;
pub use crate::core::lexicon::{Lexicon, LexiconEntry};
pub use crate::core::tokenizer::Tokenizer;
pub use crate::core::types::{Analysis, Annotation, BiasCategory, BiasCounts, Token};
pub use crate::error::{BiasError, Result};
pub use crate::report::Report;

/// Builds the classifier described by `config`: the lexicon file it names,
/// or the built-in lists.
pub fn classifier_from_config(config: &Config) -> Result<BiasClassifier> {
    let lexicon = match &config.lexicon_path {
        Some(path) => persistence::load_lexicon(path)?,
        None => Lexicon::builtin(),
    };
    Ok(BiasClassifier::new(lexicon, config.text.clone()))
}
