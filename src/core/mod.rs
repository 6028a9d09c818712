// src/core/mod.rs
pub mod classifier;
pub mod lexicon;
pub mod tokenizer;
pub mod types;
