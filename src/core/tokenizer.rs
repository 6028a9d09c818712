// File: src/core/tokenizer.rs
use crate::config::TextConfig;
use crate::core::types::Token;
use unicode_segmentation::UnicodeSegmentation;

/// Possessive endings split off a word segment, longest first.
const POSSESSIVE_SUFFIXES: [&str; 4] = ["'s", "\u{2019}s", "'", "\u{2019}"];

/// Splits lowercased text on Unicode word boundaries.
///
/// Whitespace runs are dropped. Punctuation segments become tokens of
/// their own unless `keep_punctuation` is off, so "strong," yields
/// `strong` and `,` rather than one unmatched token. Possessive endings
/// are split off too: "patriot's" yields `patriot` and `'s`.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TextConfig,
}

impl Tokenizer {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let normalized = text.to_lowercase();
        let mut tokens = Vec::new();

        for (start, segment) in normalized.split_word_bound_indices() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }
            let (word, suffix) = split_possessive(segment);
            self.push_token(&mut tokens, word, start);
            if !suffix.is_empty() {
                self.push_token(&mut tokens, suffix, start + word.len());
            }
        }

        tokens
    }

    fn push_token(&self, tokens: &mut Vec<Token>, piece: &str, start: usize) {
        if !self.config.keep_punctuation && !piece.chars().any(char::is_alphanumeric) {
            return;
        }
        let index = tokens.len();
        tokens.push(Token::new(piece.to_string(), start, start + piece.len(), index));
    }

    /// True when `word` comes out of tokenization as exactly itself, i.e. a
    /// lexicon keyword that a token can actually equal.
    pub fn is_single_token(&self, word: &str) -> bool {
        let tokens = self.tokenize(word);
        tokens.len() == 1 && tokens[0].text == word
    }

    pub fn tokenize_to_strings(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.text).collect()
    }
}

/// Splits a word segment into its stem and a possessive ending, if any.
fn split_possessive(segment: &str) -> (&str, &str) {
    for suffix in POSSESSIVE_SUFFIXES {
        if let Some(stem) = segment.strip_suffix(suffix) {
            if stem.chars().any(char::is_alphanumeric) {
                return segment.split_at(stem.len());
            }
        }
    }
    (segment, "")
}
