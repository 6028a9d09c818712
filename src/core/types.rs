// src/core/types.rs
use crate::error::BiasError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The closed set of bias categories.
///
/// Declaration order is match priority: when a word appears in several
/// keyword sets, the category declared first wins. `Ord` is derived, so
/// ordered maps keyed by category iterate in this same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BiasCategory {
    #[serde(rename = "political_left")]
    PoliticalLeft,
    #[serde(rename = "political_right")]
    PoliticalRight,
    #[serde(rename = "gender_female")]
    GenderFemale,
    #[serde(rename = "gender_male")]
    GenderMale,
    #[serde(rename = "cultural_western")]
    CulturalWestern,
    #[serde(rename = "cultural_non-western")]
    CulturalNonWestern,
}

impl BiasCategory {
    /// Every category, in priority order.
    pub const ALL: [BiasCategory; 6] = [
        BiasCategory::PoliticalLeft,
        BiasCategory::PoliticalRight,
        BiasCategory::GenderFemale,
        BiasCategory::GenderMale,
        BiasCategory::CulturalWestern,
        BiasCategory::CulturalNonWestern,
    ];

    /// The stable string id used in lexicon files and reports.
    pub fn id(self) -> &'static str {
        match self {
            BiasCategory::PoliticalLeft => "political_left",
            BiasCategory::PoliticalRight => "political_right",
            BiasCategory::GenderFemale => "gender_female",
            BiasCategory::GenderMale => "gender_male",
            BiasCategory::CulturalWestern => "cultural_western",
            BiasCategory::CulturalNonWestern => "cultural_non-western",
        }
    }

    /// Human readable title, e.g. "Cultural Non-Western".
    pub fn title(self) -> String {
        self.id()
            .split('_')
            .map(|part| {
                part.split('-')
                    .map(capitalize)
                    .collect::<Vec<_>>()
                    .join("-")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for BiasCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BiasCategory {
    type Err = BiasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BiasCategory::ALL
            .iter()
            .copied()
            .find(|category| category.id() == s)
            .ok_or_else(|| BiasError::UnknownCategory(s.to_string()))
    }
}

/// A normalized word with its position in the lowercased text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Lowercased token text; also the surface form shown to the user.
    pub text: String,
    /// Byte offset of the first byte in the normalized text.
    pub start: usize,
    /// Byte offset one past the last byte in the normalized text.
    pub end: usize,
    /// Position of the token in the sequence.
    pub index: usize,
}

impl Token {
    pub fn new(text: String, start: usize, end: usize, index: usize) -> Self {
        Self { text, start, end, index }
    }
}

/// A token paired with the bias category it matched, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub token: Token,
    pub category: Option<BiasCategory>,
}

impl Annotation {
    pub fn is_biased(&self) -> bool {
        self.category.is_some()
    }
}

/// Per-category match counts. Sparse: categories without matches are absent.
pub type BiasCounts = BTreeMap<BiasCategory, usize>;

/// Everything a single `analyze` call produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub counts: BiasCounts,
    /// One annotation per token, in input order.
    pub annotations: Vec<Annotation>,
    /// Tagged token texts in input order, duplicates kept.
    pub biased_words: Vec<String>,
}

impl Analysis {
    pub fn total_biased(&self) -> usize {
        self.biased_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}
