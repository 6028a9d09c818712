// File: src/core/lexicon.rs
use crate::core::tokenizer::Tokenizer;
use crate::core::types::BiasCategory;
use crate::error::{BiasError, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// One category's keyword list and explanation, as stored in lexicon files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub category: BiasCategory,
    pub explanation: String,
    pub keywords: Vec<String>,
}

impl LexiconEntry {
    pub fn new(category: BiasCategory, explanation: &str, keywords: &[&str]) -> Self {
        Self {
            category,
            explanation: explanation.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// The immutable registry of bias categories.
///
/// Built once at startup and shared by reference. Lookups go through a
/// keyword index in which every word maps to the highest priority category
/// that lists it, so classification is a single hash probe per token.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Registered entries in priority order, keywords normalized.
    entries: Vec<LexiconEntry>,
    keyword_sets: BTreeMap<BiasCategory, HashSet<String>>,
    index: HashMap<String, BiasCategory>,
}

impl Lexicon {
    /// Validates and builds a lexicon from the given entries.
    ///
    /// Entries may be supplied in any order; match priority always follows
    /// the declaration order of [`BiasCategory`].
    pub fn new(entries: Vec<LexiconEntry>) -> Result<Self> {
        validate(&entries)?;
        Ok(Self::from_validated(entries))
    }

    /// The built-in political, gender and cultural word lists.
    pub fn builtin() -> Self {
        Self::from_validated(builtin_entries())
    }

    fn from_validated(mut entries: Vec<LexiconEntry>) -> Self {
        entries.sort_by_key(|entry| entry.category);

        let mut keyword_sets = BTreeMap::new();
        let mut index: HashMap<String, BiasCategory> = HashMap::new();
        let tokenizer = Tokenizer::default();

        for entry in entries.iter_mut() {
            let mut seen = HashSet::new();
            entry.keywords = entry
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .filter(|k| seen.insert(k.clone()))
                .collect();

            for keyword in &entry.keywords {
                if !tokenizer.is_single_token(keyword) {
                    debug!(
                        "Keyword '{}' in {} is split by the tokenizer and will never match a single token",
                        keyword, entry.category
                    );
                }
                // Entries are sorted, so an existing mapping always has higher priority.
                if let Some(&earlier) = index.get(keyword) {
                    warn!(
                        "Keyword '{}' is listed under both {} and {}; {} wins",
                        keyword, earlier, entry.category, earlier
                    );
                } else {
                    index.insert(keyword.clone(), entry.category);
                }
            }

            keyword_sets.insert(entry.category, seen);
            debug!("Registered {} with {} keywords", entry.category, entry.keywords.len());
        }

        Self { entries, keyword_sets, index }
    }

    /// Registered categories in match priority order.
    pub fn categories(&self) -> Vec<BiasCategory> {
        self.entries.iter().map(|entry| entry.category).collect()
    }

    pub fn keywords(&self, category: BiasCategory) -> Option<&HashSet<String>> {
        self.keyword_sets.get(&category)
    }

    pub fn explanation(&self, category: BiasCategory) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.explanation.as_str())
    }

    /// Returns the first category, in priority order, that lists `word`.
    pub fn classify(&self, word: &str) -> Option<BiasCategory> {
        self.index.get(word).copied()
    }

    /// The normalized entries, in priority order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Keywords no token can equal because tokenization splits them, such as
    /// "law and order" or "pro-life". They stay in the keyword sets.
    pub fn unmatchable_keywords(&self) -> Vec<(BiasCategory, &str)> {
        let tokenizer = Tokenizer::default();
        self.entries
            .iter()
            .flat_map(|entry| entry.keywords.iter().map(move |k| (entry.category, k.as_str())))
            .filter(|(_, keyword)| !tokenizer.is_single_token(keyword))
            .collect()
    }

    pub fn keyword_count(&self) -> usize {
        self.keyword_sets.values().map(HashSet::len).sum()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Checks the registry invariants: non-empty, one entry per category, and an
/// explanation for every registered category.
pub fn validate(entries: &[LexiconEntry]) -> Result<()> {
    if entries.is_empty() {
        return Err(BiasError::EmptyLexicon);
    }
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.category) {
            return Err(BiasError::DuplicateCategory(entry.category));
        }
        if entry.explanation.trim().is_empty() {
            return Err(BiasError::MissingExplanation(entry.category));
        }
    }
    Ok(())
}

pub fn builtin_entries() -> Vec<LexiconEntry> {
    vec![
        LexiconEntry::new(
            BiasCategory::PoliticalLeft,
            "Words often associated with progressive or liberal ideologies.",
            &[
                "progressive", "liberal", "woke", "inclusive", "socialist", "social justice",
                "anti-racist", "equity", "intersectional", "climate action", "defund",
                "safe space", "diversity", "inclusivity",
            ],
        ),
        LexiconEntry::new(
            BiasCategory::PoliticalRight,
            "Words often linked to conservative or traditionalist viewpoints.",
            &[
                "conservative", "patriot", "traditional", "freedom", "nationalist",
                "law and order", "pro-life", "traditional values", "tax relief",
                "border security", "anti-globalist", "gun rights", "family values",
                "christian nation",
            ],
        ),
        LexiconEntry::new(
            BiasCategory::GenderFemale,
            "Stereotypical terms commonly used to describe women, often unfairly.",
            &[
                "emotional", "hysterical", "bossy", "beautiful", "nurturing", "passive",
                "delicate", "dramatic", "vain", "weak", "flirtatious", "intuitive", "gentle",
                "dependent",
            ],
        ),
        LexiconEntry::new(
            BiasCategory::GenderMale,
            "Stereotypical traits associated with masculinity or male dominance.",
            &[
                "strong", "rational", "aggressive", "leader", "dominant", "unemotional",
                "stoic", "assertive", "breadwinner", "decisive", "fearless", "powerful",
                "logical", "rugged",
            ],
        ),
        LexiconEntry::new(
            BiasCategory::CulturalWestern,
            "Words praising Western customs or culture.",
            &[
                "civilized", "developed", "modern", "enlightened", "first-world", "advanced",
                "efficient", "global standard", "superior", "leading", "objective",
                "scientific", "structured",
            ],
        ),
        LexiconEntry::new(
            BiasCategory::CulturalNonWestern,
            "Words portraying non-Western traditions negatively.",
            &[
                "primitive", "tribal", "backward", "exotic", "undeveloped", "chaotic",
                "mystical", "superstitious", "barbaric", "inferior", "submissive", "corrupt",
                "authoritarian",
            ],
        ),
    ]
}
