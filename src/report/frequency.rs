// File: src/report/frequency.rs
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Counts each biased word; most frequent first, ties broken alphabetically.
pub fn word_frequency(biased_words: &[String]) -> Vec<WordFrequency> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in biased_words {
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }

    let mut frequencies: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(word, count)| WordFrequency {
            word: word.to_string(),
            count,
        })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    frequencies
}
