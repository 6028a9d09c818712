use crate::config::TextConfig;
use crate::core::lexicon::Lexicon;
use crate::core::tokenizer::Tokenizer;
use crate::core::types::{Analysis, Annotation, BiasCounts};
use log::debug;

// The classifier is composed of the lexicon and the tokenizer. Neither is
// mutated after construction, so one instance can serve any number of
// threads at once.
#[derive(Debug, Clone, Default)]
pub struct BiasClassifier {
    lexicon: Lexicon,
    tokenizer: Tokenizer,
}

impl BiasClassifier {
    pub fn new(lexicon: Lexicon, text_config: TextConfig) -> Self {
        Self {
            lexicon,
            tokenizer: Tokenizer::new(text_config),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tags every token with the first matching category and tallies the
    /// matches. Never fails: text without matches yields empty counts.
    pub fn analyze(&self, text: &str) -> Analysis {
        let tokens = self.tokenizer.tokenize(text);

        let mut counts = BiasCounts::new();
        let mut biased_words = Vec::new();
        let mut annotations = Vec::with_capacity(tokens.len());

        for token in tokens {
            let category = self.lexicon.classify(&token.text);
            if let Some(category) = category {
                *counts.entry(category).or_insert(0) += 1;
                biased_words.push(token.text.clone());
            }
            annotations.push(Annotation { token, category });
        }

        debug!(
            "Analyzed {} tokens: {} biased across {} categories",
            annotations.len(),
            biased_words.len(),
            counts.len()
        );

        Analysis {
            counts,
            annotations,
            biased_words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lexicon::LexiconEntry;
    use crate::core::types::BiasCategory;

    fn small_lexicon() -> Lexicon {
        Lexicon::new(vec![
            LexiconEntry::new(BiasCategory::PoliticalLeft, "left", &["progressive", "liberal"]),
            LexiconEntry::new(BiasCategory::GenderMale, "male", &["strong"]),
            LexiconEntry::new(BiasCategory::CulturalWestern, "west", &["progressive", "modern"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_progressive_leader_example() {
        let classifier = BiasClassifier::new(small_lexicon(), TextConfig::default());
        let analysis = classifier.analyze("The progressive leader is strong");

        let tags: Vec<(&str, Option<BiasCategory>)> = analysis
            .annotations
            .iter()
            .map(|a| (a.token.text.as_str(), a.category))
            .collect();
        assert_eq!(
            tags,
            vec![
                ("the", None),
                ("progressive", Some(BiasCategory::PoliticalLeft)),
                ("leader", None),
                ("is", None),
                ("strong", Some(BiasCategory::GenderMale)),
            ]
        );

        let expected: BiasCounts =
            [(BiasCategory::PoliticalLeft, 1), (BiasCategory::GenderMale, 1)].into_iter().collect();
        assert_eq!(analysis.counts, expected);
        assert_eq!(analysis.biased_words, vec!["progressive", "strong"]);
    }

    #[test]
    fn test_first_match_wins() {
        let classifier = BiasClassifier::new(small_lexicon(), TextConfig::default());
        let analysis = classifier.analyze("progressive");
        assert_eq!(analysis.counts.len(), 1);
        assert_eq!(analysis.counts[&BiasCategory::PoliticalLeft], 1);
        assert!(!analysis.counts.contains_key(&BiasCategory::CulturalWestern));
    }

    #[test]
    fn test_builtin_lexicon_tags_leader_as_male() {
        let classifier = BiasClassifier::default();
        let analysis = classifier.analyze("The progressive leader is strong");
        assert_eq!(analysis.counts[&BiasCategory::GenderMale], 2);
        assert_eq!(analysis.biased_words, vec!["progressive", "leader", "strong"]);
    }

    #[test]
    fn test_possessives_are_tagged() {
        let classifier = BiasClassifier::default();
        for text in ["The patriot's speech", "The patriot\u{2019}s speech"] {
            let analysis = classifier.analyze(text);
            assert_eq!(analysis.biased_words, vec!["patriot"]);
            assert_eq!(analysis.counts[&BiasCategory::PoliticalRight], 1);
            assert_eq!(analysis.annotations.len(), 4);
            assert_eq!(analysis.annotations[2].category, None);
        }

        let analysis = classifier.analyze("the woke's views");
        assert_eq!(analysis.biased_words, vec!["woke"]);
        assert_eq!(analysis.counts[&BiasCategory::PoliticalLeft], 1);
    }

    #[test]
    fn test_hyphenated_keyword_never_matches() {
        let classifier = BiasClassifier::default();
        assert!(classifier.lexicon().classify("pro-life").is_some());
        assert!(classifier.analyze("pro-life").biased_words.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let analysis = BiasClassifier::default().analyze("");
        assert_eq!(analysis, Analysis::default());
        assert!(analysis.is_empty());
    }

    #[test]
    fn test_counts_agree_with_words_and_annotations() {
        let classifier = BiasClassifier::default();
        let analysis = classifier.analyze(
            "A strong, rational leader met an emotional and dramatic crowd. \
             Strong words, primitive claims, modern answers; strong again.",
        );
        let sum: usize = analysis.counts.values().sum();
        let tagged = analysis.annotations.iter().filter(|a| a.is_biased()).count();
        assert_eq!(sum, analysis.biased_words.len());
        assert_eq!(sum, tagged);
        assert_eq!(analysis.total_biased(), sum);
        assert_eq!(analysis.counts[&BiasCategory::GenderMale], 5);
        assert!(analysis.counts.values().all(|&count| count > 0));
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let classifier = BiasClassifier::default();
        let text = "Liberal and conservative voices, fearless and gentle.";
        assert_eq!(classifier.analyze(text), classifier.analyze(text));
    }

    #[test]
    fn test_one_annotation_per_token() {
        let classifier = BiasClassifier::default();
        let text = "Tribal? Superstitious! efficient, structured... ok";
        let tokens = classifier.tokenizer().tokenize(text);
        let analysis = classifier.analyze(text);
        assert_eq!(analysis.annotations.len(), tokens.len());
        for (annotation, token) in analysis.annotations.iter().zip(&tokens) {
            assert_eq!(&annotation.token, token);
        }
    }

    #[test]
    fn test_classifier_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BiasClassifier>();

        let classifier = BiasClassifier::default();
        let expected = classifier.analyze("woke patriot");
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(classifier.analyze("woke patriot"), expected));
            }
        });
    }
}
