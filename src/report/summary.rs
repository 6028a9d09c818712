// File: src/report/summary.rs
use crate::core::lexicon::Lexicon;
use crate::core::types::{BiasCategory, BiasCounts};
use crate::error::{BiasError, Result};
use serde::Serialize;

/// One row of the bias summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub category: BiasCategory,
    pub title: String,
    pub explanation: String,
    pub count: usize,
}

/// Builds one row per counted category, in priority order.
///
/// A counted category the lexicon cannot explain is a configuration error;
/// the row is never silently dropped.
pub fn summarize(counts: &BiasCounts, lexicon: &Lexicon) -> Result<Vec<SummaryRow>> {
    counts
        .iter()
        .map(|(&category, &count)| -> Result<SummaryRow> {
            let explanation = lexicon
                .explanation(category)
                .ok_or(BiasError::MissingExplanation(category))?;
            Ok(SummaryRow {
                category,
                title: category.title(),
                explanation: explanation.to_string(),
                count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lexicon::LexiconEntry;

    #[test]
    fn test_rows_follow_priority_order() {
        let counts: BiasCounts = [
            (BiasCategory::CulturalNonWestern, 2),
            (BiasCategory::PoliticalLeft, 1),
        ]
        .into_iter()
        .collect();

        let rows = summarize(&counts, &Lexicon::builtin()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, BiasCategory::PoliticalLeft);
        assert_eq!(rows[0].title, "Political Left");
        assert_eq!(rows[0].count, 1);
        assert_eq!(
            rows[0].explanation,
            "Words often associated with progressive or liberal ideologies."
        );
        assert_eq!(rows[1].title, "Cultural Non-Western");
        assert_eq!(rows[1].count, 2);
    }

    #[test]
    fn test_empty_counts() {
        assert!(summarize(&BiasCounts::new(), &Lexicon::builtin()).unwrap().is_empty());
    }

    #[test]
    fn test_unexplained_category_is_an_error() {
        let lexicon =
            Lexicon::new(vec![LexiconEntry::new(BiasCategory::GenderMale, "male", &["strong"])])
                .unwrap();
        let counts: BiasCounts = [(BiasCategory::GenderFemale, 1)].into_iter().collect();
        assert!(matches!(
            summarize(&counts, &lexicon),
            Err(BiasError::MissingExplanation(BiasCategory::GenderFemale))
        ));
    }
}
