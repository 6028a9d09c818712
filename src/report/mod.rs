//! Pure consumers of classifier output: highlighted markup, summary table
//! and word frequencies.

mod frequency;
mod highlight;
mod summary;

pub use frequency::{word_frequency, WordFrequency};
pub use highlight::{highlight, highlight_with, Palette, Style, DEFAULT_STYLE};
pub use summary::{summarize, SummaryRow};

use crate::core::lexicon::Lexicon;
use crate::core::types::Analysis;
use crate::error::Result;
use serde::Serialize;

/// An analysis together with every view derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub analysis: Analysis,
    pub highlighted: String,
    pub summary: Vec<SummaryRow>,
    pub word_frequency: Vec<WordFrequency>,
}

impl Report {
    pub fn build(analysis: Analysis, lexicon: &Lexicon) -> Result<Self> {
        let summary = summarize(&analysis.counts, lexicon)?;
        Ok(Self {
            highlighted: highlight(&analysis.annotations),
            word_frequency: word_frequency(&analysis.biased_words),
            summary,
            analysis,
        })
    }
}

/// A standalone HTML page with one highlighted section and summary table
/// per named report.
pub fn html_page(title: &str, sections: &[(&str, &Report)]) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n</head>\n<body>\n", highlight::escape_html(title)));
    page.push_str(&format!("<h1>{}</h1>\n", highlight::escape_html(title)));

    for (name, report) in sections {
        page.push_str(&format!("<h2>{}</h2>\n", highlight::escape_html(name)));
        page.push_str(&format!("<p>{}</p>\n", report.highlighted));

        if report.summary.is_empty() {
            page.push_str("<p>No bias-indicative words detected.</p>\n");
            continue;
        }
        page.push_str("<table>\n<tr><th>Bias Category</th><th>Explanation</th><th>Detected Words</th></tr>\n");
        for row in &report.summary {
            page.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                highlight::escape_html(&row.title),
                highlight::escape_html(&row.explanation),
                row.count
            ));
        }
        page.push_str("</table>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::BiasClassifier;

    #[test]
    fn test_report_views_agree() {
        let classifier = BiasClassifier::default();
        let report = Report::build(
            classifier.analyze("Bossy, bossy and dramatic"),
            classifier.lexicon(),
        )
        .unwrap();

        assert_eq!(report.summary.len(), 1);
        assert_eq!(report.summary[0].count, 3);
        assert_eq!(report.word_frequency[0].word, "bossy");
        assert_eq!(report.word_frequency[0].count, 2);
        assert_eq!(report.highlighted.matches("<span").count(), 3);
    }

    #[test]
    fn test_html_page_sections() {
        let classifier = BiasClassifier::default();
        let biased = Report::build(classifier.analyze("a woke patriot"), classifier.lexicon()).unwrap();
        let clean = Report::build(classifier.analyze("plain words"), classifier.lexicon()).unwrap();

        let page = html_page("News <check>", &[("first.txt", &biased), ("second.txt", &clean)]);
        assert!(page.contains("<title>News &lt;check&gt;</title>"));
        assert!(page.contains("<h2>first.txt</h2>"));
        assert!(page.contains("<td>Political Right</td>"));
        assert!(page.contains("No bias-indicative words detected."));
        assert!(page.ends_with("</html>\n"));
    }
}
