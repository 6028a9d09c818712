// File: src/report/highlight.rs
use crate::core::types::{Annotation, BiasCategory};

/// Background color and hover label for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: &'static str,
    pub label: &'static str,
}

/// Used for any category the palette does not list.
pub const DEFAULT_STYLE: Style = Style {
    color: "#ffffcc",
    label: "Bias",
};

/// Category to style lookup.
#[derive(Debug, Clone)]
pub struct Palette {
    styles: Vec<(BiasCategory, Style)>,
}

impl Palette {
    pub fn empty() -> Self {
        Self { styles: Vec::new() }
    }

    pub fn with(mut self, category: BiasCategory, style: Style) -> Self {
        self.styles.retain(|(c, _)| *c != category);
        self.styles.push((category, style));
        self
    }

    pub fn style_for(&self, category: BiasCategory) -> Style {
        self.styles
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, style)| *style)
            .unwrap_or(DEFAULT_STYLE)
    }
}

impl Default for Palette {
    fn default() -> Self {
        let style = |color, label| Style { color, label };
        Palette::empty()
            .with(BiasCategory::PoliticalLeft, style("#88e1f2", "🟦 Left Bias"))
            .with(BiasCategory::PoliticalRight, style("#ff9999", "🟥 Right Bias"))
            .with(BiasCategory::GenderFemale, style("#dda0dd", "💜 Female Bias"))
            .with(BiasCategory::GenderMale, style("#add8e6", "💙 Male Bias"))
            .with(BiasCategory::CulturalWestern, style("#c6efce", "🌍 Western Bias"))
            .with(BiasCategory::CulturalNonWestern, style("#ffc7ce", "🌏 Non-Western Bias"))
    }
}

/// Renders the annotated tokens as HTML with the default palette.
pub fn highlight(annotations: &[Annotation]) -> String {
    highlight_with(annotations, &Palette::default())
}

/// Joins all tokens with single spaces, wrapping biased ones in a colored
/// `span` whose title names the category.
pub fn highlight_with(annotations: &[Annotation], palette: &Palette) -> String {
    annotations
        .iter()
        .map(|annotation| {
            let word = escape_html(&annotation.token.text);
            match annotation.category {
                Some(category) => {
                    let style = palette.style_for(category);
                    format!(
                        "<span style='background-color:{}; padding:2px; border-radius:3px;' title='{}'>{}</span>",
                        style.color, style.label, word
                    )
                }
                None => word,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(super) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Token;

    fn annotation(text: &str, index: usize, category: Option<BiasCategory>) -> Annotation {
        Annotation {
            token: Token::new(text.to_string(), 0, text.len(), index),
            category,
        }
    }

    #[test]
    fn test_untagged_tokens_pass_through() {
        let annotations = vec![annotation("hello", 0, None), annotation("world", 1, None)];
        assert_eq!(highlight(&annotations), "hello world");
    }

    #[test]
    fn test_tagged_token_is_wrapped() {
        let annotations = vec![
            annotation("a", 0, None),
            annotation("strong", 1, Some(BiasCategory::GenderMale)),
        ];
        assert_eq!(
            highlight(&annotations),
            "a <span style='background-color:#add8e6; padding:2px; border-radius:3px;' title='💙 Male Bias'>strong</span>"
        );
    }

    #[test]
    fn test_missing_style_falls_back_to_default() {
        let palette = Palette::empty().with(
            BiasCategory::PoliticalLeft,
            Style { color: "#000000", label: "L" },
        );
        let html = highlight_with(&[annotation("tribal", 0, Some(BiasCategory::CulturalNonWestern))], &palette);
        assert!(html.contains("background-color:#ffffcc"));
        assert!(html.contains("title='Bias'"));
    }

    #[test]
    fn test_token_text_is_escaped() {
        let annotations = vec![annotation("<b>", 0, None), annotation("&", 1, None)];
        assert_eq!(highlight(&annotations), "&lt;b&gt; &amp;");
    }

    #[test]
    fn test_empty_annotations() {
        assert_eq!(highlight(&[]), "");
    }
}
