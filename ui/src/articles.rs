//! Guide metadata and presentation helpers for the card grid.

use serde::{Deserialize, Serialize};

/// A guide as the content service describes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// Full guide type string, e.g. "GUIDE - Federal Tax Authority Guide".
    #[serde(rename = "type")]
    pub guide_type: String,
    pub year: Option<u16>,
    pub slug: String,
}

/// Tailwind classes keyed by guide type: left border accent and type badge.
pub struct TypeStyle {
    pub border: &'static str,
    pub badge: &'static str,
}

pub fn guide_type_style(guide_type: &str) -> TypeStyle {
    if guide_type.contains("Federal Tax Authority") {
        TypeStyle {
            border: "border-l-indigo-600",
            badge: "bg-indigo-50 text-indigo-700",
        }
    } else if guide_type.contains("Ministry of Finance") {
        TypeStyle {
            border: "border-l-green-700",
            badge: "bg-green-50 text-green-800",
        }
    } else if guide_type.contains("Public Clarification") {
        TypeStyle {
            border: "border-l-red-500",
            badge: "bg-red-50 text-red-700",
        }
    } else if guide_type.contains("User Manual") {
        TypeStyle {
            border: "border-l-orange-500",
            badge: "bg-orange-50 text-orange-700",
        }
    } else {
        TypeStyle {
            border: "border-l-gray-400",
            badge: "bg-gray-100 text-gray-600",
        }
    }
}

/// Short label for the type badge.
pub fn guide_type_label(guide_type: &str) -> &'static str {
    if guide_type.contains("Federal Tax Authority Guide") {
        "Guideline"
    } else if guide_type.contains("Public Clarification") {
        "PC"
    } else if guide_type.contains("User Manual") {
        "Manual"
    } else {
        "Guide"
    }
}

/// Truncates a title for card display, counting only visible characters.
///
/// Titles can carry markup (e.g. a linked decision name); tags are dropped
/// entirely here since cards show plain text.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    let mut visible = String::new();
    let mut in_tag = false;
    for ch in title.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => visible.push(c),
            _ => {}
        }
    }
    if visible.chars().count() <= max_chars {
        visible
    } else {
        let mut out: String = visible.chars().take(max_chars).collect();
        out.push_str("...");
        out
    }
}

/// Case-insensitive filter over title and guide type, for the search page.
pub fn filter_articles(articles: &[Article], query: &str) -> Vec<Article> {
    if query.is_empty() {
        return articles.to_vec();
    }
    let query = query.to_lowercase();
    articles
        .iter()
        .filter(|article| {
            article.title.to_lowercase().contains(&query)
                || article.guide_type.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, guide_type: &str) -> Article {
        Article {
            title: title.to_string(),
            guide_type: guide_type.to_string(),
            year: Some(2023),
            slug: "test-slug".to_string(),
        }
    }

    #[test]
    fn truncation_ignores_markup_when_counting() {
        let title = "Article 26 - <a href='/x'>Transfers Within a Group</a>";
        assert_eq!(
            truncate_title(title, 20),
            "Article 26 - Transfe..."
        );
    }

    #[test]
    fn short_titles_pass_through() {
        assert_eq!(truncate_title("CIT Guide", 120), "CIT Guide");
    }

    #[test]
    fn type_labels() {
        assert_eq!(
            guide_type_label("GUIDE - Federal Tax Authority Guide"),
            "Guideline"
        );
        assert_eq!(guide_type_label("PC - Public Clarification"), "PC");
        assert_eq!(guide_type_label("MANUAL - User Manual"), "Manual");
        assert_eq!(guide_type_label("something else"), "Guide");
    }

    #[test]
    fn filtering_is_case_insensitive_over_title_and_type() {
        let articles = vec![
            article("Corporate Tax Guide", "GUIDE - Federal Tax Authority Guide"),
            article("VAT Refunds", "PC - Public Clarification"),
        ];
        assert_eq!(filter_articles(&articles, "corporate").len(), 1);
        assert_eq!(filter_articles(&articles, "CLARIFICATION").len(), 1);
        assert_eq!(filter_articles(&articles, "").len(), 2);
        assert_eq!(filter_articles(&articles, "zzz").len(), 0);
    }
}
