//! Bundled guide content standing in for the guide-content service.
//!
//! The real deployment fetches guide HTML by slug from an external service;
//! the interface here is the same opaque `fetch(slug) -> html` shape, backed
//! by guides bundled at compile time.

use crate::articles::Article;

const CIT_GENERAL_GUIDE: &str = include_str!("../content/cit-general-guide.html");
const SMALL_BUSINESS_RELIEF: &str = include_str!("../content/small-business-relief.html");

/// Looks up guide HTML by slug.
pub fn fetch(slug: &str) -> Option<&'static str> {
    match slug {
        "cit-general-guide" => Some(CIT_GENERAL_GUIDE),
        "small-business-relief" => Some(SMALL_BUSINESS_RELIEF),
        _ => None,
    }
}

/// The guide catalogue shown on the home and search pages.
pub fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            title: "Corporate Tax General Guide".to_string(),
            guide_type: "GUIDE - Federal Tax Authority Guide".to_string(),
            year: Some(2023),
            slug: "cit-general-guide".to_string(),
        },
        Article {
            title: "Small Business Relief".to_string(),
            guide_type: "PC - Public Clarification".to_string(),
            year: Some(2023),
            slug: "small-business-relief".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalogue_entry_has_content() {
        for article in sample_articles() {
            assert!(fetch(&article.slug).is_some(), "no content for {}", article.slug);
        }
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(fetch("does-not-exist").is_none());
    }
}
