//! Anchor classification: maps anchor attributes to a rewrite action.
//!
//! Classification is a pure function of the anchor's attributes, evaluated
//! in a fixed priority order (first match wins). The rendering layer
//! interprets the resulting [`AnchorAction`] into concrete markup and
//! event handlers, so the link rules stay testable without a browser.

use crate::tree::Node;

/// The attributes an anchor rule can depend on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnchorAttrs {
    pub href: Option<String>,
    pub name: Option<String>,
    pub class: Option<String>,
    pub id: Option<String>,
}

impl AnchorAttrs {
    pub fn from_attrs(attrs: &[(String, String)]) -> Self {
        let mut out = Self::default();
        for (key, value) in attrs {
            match key.as_str() {
                "href" => out.href = Some(value.clone()),
                "name" => out.name = Some(value.clone()),
                "class" => out.class = Some(value.clone()),
                "id" => out.id = Some(value.clone()),
                _ => {}
            }
        }
        out
    }
}

/// What the rendering layer should do with an anchor. One variant per rule.
#[derive(Clone, Debug, PartialEq)]
pub enum AnchorAction {
    /// Forward footnote reference: scroll the element with `target_id`
    /// into view instead of navigating.
    FootnoteRef { target_id: String },
    /// Footnote backlink: same scroll behavior, back to the reference.
    FootnoteBack { target_id: String },
    /// Section cross-reference: open the section in a new tab (forward
    /// URL in preview mode, current page URL otherwise).
    SectionRef { href: String },
    /// Bookmark definition: `name` becomes `id` so the scroll rules can
    /// find it.
    BookmarkTarget { id: String },
    /// External link: open in an isolated new tab.
    External { href: String },
    /// Anything else: href preserved as-is, `rel="noopener noreferrer"`
    /// added, no click interception.
    Passthrough { href: Option<String> },
}

/// Classifies an anchor. Rules are mutually exclusive and checked top to
/// bottom; the substring guards mirror the bookmark naming convention
/// (`bookmarkN` footnotes, `bookmarkbackN` backlinks, `bookmarkSectionX`
/// sections).
pub fn classify(anchor: &AnchorAttrs) -> AnchorAction {
    if let Some(href) = &anchor.href {
        if href.starts_with("#bookmark")
            && !href.contains("back")
            && !href.contains("Section")
        {
            return AnchorAction::FootnoteRef {
                target_id: href[1..].to_string(),
            };
        }
        if href.starts_with("#bookmarkback") {
            return AnchorAction::FootnoteBack {
                target_id: href[1..].to_string(),
            };
        }
        if href.contains("bookmarkSection") {
            return AnchorAction::SectionRef { href: href.clone() };
        }
    }
    if let Some(name) = &anchor.name {
        return AnchorAction::BookmarkTarget { id: name.clone() };
    }
    if let Some(href) = &anchor.href {
        if !href.starts_with('#') {
            return AnchorAction::External { href: href.clone() };
        }
    }
    AnchorAction::Passthrough {
        href: anchor.href.clone(),
    }
}

/// An anchor child as the rendering layer should reproduce it.
#[derive(Clone, Debug, PartialEq)]
pub enum AnchorChild {
    /// A highlight marker whose text must be re-wrapped in `<mark>`.
    Marked(String),
    /// Any other child, flattened to its text content.
    Plain(String),
}

/// Flattens anchor children for re-rendering. `mark` children keep their
/// marker; everything else contributes its full text content in document
/// order, so no text present in the sanitized input is dropped.
pub fn anchor_children(children: &[Node]) -> Vec<AnchorChild> {
    children
        .iter()
        .map(|child| match child {
            Node::Element { tag, .. } if tag == "mark" => {
                AnchorChild::Marked(child.text_content())
            }
            other => AnchorChild::Plain(other.text_content()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::parse;

    fn with_href(href: &str) -> AnchorAttrs {
        AnchorAttrs {
            href: Some(href.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn footnote_reference() {
        assert_eq!(
            classify(&with_href("#bookmark2")),
            AnchorAction::FootnoteRef { target_id: "bookmark2".into() }
        );
    }

    #[test]
    fn footnote_rule_never_matches_back_or_section_hrefs() {
        assert!(matches!(
            classify(&with_href("#bookmarkback1")),
            AnchorAction::FootnoteBack { .. }
        ));
        assert!(matches!(
            classify(&with_href("#bookmarkSection1")),
            AnchorAction::SectionRef { .. }
        ));
    }

    #[test]
    fn backlink_target_id_drops_the_hash() {
        assert_eq!(
            classify(&with_href("#bookmarkback3")),
            AnchorAction::FootnoteBack { target_id: "bookmarkback3".into() }
        );
    }

    #[test]
    fn section_reference_keeps_the_full_href() {
        assert_eq!(
            classify(&with_href("#bookmarkSection5.1")),
            AnchorAction::SectionRef { href: "#bookmarkSection5.1".into() }
        );
    }

    #[test]
    fn section_rule_matches_non_fragment_hrefs_too() {
        // a relative link into another guide still counts as a section ref
        assert!(matches!(
            classify(&with_href("/guides/cit#bookmarkSection2")),
            AnchorAction::SectionRef { .. }
        ));
    }

    #[test]
    fn name_becomes_bookmark_target() {
        let anchor = AnchorAttrs {
            name: Some("bookmark5".into()),
            ..Default::default()
        };
        assert_eq!(
            classify(&anchor),
            AnchorAction::BookmarkTarget { id: "bookmark5".into() }
        );
    }

    #[test]
    fn name_wins_over_external_href() {
        let anchor = AnchorAttrs {
            href: Some("https://example.com".into()),
            name: Some("bookmark5".into()),
            ..Default::default()
        };
        assert!(matches!(classify(&anchor), AnchorAction::BookmarkTarget { .. }));
    }

    #[test]
    fn external_link() {
        assert_eq!(
            classify(&with_href("https://example.com")),
            AnchorAction::External { href: "https://example.com".into() }
        );
    }

    #[test]
    fn plain_fragment_href_falls_through() {
        assert_eq!(
            classify(&with_href("#appendix")),
            AnchorAction::Passthrough { href: Some("#appendix".into()) }
        );
    }

    #[test]
    fn anchor_with_no_attributes_falls_through() {
        assert_eq!(
            classify(&AnchorAttrs::default()),
            AnchorAction::Passthrough { href: None }
        );
    }

    #[test]
    fn anchor_children_preserve_marks_and_text() {
        let tree = parse("<a href=\"#bookmark1\"><mark>Tax</mark> rule <b>now</b></a>");
        let Node::Element { children, .. } = &tree.nodes[0] else {
            panic!("expected anchor");
        };
        assert_eq!(
            anchor_children(children),
            vec![
                AnchorChild::Marked("Tax".into()),
                AnchorChild::Plain(" rule ".into()),
                AnchorChild::Plain("now".into()),
            ]
        );
    }
}
