//! Transforms externally-sourced legal guide HTML into a safe, render-ready
//! tree.
//!
//! The pipeline runs three stages per call, rebuilding everything from
//! scratch (no caching, no incremental updates):
//!
//! 1. [`highlight`] — wraps case-insensitive occurrences of a search term in
//!    `<mark>` tags, touching text segments only, never tag interiors.
//! 2. [`Sanitizer`] — strips anything not on a fixed allow-list, including
//!    all script-executing constructs.
//! 3. The cleaned markup is parsed into a lightweight [`Node`] tree that a
//!    rendering layer can walk.
//!
//! Anchors are not rewritten here. [`classify`] maps each anchor's
//! attributes to an [`AnchorAction`] describing what the rendering layer
//! should do with it (footnote jump, section cross-reference, external
//! link, ...). Keeping classification pure makes the link rules testable
//! without a browser environment.
//!
//! # Example
//!
//! ```rust
//! use guide_content::{AnchorAction, AnchorAttrs, Node, classify, transform};
//!
//! let tree = transform("<p>Tax <a href='#bookmark2'>rule</a> applies</p>", "Tax");
//! let anchor = tree.find_anchors()[0];
//! if let Node::Element { attrs, .. } = anchor {
//!     let action = classify(&AnchorAttrs::from_attrs(attrs));
//!     assert_eq!(
//!         action,
//!         AnchorAction::FootnoteRef { target_id: "bookmark2".into() }
//!     );
//! }
//! ```

mod classify;
mod highlight;
mod sanitize;
mod tree;

pub use classify::{
    AnchorAction, AnchorAttrs, AnchorChild, anchor_children, classify,
};
pub use highlight::highlight;
pub use sanitize::Sanitizer;
pub use tree::{ContentTree, Node};

/// Runs the full pipeline: highlight, sanitize, parse.
///
/// `search_query` may be empty, in which case the highlighting stage is an
/// identity pass. The result is safe to render directly.
pub fn transform(content: &str, search_query: &str) -> ContentTree {
    let highlighted = highlight(content, search_query);
    let clean = Sanitizer::new().clean(&highlighted);
    tracing::debug!(
        input_len = content.len(),
        clean_len = clean.len(),
        highlighted = !search_query.is_empty() && clean.contains("<mark>"),
        "transformed guide content"
    );
    tree::parse(&clean)
}
