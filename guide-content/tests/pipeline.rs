//! End-to-end pipeline tests: highlight, sanitize, parse, classify.

use guide_content::{
    AnchorAction, AnchorAttrs, AnchorChild, Node, anchor_children, classify,
    transform,
};

fn classify_node(node: &Node) -> AnchorAction {
    let Node::Element { attrs, .. } = node else {
        panic!("expected an element");
    };
    classify(&AnchorAttrs::from_attrs(attrs))
}

#[test]
fn footnote_scenario() {
    let tree = transform("<p>Tax <a href='#bookmark2'>rule</a> applies</p>", "Tax");

    // reading order survives the whole pipeline
    assert_eq!(tree.text_content(), "Tax rule applies");

    // the search term is marked in the text segment only
    let Node::Element { tag, children, .. } = &tree.nodes[0] else {
        panic!("expected <p>");
    };
    assert_eq!(tag, "p");
    assert_eq!(
        children[0],
        Node::Element {
            tag: "mark".into(),
            attrs: vec![],
            children: vec![Node::Text("Tax".into())],
        }
    );

    // the anchor survives sanitization and classifies as a footnote jump
    let anchors = tree.find_anchors();
    assert_eq!(anchors.len(), 1);
    assert_eq!(
        classify_node(anchors[0]),
        AnchorAction::FootnoteRef { target_id: "bookmark2".into() }
    );
}

#[test]
fn external_link_scenario() {
    let tree = transform("<a href=\"https://example.com\">Ext</a>", "");
    let anchors = tree.find_anchors();
    assert_eq!(
        classify_node(anchors[0]),
        AnchorAction::External { href: "https://example.com".into() }
    );
    assert_eq!(tree.text_content(), "Ext");
}

#[test]
fn bookmark_definition_round_trip() {
    let tree = transform("<a name=\"bookmark5\">note</a>", "");
    let anchors = tree.find_anchors();
    assert_eq!(
        classify_node(anchors[0]),
        AnchorAction::BookmarkTarget { id: "bookmark5".into() }
    );
    let Node::Element { children, .. } = anchors[0] else {
        panic!("expected anchor");
    };
    assert_eq!(anchor_children(children), vec![AnchorChild::Plain("note".into())]);
}

#[test]
fn script_injection_is_stripped() {
    let tree = transform(
        "<p>ok</p><script>alert(1)</script><a href=\"javascript:alert(1)\">x</a>",
        "",
    );
    assert_eq!(tree.text_content(), "okx");
    let anchors = tree.find_anchors();
    assert_eq!(anchors.len(), 1);
    assert_eq!(anchors[0].attr("href"), None);
    // an anchor with no surviving href or name is left alone
    assert_eq!(
        classify_node(anchors[0]),
        AnchorAction::Passthrough { href: None }
    );
}

#[test]
fn highlighting_survives_sanitization() {
    let tree = transform("<p>the tax rule</p>", "tax");
    let Node::Element { children, .. } = &tree.nodes[0] else {
        panic!("expected <p>");
    };
    assert!(children.iter().any(|child| matches!(
        child,
        Node::Element { tag, .. } if tag == "mark"
    )));
    assert_eq!(tree.text_content(), "the tax rule");
}

#[test]
fn empty_query_does_not_mark_anything() {
    let tree = transform("<p>tax</p>", "");
    assert_eq!(
        tree.nodes[0],
        Node::Element {
            tag: "p".into(),
            attrs: vec![],
            children: vec![Node::Text("tax".into())],
        }
    );
}

#[test]
fn marked_anchor_text_is_preserved_through_flattening() {
    let tree = transform(
        "<p><a href='#bookmark1'>tax footnote</a></p>",
        "tax",
    );
    let anchors = tree.find_anchors();
    let Node::Element { children, .. } = anchors[0] else {
        panic!("expected anchor");
    };
    assert_eq!(
        anchor_children(children),
        vec![
            AnchorChild::Marked("tax".into()),
            AnchorChild::Plain(" footnote".into()),
        ]
    );
}
