//! Owned render-ready tree parsed from sanitized markup.

use ego_tree::NodeRef;
use scraper::node::Node as DomNode;

/// A node in the sanitized content tree.
///
/// Only elements and text survive sanitization, so nothing else is
/// represented. Tag and attribute names are lowercase.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
}

impl Node {
    /// Looks up an attribute by name. Always `None` for text nodes.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants, document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// The parsed sanitized content, ready for a rendering layer to walk.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentTree {
    pub nodes: Vec<Node>,
}

impl ContentTree {
    /// Concatenated text of the whole tree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.collect_text(&mut out);
        }
        out
    }

    /// All `<a>` elements in document order, at any depth.
    pub fn find_anchors(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        for node in &self.nodes {
            collect_anchors(node, &mut out);
        }
        out
    }
}

fn collect_anchors<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    if let Node::Element { tag, children, .. } = node {
        if tag == "a" {
            out.push(node);
        }
        for child in children {
            collect_anchors(child, out);
        }
    }
}

/// Parses an HTML fragment into a [`ContentTree`].
pub fn parse(html: &str) -> ContentTree {
    let fragment = scraper::Html::parse_fragment(html);
    let mut nodes = Vec::new();
    for child in fragment.tree.root().children() {
        convert(child, &mut nodes);
    }
    ContentTree { nodes }
}

fn convert(node: NodeRef<'_, DomNode>, out: &mut Vec<Node>) {
    match node.value() {
        DomNode::Text(text) => out.push(Node::Text(text.text.to_string())),
        DomNode::Element(element) => {
            // fragment parsing wraps content in a synthetic <html> element
            if element.name() == "html" {
                for child in node.children() {
                    convert(child, out);
                }
                return;
            }
            let mut children = Vec::new();
            for child in node.children() {
                convert(child, &mut children);
            }
            out.push(Node::Element {
                tag: element.name().to_string(),
                attrs: element
                    .attrs()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
                children,
            });
        }
        // comments and doctypes don't survive sanitization
        _ => {}
    }
}
