//! Renders sanitized guide content with interactive anchors.
//!
//! `guide_content::transform` produces the safe tree and classifies nothing;
//! this component interprets each anchor's [`AnchorAction`] into concrete
//! markup and click handlers: smooth scrolls for footnote jumps, new tabs
//! for section cross-references and external links. Every failure mode here
//! (missing scroll target, blocked popup, absent forward URL) degrades to a
//! logged no-op so the rest of the content keeps working.

use gloo_timers::callback::Timeout;
use guide_content::{
    AnchorAction, AnchorAttrs, AnchorChild, Node, anchor_children, classify,
};
use yew::prelude::*;
use yew::virtual_dom::{VNode, VTag, VText};

/// Delay before the mount-time scroll, so the content is in the DOM.
const MOUNT_SCROLL_DELAY_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct HtmlContentProps {
    /// Raw guide HTML from the content service.
    pub content: AttrValue,
    /// Term to highlight; empty means no highlighting.
    #[prop_or_default]
    pub search_query: AttrValue,
    /// Base URL for opening section cross-references while in preview mode
    /// (the search page). Owned by the host; absent outside preview.
    #[prop_or_default]
    pub forward_url: Option<AttrValue>,
}

#[function_component]
pub fn HtmlContent(props: &HtmlContentProps) -> Html {
    // if the page loaded with a section fragment, scroll to it once
    use_effect_with((), |_| {
        if let Some(hash) = location_hash()
            && hash.contains("bookmarkSection")
        {
            let target_id = hash.trim_start_matches('#').to_string();
            Timeout::new(MOUNT_SCROLL_DELAY_MS, move || {
                if scroll_to_id(&target_id) {
                    tracing::debug!(%target_id, "scrolled to section");
                } else {
                    tracing::warn!(%target_id, "target section not found");
                }
            })
            .forget();
        }
    });

    let tree = guide_content::transform(&props.content, &props.search_query);
    html! {
        <div class="html-content">
            { for tree.nodes.iter().map(|node| render_node(node, props.forward_url.as_ref())) }
        </div>
    }
}

fn render_node(node: &Node, forward_url: Option<&AttrValue>) -> Html {
    match node {
        Node::Text(text) => VNode::from(VText::new(text.clone())),
        Node::Element { tag, attrs, children } if tag == "a" => {
            render_anchor(AnchorAttrs::from_attrs(attrs), children, forward_url)
        }
        Node::Element { tag, attrs, children } => {
            let mut vtag = VTag::new(tag.clone());
            for (key, value) in attrs {
                if let Some(key) = static_attr_name(key) {
                    vtag.add_attribute(key, value.clone());
                }
            }
            for child in children {
                vtag.add_child(render_node(child, forward_url));
            }
            VNode::VTag(Box::new(vtag))
        }
    }
}

/// Attribute names the renderer emits. VTag wants `&'static str` keys, and
/// the sanitizer has already reduced attributes to a small known set.
fn static_attr_name(name: &str) -> Option<&'static str> {
    Some(match name {
        "target" => "target",
        "rel" => "rel",
        "class" => "class",
        "id" => "id",
        "name" => "name",
        "href" => "href",
        "src" => "src",
        "alt" => "alt",
        "title" => "title",
        "lang" => "lang",
        "colspan" => "colspan",
        "rowspan" => "rowspan",
        _ => return None,
    })
}

fn render_anchor(
    anchor: AnchorAttrs,
    children: &[Node],
    forward_url: Option<&AttrValue>,
) -> Html {
    let body = render_anchor_children(&anchor_children(children));

    match classify(&anchor) {
        AnchorAction::FootnoteRef { target_id } => {
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if !scroll_to_id(&target_id) {
                    tracing::warn!(%target_id, "footnote target not found");
                }
            });
            html! {
                <a
                    href={anchor.href}
                    class={classes!(anchor.class)}
                    id={anchor.id}
                    {onclick}
                >
                    { body }
                </a>
            }
        }
        AnchorAction::FootnoteBack { target_id } => {
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if !scroll_to_id(&target_id) {
                    tracing::warn!(%target_id, "backlink target not found");
                }
            });
            html! {
                <a
                    href={anchor.href}
                    class={classes!(anchor.class)}
                    id={anchor.id}
                    {onclick}
                >
                    { body }
                </a>
            }
        }
        AnchorAction::SectionRef { href } => {
            let forward_url = forward_url.cloned();
            let href_attr = href.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                open_section(&href, forward_url.as_deref());
            });
            html! {
                <a
                    href={href_attr}
                    class={classes!(anchor.class)}
                    id={anchor.id}
                    {onclick}
                >
                    { body }
                </a>
            }
        }
        AnchorAction::BookmarkTarget { id } => {
            // `name` anchors aren't addressable scroll targets after
            // sanitization; normalize to an id the scroll rules can find
            html! { <a id={id}>{ body }</a> }
        }
        AnchorAction::External { href } => {
            let href_attr = href.clone();
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                open_external(&href);
            });
            html! {
                <a
                    href={href_attr}
                    target="_blank"
                    rel="noopener noreferrer"
                    {onclick}
                >
                    { body }
                </a>
            }
        }
        AnchorAction::Passthrough { href } => {
            html! { <a href={href} rel="noopener noreferrer">{ body }</a> }
        }
    }
}

fn render_anchor_children(children: &[AnchorChild]) -> Html {
    html! {
        for children.iter().map(|child| match child {
            AnchorChild::Marked(text) => html! { <mark>{ text.clone() }</mark> },
            AnchorChild::Plain(text) => html! { { text.clone() } },
        })
    }
}

/// Smooth-scrolls the element with the given id into view. Returns whether
/// the element was found.
fn scroll_to_id(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    match document.get_element_by_id(id) {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

fn location_hash() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .filter(|hash| !hash.is_empty())
}

/// Opens a section cross-reference in a new tab.
///
/// In preview mode (a path containing `/search`) the section lives in the
/// full guide, so the host-supplied forward URL is the base. Otherwise the
/// section is on the current page; a blocked popup degrades to a local
/// scroll.
fn open_section(href: &str, forward_url: Option<&str>) {
    let Some(window) = web_sys::window() else { return };
    let location = window.location();
    let preview_mode = location
        .pathname()
        .map(|path| path.contains("/search"))
        .unwrap_or(false);

    if preview_mode {
        match forward_url {
            Some(base) => {
                let url = format!("{base}{href}");
                if let Err(err) = window.open_with_url_and_target(&url, "_blank") {
                    tracing::warn!(?err, %url, "failed to open section in new tab");
                }
            }
            None => {
                tracing::warn!(%href, "no forward URL available for section link");
            }
        }
    } else {
        let origin = location.origin().unwrap_or_default();
        let path = location.pathname().unwrap_or_default();
        let url = format!("{origin}{path}{href}");
        let opened = window.open_with_url_and_target(&url, "_blank").ok().flatten();
        if opened.is_none() {
            // popup blocked: fall back to scrolling within the current page
            let target_id = href.trim_start_matches('#');
            if !scroll_to_id(target_id) {
                tracing::warn!(target_id, "section target not found");
            }
        }
    }
}

fn open_external(href: &str) {
    let Some(window) = web_sys::window() else { return };
    if let Err(err) = window.open_with_url_and_target_and_features(
        href,
        "_blank",
        "noopener,noreferrer",
    ) {
        tracing::warn!(?err, %href, "failed to open external link");
    }
}

#[cfg(test)]
mod tests {
    use super::static_attr_name;

    #[test]
    fn allow_listed_attributes_have_static_names() {
        for name in ["target", "rel", "class", "id", "name", "href"] {
            assert_eq!(static_attr_name(name), Some(name));
        }
    }

    #[test]
    fn unknown_attributes_are_dropped() {
        assert_eq!(static_attr_name("onclick"), None);
        assert_eq!(static_attr_name("style"), None);
    }
}
