use yew::prelude::*;

/// Sets the document title for the current page. No cleanup on unmount:
/// every page sets its own title on mount.
#[hook]
pub fn use_title(title: &str) {
    let title = title.to_string();
    use_effect_with(title, |title| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    });
}
