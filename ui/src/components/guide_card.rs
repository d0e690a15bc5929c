//! A guide card: colored accent by guide type, opens the reader modal, and
//! offers an open-in-new-tab shortcut.

use yew::prelude::*;

use crate::articles::{
    Article, guide_type_label, guide_type_style, truncate_title,
};
use crate::components::GuideModal;
use crate::content;

const TITLE_MAX_CHARS: usize = 120;

#[derive(Properties, PartialEq)]
pub struct GuideCardProps {
    pub article: Article,
    /// Forward base URL for section cross-references; set by the search
    /// page (preview mode), absent elsewhere.
    #[prop_or_default]
    pub forward_url: Option<AttrValue>,
}

#[function_component]
pub fn GuideCard(props: &GuideCardProps) -> Html {
    let show_modal = use_state(|| false);

    // a page loaded with a section fragment goes straight to the reader;
    // the content component then scrolls to the section
    {
        let show_modal = show_modal.clone();
        use_effect_with((), move |_| {
            if let Some(window) = web_sys::window()
                && let Ok(hash) = window.location().hash()
                && hash.starts_with("#bookmarkSection")
            {
                show_modal.set(true);
            }
        });
    }

    let open_modal = {
        let show_modal = show_modal.clone();
        let slug = props.article.slug.clone();
        Callback::from(move |_: MouseEvent| {
            if content::fetch(&slug).is_some() {
                show_modal.set(true);
            } else {
                tracing::warn!(%slug, "no content available for guide");
            }
        })
    };

    let close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    let open_in_new_tab = {
        let slug = props.article.slug.clone();
        Callback::from(move |e: MouseEvent| {
            // don't also open the modal
            e.stop_propagation();
            let Some(window) = web_sys::window() else { return };
            let origin = window.location().origin().unwrap_or_default();
            let url = format!("{origin}/guides/{slug}");
            if let Err(err) = window.open_with_url_and_target_and_features(
                &url,
                "_blank",
                "noopener,noreferrer",
            ) {
                tracing::warn!(?err, %url, "failed to open guide in new tab");
            }
        })
    };

    let style = guide_type_style(&props.article.guide_type);
    let title = truncate_title(&props.article.title, TITLE_MAX_CHARS);

    html! {
        <>
            <div
                onclick={open_modal}
                class={classes!(
                    "bg-white", "rounded-lg", "shadow", "hover:shadow-md",
                    "transition-shadow", "cursor-pointer", "border-l-4",
                    "p-4", "flex", "flex-col", "gap-2",
                    style.border,
                )}
            >
                <div class="flex items-start justify-between gap-2">
                    <span
                        class={classes!(
                            "text-xs", "font-medium", "rounded-full",
                            "px-2", "py-0.5",
                            style.badge,
                        )}
                    >
                        { guide_type_label(&props.article.guide_type) }
                    </span>
                    <button
                        onclick={open_in_new_tab}
                        aria-label="Open in new tab"
                        class="text-gray-400 hover:text-gray-600"
                    >
                        {"\u{2197}"}
                    </button>
                </div>
                <p class="text-sm font-medium text-gray-900">{ title }</p>
                if let Some(year) = props.article.year {
                    <p class="text-xs text-gray-500">{ year }</p>
                }
            </div>

            if *show_modal {
                if let Some(guide_html) = content::fetch(&props.article.slug) {
                    <GuideModal
                        article={props.article.clone()}
                        content={AttrValue::from(guide_html)}
                        on_close={close_modal}
                        forward_url={props.forward_url.clone()}
                    />
                }
            }
        </>
    }
}
