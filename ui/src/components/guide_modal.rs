//! Full-screen guide reader: backdrop-close modal with in-guide search and
//! a back-to-top control.

use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::articles::Article;
use crate::components::HtmlContent;
use crate::hooks::use_debounce;

/// Scroll offset past which the back-to-top button appears.
const BACK_TO_TOP_THRESHOLD: i32 = 300;

/// Delay before a typed search term is applied to the content. Every
/// keystroke would otherwise reprocess the full guide HTML.
const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct GuideModalProps {
    pub article: Article,
    /// Raw guide HTML.
    pub content: AttrValue,
    /// Called when the user clicks the backdrop or the close button.
    pub on_close: Callback<()>,
    /// Threaded through to section cross-references (preview mode only).
    #[prop_or_default]
    pub forward_url: Option<AttrValue>,
}

#[function_component]
pub fn GuideModal(props: &GuideModalProps) -> Html {
    let backdrop_ref = use_node_ref();
    let content_ref = use_node_ref();
    let search_input = use_state(String::default);
    let show_back_to_top = use_state(|| false);

    let search_query = use_debounce(search_input.to_string(), SEARCH_DEBOUNCE_MS);

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();

        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    let on_search_input = {
        let search_input = search_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            search_input.set(input.value());
        })
    };

    let on_scroll = {
        let content_ref = content_ref.clone();
        let show_back_to_top = show_back_to_top.clone();
        Callback::from(move |_: Event| {
            if let Some(element) = content_ref.cast::<web_sys::Element>() {
                show_back_to_top.set(element.scroll_top() > BACK_TO_TOP_THRESHOLD);
            }
        })
    };

    let scroll_to_top = {
        let content_ref = content_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(element) = content_ref.cast::<web_sys::Element>() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                element.scroll_to_with_scroll_to_options(&options);
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref.clone()}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex
                   items-center justify-center p-4"
        >
            <div class="relative bg-white rounded-lg shadow-xl w-full max-w-4xl
                        max-h-[90vh] flex flex-col">
                <div class="flex items-center justify-between gap-4 border-b
                            border-gray-200 px-6 py-4">
                    <h2 class="text-lg font-semibold text-gray-900 truncate">
                        { props.article.title.clone() }
                    </h2>
                    <div class="flex items-center gap-3">
                        <input
                            type="text"
                            value={(*search_input).clone()}
                            oninput={on_search_input}
                            placeholder="Search within this guide"
                            class="border border-gray-300 rounded-md px-3 py-1.5
                                   text-sm w-56"
                        />
                        <button
                            onclick={props.on_close.reform(|_| ())}
                            aria-label="Close"
                            class="text-gray-500 hover:text-gray-700 text-xl
                                   leading-none"
                        >
                            {"\u{2715}"}
                        </button>
                    </div>
                </div>

                <div
                    ref={content_ref.clone()}
                    onscroll={on_scroll}
                    class="overflow-y-auto px-6 py-4 relative"
                >
                    <HtmlContent
                        content={props.content.clone()}
                        search_query={search_query}
                        forward_url={props.forward_url.clone()}
                    />
                </div>

                if *show_back_to_top {
                    <button
                        onclick={scroll_to_top}
                        aria-label="Back to top"
                        class="absolute bottom-8 right-8 bg-gray-900 text-white
                               rounded-full w-10 h-10 shadow-lg"
                    >
                        {"\u{2191}"}
                    </button>
                }
            </div>
        </div>
    }
}
