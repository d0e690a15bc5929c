//! The search page is "preview mode": its path contains `/search`, and each
//! card carries the guide's canonical URL so that section cross-references
//! inside a previewed guide open the full guide in a new tab.

use yew::prelude::*;

use crate::articles::filter_articles;
use crate::components::{GuideCard, NavBar};
use crate::content::sample_articles;
use crate::hooks::{use_debounce, use_title};

const FILTER_DEBOUNCE_MS: u32 = 250;

#[function_component]
pub fn SearchPage() -> Html {
    use_title("Search — Tax Guide Library");

    let query_input = use_state(String::default);
    let query = use_debounce(query_input.to_string(), FILTER_DEBOUNCE_MS);

    let on_input = {
        let query_input = query_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            query_input.set(input.value());
        })
    };

    let articles = sample_articles();
    let matches = filter_articles(&articles, &query);

    html! {
        <>
            <NavBar />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <input
                    type="text"
                    value={(*query_input).clone()}
                    oninput={on_input}
                    placeholder="Search guides"
                    class="w-full max-w-lg border border-gray-300 rounded-md
                           px-4 py-2 mb-6"
                />
                if matches.is_empty() {
                    <p class="text-gray-500">{"No guides match your search."}</p>
                } else {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                        { for matches.iter().map(|article| html! {
                            <GuideCard
                                key={article.slug.clone()}
                                article={article.clone()}
                                forward_url={guide_forward_url(&article.slug)}
                            />
                        }) }
                    </div>
                }
            </main>
        </>
    }
}

/// The canonical URL of a guide, used as the forward base for section
/// cross-references opened from a preview.
fn guide_forward_url(slug: &str) -> Option<AttrValue> {
    let window = web_sys::window()?;
    let origin = window.location().origin().ok()?;
    Some(AttrValue::from(format!("{origin}/guides/{slug}")))
}
