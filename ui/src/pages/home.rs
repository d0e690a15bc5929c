use yew::prelude::*;

use crate::components::{GuideCard, NavBar};
use crate::content::sample_articles;
use crate::hooks::use_title;

#[function_component]
pub fn HomePage() -> Html {
    use_title("Tax Guide Library");

    let articles = sample_articles();

    html! {
        <>
            <NavBar />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">
                    {"Guides, clarifications and manuals"}
                </h1>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for articles.iter().map(|article| html! {
                        <GuideCard key={article.slug.clone()} article={article.clone()} />
                    }) }
                </div>
            </main>
        </>
    }
}
