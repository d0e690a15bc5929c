use yew::prelude::*;
use yew_router::prelude::*;

pub mod articles;
pub mod components;
pub mod content;
mod hooks;
mod logs;
mod pages;

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white text-gray-900">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/search")]
    Search,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <pages::HomePage /> },
        Route::Search => html! { <pages::SearchPage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}
