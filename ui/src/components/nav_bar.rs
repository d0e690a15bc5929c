//! Top navigation: brand, law entries, and a mobile drawer.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct Law {
    full_name: &'static str,
    slug: &'static str,
}

const AVAILABLE_LAWS: &[Law] = &[
    Law {
        full_name: "CIT (FDL No 47 of 2022)",
        slug: "uae-cit-fdl-47-2022",
    },
    Law {
        full_name: "CIT (FDL No 60 of 2023)",
        slug: "uae-cit-fdl-60-2023",
    },
    Law {
        full_name: "VAT (FDL No 8 of 2017)",
        slug: "uae-vat-fdl-8-2017",
    },
];

#[function_component]
pub fn NavBar() -> Html {
    let drawer_open = use_state(|| false);

    let open_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| drawer_open.set(true))
    };
    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| drawer_open.set(false))
    };

    html! {
        <nav class="bg-slate-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-8">
                        <Link<Route> to={Route::Home}>
                            <span class="text-xl font-semibold">
                                {"Tax Guide Library"}
                            </span>
                        </Link<Route>>
                        <div class="hidden md:flex items-center gap-6">
                            { for AVAILABLE_LAWS.iter().map(|law| html! {
                                <a
                                    href={format!("/laws/{}", law.slug)}
                                    class="text-sm text-slate-300 hover:text-white"
                                >
                                    { law.full_name }
                                </a>
                            }) }
                            <Link<Route> to={Route::Search}>
                                <span class="text-sm text-amber-400 hover:text-amber-300">
                                    {"Search"}
                                </span>
                            </Link<Route>>
                        </div>
                    </div>
                    <button
                        onclick={open_drawer}
                        aria-label="Open menu"
                        class="md:hidden text-2xl"
                    >
                        {"\u{2630}"}
                    </button>
                </div>
            </div>

            if *drawer_open {
                <div class="fixed inset-0 z-40 bg-black bg-opacity-40 md:hidden">
                    <div class="absolute right-0 top-0 h-full w-64 bg-slate-900
                                p-4 flex flex-col gap-4">
                        <div class="flex justify-end">
                            <button
                                onclick={close_drawer.clone()}
                                aria-label="Close menu"
                                class="text-2xl"
                            >
                                {"\u{2715}"}
                            </button>
                        </div>
                        { for AVAILABLE_LAWS.iter().map(|law| html! {
                            <a
                                href={format!("/laws/{}", law.slug)}
                                onclick={close_drawer.clone()}
                                class="text-slate-200 hover:text-white"
                            >
                                { law.full_name }
                            </a>
                        }) }
                        <Link<Route> to={Route::Search}>
                            <span
                                onclick={close_drawer.clone()}
                                class="text-amber-400"
                            >
                                {"Search"}
                            </span>
                        </Link<Route>>
                    </div>
                </div>
            }
        </nav>
    }
}
