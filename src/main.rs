use yew::prelude::*;

use social_dashboard::components::{AnalysisDialog, ErrorBanner, Loader, PostGrid, SearchBar};
use social_dashboard::hooks::use_analysis::use_analysis;
use social_dashboard::hooks::use_fetch::DataState;
use social_dashboard::hooks::use_posts::use_posts;

#[function_component(App)]
fn app() -> Html {
    let posts = use_posts();
    let search_term = use_state(String::new);
    let analysis = use_analysis();

    let on_search_change = {
        let search_term = search_term.clone();
        Callback::from(move |term: String| search_term.set(term))
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Social Media Dashboard"}</h1>
                <p class="app-subtitle">{"Explore and analyze the latest posts."}</p>
            </header>

            <main class="app-main">
                <SearchBar {on_search_change} />

                {
                    match &*posts {
                        DataState::Loading => html! { <Loader /> },
                        DataState::Error(msg) => html! { <ErrorBanner message={msg.clone()} /> },
                        DataState::Loaded(posts) => html! {
                            <PostGrid
                                posts={posts.clone()}
                                search_term={(*search_term).clone()}
                                on_analyze={analysis.analyze.clone()}
                            />
                        },
                    }
                }
            </main>

            <AnalysisDialog
                session={(*analysis.session).clone()}
                on_close={analysis.close.clone()}
            />

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
