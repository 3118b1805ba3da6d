use std::rc::Rc;
use yew::prelude::*;

use super::post_card::PostCard;
use crate::models::post::Posts;

#[derive(Properties, PartialEq)]
pub struct PostGridProps {
    pub posts: Rc<Posts>,
    pub search_term: AttrValue,
    pub on_analyze: Callback<String>,
}

/// Cards for every post matching the search term, keyed by URL
#[function_component(PostGrid)]
pub fn post_grid(props: &PostGridProps) -> Html {
    let visible = use_memo(
        (props.posts.clone(), props.search_term.clone()),
        |(posts, term)| posts.filter(term),
    );

    if visible.is_empty() {
        return html! {
            <div class="post-grid-empty">
                <p>{props.posts.empty_notice()}</p>
            </div>
        };
    }

    html! {
        <div class="post-grid">
            {
                visible.iter().map(|post| html! {
                    <PostCard
                        key={post.url.clone()}
                        post={post.clone()}
                        on_analyze={props.on_analyze.clone()}
                    />
                }).collect::<Html>()
            }
        </div>
    }
}
