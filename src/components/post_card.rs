use yew::prelude::*;

use crate::models::post::Post;

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: Post,
    pub on_analyze: Callback<String>,
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;

    let onclick = {
        let callback = props.on_analyze.clone();
        let url = post.url.clone();
        Callback::from(move |_: MouseEvent| callback.emit(url.clone()))
    };

    html! {
        <article class="post-card">
            if post.has_image() {
                <div class="post-image">
                    <img src={post.url.clone()} alt={post.title.clone()} />
                </div>
            }
            <div class="post-body">
                <p class="post-category">{&post.category}</p>
                <h3 class="post-title">{&post.title}</h3>
                <p class="post-date">{post.display_date()}</p>
                <p class="post-description">{&post.description}</p>
                <p class="post-keywords">
                    {"Keywords: "}<span>{&post.keywords}</span>
                </p>
            </div>
            <div class="post-actions">
                <button class="analyze-button" {onclick}>{"Analyze"}</button>
            </div>
        </article>
    }
}
