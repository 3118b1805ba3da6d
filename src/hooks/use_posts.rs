use yew::prelude::*;

use super::use_fetch::{DataState, use_fetch_data};
use crate::models::post::Posts;
use crate::services::api::ApiConfig;

/// Loads the post collection once for the lifetime of the page.
#[hook]
pub fn use_posts() -> UseStateHandle<DataState<Posts>> {
    let url = AttrValue::from(ApiConfig::default().data_pool_url());
    let state = use_fetch_data::<Posts>(url);

    // Report a broken identity-key invariant once per loaded collection
    {
        let posts = state.data().cloned();
        use_effect_with(posts, |posts| {
            if let Some(posts) = posts {
                if let Some(url) = posts.first_duplicate_url() {
                    gloo::console::warn!(&format!("Duplicate post URL in collection: {url}"));
                }
            }
            || ()
        });
    }

    state
}
