use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub on_search_change: Callback<String>,
}

/// Title search box; emits the full text on every keystroke
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let callback = props.on_search_change.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    html! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search posts by title..."
                aria-label="Search posts by title"
                {oninput}
            />
        </div>
    }
}
