use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    #[prop_or(AttrValue::Static("Loading social media posts..."))]
    pub message: AttrValue,
}

#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{props.message.clone()}</p>
        </div>
    }
}
