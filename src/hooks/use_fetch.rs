use serde::de::DeserializeOwned;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::services::api::fetch_json;

#[derive(Clone, PartialEq, Debug)]
pub enum DataState<T> {
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> DataState<T> {
    /// Settled state for a completed request.
    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => DataState::Loaded(Rc::new(data)),
            Err(e) => DataState::Error(e.to_string()),
        }
    }

    /// Settled state for a request, or `None` if its consumer has gone away.
    pub fn settle(abandoned: bool, result: Result<T, AppError>) -> Option<Self> {
        (!abandoned).then(|| Self::from_result(result))
    }

    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Fetches `url` once per distinct value and exposes the request lifecycle.
///
/// Results arriving after the consumer unmounts (or after `url` changes) are dropped.
#[hook]
pub fn use_fetch_data<T>(url: AttrValue) -> UseStateHandle<DataState<T>>
where
    T: DeserializeOwned + 'static,
{
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with(url, move |url| {
            let url = url.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(DataState::Loading);

            spawn_local(async move {
                let result = fetch_json::<T>(&url).await;

                if let Err(e) = &result {
                    gloo::console::error!(&format!("Fetch error for {url}: {e}"));
                }
                match DataState::settle(aborted_check.get(), result) {
                    Some(settled) => state.set(settled),
                    None => {
                        gloo::console::log!(&format!(
                            "Dropping result for abandoned request to {url}"
                        ));
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
