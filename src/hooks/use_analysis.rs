use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{
    analysis::{AnalysisResult, Metric},
    error::AppError,
};
use crate::services::api::perform_analysis;

/// Outcome of the most recent analysis invocation.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Loading,
    Loaded(Rc<AnalysisResult>),
    Failed(String),
}

/// Coarse view of the session, as seen by the panel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionStatus {
    Closed,
    Loading,
    Result,
    Error,
}

pub enum AnalysisAction {
    /// A new invocation tagged with a sequence number larger than any before it.
    Start { request: u64, url: String },
    /// Applied only when `request` is still the latest invocation.
    Resolve {
        request: u64,
        outcome: Result<AnalysisResult, AppError>,
    },
    Close,
}

/// Dialog state for the analysis panel.
///
/// Only the response to the latest `Start` is ever applied; earlier
/// responses that settle late are discarded.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AnalysisSession {
    open: bool,
    phase: AnalysisPhase,
    url: Option<String>,
    latest_request: u64,
}

impl AnalysisSession {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Loading)
    }

    pub fn phase(&self) -> &AnalysisPhase {
        &self.phase
    }

    /// URL of the latest invocation
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    pub fn result(&self) -> Option<&Rc<AnalysisResult>> {
        match &self.phase {
            AnalysisPhase::Loaded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            AnalysisPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Labelled metrics for the chart and grid, once a result is present.
    pub fn metrics(&self) -> Option<[Metric; 6]> {
        self.result().map(|r| r.metrics())
    }

    pub fn status(&self) -> SessionStatus {
        if !self.open {
            return SessionStatus::Closed;
        }
        match self.phase {
            AnalysisPhase::Idle | AnalysisPhase::Loading => SessionStatus::Loading,
            AnalysisPhase::Loaded(_) => SessionStatus::Result,
            AnalysisPhase::Failed(_) => SessionStatus::Error,
        }
    }
}

impl Reducible for AnalysisSession {
    type Action = AnalysisAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AnalysisAction::Start { request, url } => Rc::new(Self {
                open: true,
                phase: AnalysisPhase::Loading,
                url: Some(url),
                latest_request: request,
            }),
            AnalysisAction::Resolve { request, outcome } => {
                if request != self.latest_request {
                    return self;
                }

                let phase = match outcome {
                    Ok(result) => AnalysisPhase::Loaded(Rc::new(result)),
                    Err(_) => AnalysisPhase::Failed(Config::ANALYSIS_ERROR_MESSAGE.to_string()),
                };
                Rc::new(Self {
                    phase,
                    ..(*self).clone()
                })
            }
            AnalysisAction::Close => Rc::new(Self {
                open: false,
                ..(*self).clone()
            }),
        }
    }
}

/// Handle returned by `use_analysis` hook
#[derive(Clone, PartialEq)]
pub struct AnalysisHandle {
    pub session: UseReducerHandle<AnalysisSession>,
    pub analyze: Callback<String>,
    pub close: Callback<()>,
}

/// Custom hook owning the analysis panel and its request cycle
#[hook]
pub fn use_analysis() -> AnalysisHandle {
    let session = use_reducer(AnalysisSession::default);
    let counter = use_mut_ref(|| 0u64);

    let analyze = {
        let session = session.clone();
        Callback::from(move |url: String| {
            let request = {
                let mut latest = counter.borrow_mut();
                *latest += 1;
                *latest
            };

            session.dispatch(AnalysisAction::Start {
                request,
                url: url.clone(),
            });

            let session = session.clone();
            let counter = counter.clone();
            spawn_local(async move {
                let outcome = perform_analysis(&url).await;

                if let Err(e) = &outcome {
                    gloo::console::error!(&format!("Analysis of {url} failed: {e}"));
                }
                let latest = *counter.borrow();
                if latest != request {
                    gloo::console::log!(&format!(
                        "Discarding stale analysis response #{request} (latest is #{latest})"
                    ));
                }

                session.dispatch(AnalysisAction::Resolve { request, outcome });
            });
        })
    };

    let close = {
        let session = session.clone();
        Callback::from(move |()| session.dispatch(AnalysisAction::Close))
    };

    AnalysisHandle {
        session,
        analyze,
        close,
    }
}
