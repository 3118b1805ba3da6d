use yew::prelude::*;

use super::error_banner::ErrorBanner;
use super::loader::Loader;
use super::metrics_chart::MetricsChart;
use super::metrics_grid::MetricsGrid;
use crate::hooks::use_analysis::{AnalysisPhase, AnalysisSession, SessionStatus};

#[derive(Properties, PartialEq)]
pub struct AnalysisDialogProps {
    pub session: AnalysisSession,
    pub on_close: Callback<()>,
}

/// Slide-over panel showing the latest analysis
#[function_component(AnalysisDialog)]
pub fn analysis_dialog(props: &AnalysisDialogProps) -> Html {
    if props.session.status() == SessionStatus::Closed {
        return html! {};
    }

    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let body = match props.session.phase() {
        AnalysisPhase::Idle | AnalysisPhase::Loading => html! {
            <Loader message="Analyzing content..." />
        },
        AnalysisPhase::Failed(msg) => html! {
            <ErrorBanner message={msg.clone()} />
        },
        AnalysisPhase::Loaded(result) => html! {
            <>
                <MetricsChart result={result.clone()} />
                <MetricsGrid result={result.clone()} />
            </>
        },
    };

    html! {
        <>
            <div class="dialog-backdrop" onclick={onclick.clone()} />
            <aside class="analysis-dialog" role="dialog" aria-label="Sentiment Analysis">
                <header class="dialog-header">
                    <h2>{"Sentiment Analysis"}</h2>
                    <button
                        class="dialog-close"
                        {onclick}
                        aria-label="Close analysis"
                        title="Close"
                    >
                        {"✕"}
                    </button>
                </header>
                if let Some(url) = props.session.url() {
                    <p class="dialog-url">{url.to_string()}</p>
                }
                <div class="dialog-body">
                    {body}
                </div>
            </aside>
        </>
    }
}
