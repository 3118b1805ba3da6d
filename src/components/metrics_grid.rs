use std::rc::Rc;
use yew::prelude::*;

use crate::models::analysis::AnalysisResult;

#[derive(Properties, PartialEq)]
pub struct MetricsGridProps {
    pub result: Rc<AnalysisResult>,
}

#[function_component(MetricsGrid)]
pub fn metrics_grid(props: &MetricsGridProps) -> Html {
    html! {
        <div class="metrics-grid">
            {
                props.result.metrics().iter().map(|metric| html! {
                    <div class="metric-item" key={metric.label}>
                        <p class="metric-label">{metric.label}</p>
                        <p class="metric-value">{metric.value.to_string()}</p>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}
