use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::analysis::AnalysisResult;
use crate::utils::debounce::debounced_window_listener;

const CHART_ID: &str = "analysis-chart";
const BAR_COLOR: &str = "#3b82f6";

#[derive(Properties, PartialEq)]
pub struct MetricsChartProps {
    pub result: Rc<AnalysisResult>,
}

#[function_component(MetricsChart)]
pub fn metrics_chart(props: &MetricsChartProps) -> Html {
    let container_ref = use_node_ref();
    let series_data = use_memo(props.result.clone(), |result| chart_series(result));

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (series_data, container_ref),
            |(series_data, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, series_data);

                    let series_data = series_data.clone();
                    debounced_window_listener("resize", Config::CHART_RESIZE_DEBOUNCE_MS, move || {
                        render_chart(&container, &series_data);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

/// Category labels and plotted values, in metric display order.
pub fn chart_series(result: &AnalysisResult) -> (Vec<String>, Vec<f64>) {
    result
        .metrics()
        .iter()
        .map(|m| (m.label.to_string(), m.value.as_f64()))
        .unzip()
}

fn render_chart(container: &HtmlElement, series_data: &(Vec<String>, Vec<f64>)) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series_data);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        gloo::console::error!(&format!("Render error: {e:?}"));
    }
}

fn build_chart(series_data: &(Vec<String>, Vec<f64>)) -> CharmingChart {
    let (x_data, y_data) = series_data;

    CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("4%")
                .right("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data.clone())
                .axis_label(AxisLabel::new().interval(0).rotate(30)),
        )
        .y_axis(
            Axis::new().type_(AxisType::Value).split_line(
                SplitLine::new().line_style(
                    LineStyle::new()
                        .color("#e0e0e0")
                        .type_(LineStyleType::Dashed),
                ),
            ),
        )
        .series(
            Bar::new()
                .name("Metric Value")
                .data(y_data.clone())
                .item_style(ItemStyle::new().color(BAR_COLOR))
                .bar_width("60%"),
        )
}
