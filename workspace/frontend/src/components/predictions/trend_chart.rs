use common::{ChartData, StorePrediction};
use compute::store_trend;
use plotly::common::Mode;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

const SERIES_COLORS: [&str; 6] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899",
];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub store_id: String,
    pub prediction: StorePrediction,
}

/// Per-category trend lines for one store's short-term outlook.
///
/// The series are derived locally from the prediction, so switching stores
/// redraws without another round trip.
#[function_component(TrendChart)]
pub fn trend_chart(props: &Props) -> Html {
    let trend = store_trend(&props.prediction);

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Category Trends"}</h3>
                <p class="text-sm text-gray-500 mb-4">
                    {"Projected demand movement per category over the coming week"}
                </p>

                {if trend.series.is_empty() {
                    html! {
                        <div class="text-center py-8 text-gray-500">
                            <i class="fas fa-chart-line text-4xl mb-4 opacity-50"></i>
                            <p>{"No trend data for this store."}</p>
                            <p class="text-sm mt-2">{"Upload sales history to generate predictions."}</p>
                        </div>
                    }
                } else {
                    html! { <TrendPlot store_id={props.store_id.clone()} trend={trend} /> }
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TrendPlotProps {
    store_id: String,
    trend: ChartData,
}

#[function_component(TrendPlot)]
fn trend_plot(props: &TrendPlotProps) -> Html {
    let container_ref = use_node_ref();
    let trend = props.trend.clone();
    let div_id = format!("trend-chart-{}", props.store_id);

    use_effect_with(
        (container_ref.clone(), trend, div_id.clone()),
        move |(container_ref, trend, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                let data_js = js_sys::Array::new();
                for (idx, series) in trend.series.iter().enumerate() {
                    let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                    let trace = Scatter::new(trend.categories.clone(), series.values())
                        .mode(Mode::LinesMarkers)
                        .name(&series.name)
                        .line(plotly::common::Line::new().color(color).width(2.0));

                    let trace_json = serde_json::to_string(&trace).unwrap();
                    let trace_js = js_sys::JSON::parse(&trace_json).unwrap();
                    data_js.push(&trace_js);
                }

                let layout = Layout::new()
                    .x_axis(plotly::layout::Axis::new()
                        .title(plotly::common::Title::with_text("Horizon")))
                    .y_axis(plotly::layout::Axis::new()
                        .title(plotly::common::Title::with_text("Change (%)")))
                    .height(400);

                let layout_json = serde_json::to_string(&layout).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                newPlot(div_id, data_js.into(), layout_js);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
