use common::ChartData;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::api_client::stores::get_demand_overview;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

/// Cross-store demand overview: grouped bars of predicted change and
/// confidence per tracked category.
#[function_component(OverviewChart)]
pub fn overview_chart() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(get_demand_overview);

    let on_retry = {
        let refetch = refetch.clone();
        Callback::from(move |_| refetch.emit(()))
    };

    let render = Callback::from(|chart: ChartData| {
        if chart.categories.is_empty() {
            html! {
                <div class="text-center py-8 text-gray-500">
                    <i class="fas fa-chart-bar text-4xl mb-4 opacity-50"></i>
                    <p>{"No demand predictions available."}</p>
                </div>
            }
        } else {
            html! { <OverviewPlot chart={chart} /> }
        }
    });

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Demand Overview"}</h3>
                <p class="text-sm text-gray-500 mb-4">
                    {"Predicted change and forecast confidence for every tracked category, across all stores"}
                </p>
                <FetchRender<ChartData>
                    state={(*fetch_state).clone()}
                    render={render}
                    on_retry={Some(on_retry)}
                    loading_text={Some("Loading demand overview...".to_string())}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PlotProps {
    chart: ChartData,
}

#[function_component(OverviewPlot)]
fn overview_plot(props: &PlotProps) -> Html {
    let chart_ref = use_node_ref();
    let chart = props.chart.clone();

    use_effect_with((chart_ref.clone(), chart), move |(chart_ref, chart)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let traces: Vec<_> = chart
                .series
                .iter()
                .map(|series| {
                    let color = match series.name.as_str() {
                        "Confidence" => "#10b981",
                        _ => "#3b82f6",
                    };
                    serde_json::json!({
                        "x": chart.categories,
                        "y": series.values(),
                        "type": "bar",
                        "name": series.name,
                        "marker": {"color": color}
                    })
                })
                .collect();

            let layout = serde_json::json!({
                "barmode": "group",
                "margin": {"t": 10, "r": 10, "l": 50, "b": 90},
                "paper_bgcolor": "rgba(0,0,0,0)",
                "plot_bgcolor": "rgba(0,0,0,0)",
                "xaxis": {"showgrid": false, "tickangle": -35},
                "yaxis": {"showgrid": true, "gridcolor": "#eee", "title": {"text": "Percent"}},
                "showlegend": true,
                "legend": {"orientation": "h", "y": -0.4}
            });

            let config = serde_json::json!({"responsive": true, "displayModeBar": false});

            let div_id = element.id();
            if !div_id.is_empty() {
                newPlot(
                    &div_id,
                    serde_wasm_bindgen::to_value(&traces).unwrap(),
                    serde_wasm_bindgen::to_value(&layout).unwrap(),
                    serde_wasm_bindgen::to_value(&config).unwrap(),
                );
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id="chart-demand-overview" class="chart-container" style="height: 360px;"></div>
    }
}
