use common::SeriesData;
use compute::swap_axes;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::static_data;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

fn series_color(name: &str) -> &'static str {
    match name {
        "Received Amount" => "#5750F1",
        _ => "#0ABEF9",
    }
}

/// Received vs due payments over the trailing year.
///
/// Renders as smooth stacked areas by default; the swap button re-keys the
/// same data into labelled points and draws stacked bars instead.
#[function_component(PaymentsChart)]
pub fn payments_chart() -> Html {
    let swapped = use_state(|| false);
    let chart_ref = use_node_ref();

    let on_swap = {
        let swapped = swapped.clone();
        Callback::from(move |_| {
            log::debug!("Payments chart swap toggled");
            swapped.set(!*swapped);
        })
    };

    use_effect_with((chart_ref.clone(), *swapped), move |(chart_ref, is_swapped)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let data = static_data::payments_chart();

            let traces: Vec<_> = if *is_swapped {
                swap_axes(&data)
                    .series
                    .iter()
                    .map(|series| {
                        let points = match &series.data {
                            SeriesData::Points(points) => points.clone(),
                            SeriesData::Numbers(_) => Vec::new(),
                        };
                        let xs: Vec<String> = points.iter().map(|p| p.x.clone()).collect();
                        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
                        serde_json::json!({
                            "x": xs,
                            "y": ys,
                            "type": "bar",
                            "name": series.name,
                            "marker": {"color": series_color(&series.name)}
                        })
                    })
                    .collect()
            } else {
                data.series
                    .iter()
                    .map(|series| {
                        serde_json::json!({
                            "x": data.categories,
                            "y": series.values(),
                            "type": "scatter",
                            "mode": "lines",
                            "fill": "tozeroy",
                            "line": {"color": series_color(&series.name), "shape": "spline"},
                            "name": series.name
                        })
                    })
                    .collect()
            };

            let layout = serde_json::json!({
                "barmode": "stack",
                "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
                "paper_bgcolor": "rgba(0,0,0,0)",
                "plot_bgcolor": "rgba(0,0,0,0)",
                "xaxis": {"showgrid": false},
                "yaxis": {"showgrid": true, "gridcolor": "#eee"},
                "showlegend": true,
                "legend": {"orientation": "h", "y": -0.2}
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
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title text-lg">{"Payments Overview"}</h3>
                    <button class="btn btn-ghost btn-sm" title="Swap axes" onclick={on_swap}>
                        <i class="fas fa-right-left"></i>
                        {if *swapped { " Area" } else { " Bars" }}
                    </button>
                </div>

                <div ref={chart_ref} id="chart-payments" class="chart-container" style="height: 310px;"></div>

                <div class="flex flex-col gap-2 text-center sm:flex-row sm:gap-0 mt-4">
                    <div class="sm:w-1/2 sm:border-r border-base-300">
                        <p class="font-medium">{"Received Amount"}</p>
                        <h4 class="mt-1 text-xl font-bold">{static_data::RECEIVED_TOTAL}</h4>
                    </div>
                    <div class="sm:w-1/2">
                        <p class="font-medium">{"Due Amount"}</p>
                        <h4 class="mt-1 text-xl font-bold">{static_data::DUE_TOTAL}</h4>
                    </div>
                </div>
            </div>
        </div>
    }
}
