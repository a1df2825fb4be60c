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
        "Sales" => "#5750F1",
        _ => "#0ABEF9",
    }
}

/// Sales and revenue per weekday.
///
/// Grouped vertical bars by default; swapping flips to horizontal stacked
/// bars built from labelled points.
#[function_component(WeeklyChart)]
pub fn weekly_chart() -> Html {
    let swapped = use_state(|| false);
    let chart_ref = use_node_ref();

    let on_swap = {
        let swapped = swapped.clone();
        Callback::from(move |_| {
            log::debug!("Weekly chart swap toggled");
            swapped.set(!*swapped);
        })
    };

    use_effect_with((chart_ref.clone(), *swapped), move |(chart_ref, is_swapped)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let data = static_data::weekly_chart();

            let (traces, barmode) = if *is_swapped {
                let traces: Vec<_> = swap_axes(&data)
                    .series
                    .iter()
                    .map(|series| {
                        let points = match &series.data {
                            SeriesData::Points(points) => points.clone(),
                            SeriesData::Numbers(_) => Vec::new(),
                        };
                        let labels: Vec<String> = points.iter().map(|p| p.x.clone()).collect();
                        let values: Vec<f64> = points.iter().map(|p| p.y).collect();
                        serde_json::json!({
                            "x": values,
                            "y": labels,
                            "type": "bar",
                            "orientation": "h",
                            "name": series.name,
                            "marker": {"color": series_color(&series.name)}
                        })
                    })
                    .collect();
                (traces, "stack")
            } else {
                let traces: Vec<_> = data
                    .series
                    .iter()
                    .map(|series| {
                        serde_json::json!({
                            "x": data.categories,
                            "y": series.values(),
                            "type": "bar",
                            "name": series.name,
                            "marker": {"color": series_color(&series.name)}
                        })
                    })
                    .collect();
                (traces, "group")
            };

            let layout = serde_json::json!({
                "barmode": barmode,
                "margin": {"t": 10, "r": 10, "l": 40, "b": 30},
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
        <div class="card bg-base-100 shadow h-full">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title text-lg">{"Profit this week"}</h3>
                    <button class="btn btn-ghost btn-sm" title="Swap axes" onclick={on_swap}>
                        <i class="fas fa-right-left"></i>
                        {if *swapped { " Vertical" } else { " Horizontal" }}
                    </button>
                </div>

                <div ref={chart_ref} id="chart-weekly" class="chart-container" style="height: 310px;"></div>
            </div>
        </div>
    }
}
