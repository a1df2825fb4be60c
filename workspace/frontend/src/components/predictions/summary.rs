use common::StorePrediction;
use compute::{is_gain, parse_signed_percent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub prediction: StorePrediction,
}

/// Stat cards summarizing a store's short-term outlook.
#[function_component(StoreSummary)]
pub fn store_summary(props: &Props) -> Html {
    let changes = &props.prediction.short_term_predictions.demand_changes;

    let gains = changes
        .iter()
        .filter(|c| is_gain(&c.predicted_change))
        .count();
    let declines = changes.len() - gains;

    // Biggest absolute mover, ignoring entries whose percent does not parse.
    let top_mover = changes
        .iter()
        .filter_map(|c| {
            parse_signed_percent(&c.predicted_change)
                .ok()
                .map(|value| (c, value))
        })
        .max_by(|(_, a), (_, b)| a.abs().total_cmp(&b.abs()));

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Tracked Categories"}</div>
                    <div class="stat-value text-primary">{changes.len()}</div>
                    <div class="stat-desc">{"Short-term demand shifts"}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Gains vs Declines"}</div>
                    <div class="stat-value">
                        <span class="text-success">{gains}</span>
                        {" / "}
                        <span class="text-error">{declines}</span>
                    </div>
                    <div class="stat-desc">{"Categories moving up / down"}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Top Mover"}</div>
                    {if let Some((change, _)) = top_mover {
                        let value_class = if is_gain(&change.predicted_change) {
                            "stat-value text-success"
                        } else {
                            "stat-value text-error"
                        };
                        html! {
                            <>
                                <div class={value_class}>{&change.predicted_change}</div>
                                <div class="stat-desc">{&change.category}</div>
                            </>
                        }
                    } else {
                        html! {
                            <>
                                <div class="stat-value">{"n/a"}</div>
                                <div class="stat-desc">{"No predictions yet"}</div>
                            </>
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
