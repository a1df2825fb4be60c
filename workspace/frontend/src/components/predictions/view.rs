use common::{StorePrediction, store_catalog};
use yew::prelude::*;

use super::overview_chart::OverviewChart;
use super::summary::StoreSummary;
use super::term_tabs::TermTabs;
use super::trend_chart::TrendChart;
use crate::api_client::stores::get_all_predictions;
use crate::common::error::ErrorDisplay;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::hooks::FetchState;

/// Demand forecast page: cross-store overview plus a per-store drill-down.
#[function_component(Predictions)]
pub fn predictions() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(get_all_predictions);
    let stores = store_catalog();
    let selected_id = use_state(|| stores.first().map(|s| s.id.clone()).unwrap_or_default());

    let on_retry = {
        let refetch = refetch.clone();
        Callback::from(move |_| refetch.emit(()))
    };

    let selector = html! {
        <div class="join flex-wrap">
            {for stores.iter().map(|store| {
                let is_active = store.id == *selected_id;
                let onclick = {
                    let selected_id = selected_id.clone();
                    let id = store.id.clone();
                    Callback::from(move |_| {
                        log::debug!("Store {} selected", id);
                        selected_id.set(id.clone());
                    })
                };
                html! {
                    <button
                        class={classes!("join-item", "btn", "btn-sm", is_active.then_some("btn-primary"))}
                        {onclick}
                    >
                        {&store.name}
                    </button>
                }
            })}
        </div>
    };

    let selected_store = stores.iter().find(|s| s.id == *selected_id).cloned();

    html! {
        <div class="space-y-6">
            <OverviewChart />

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                        <div>
                            <h3 class="card-title text-lg">{"Store Forecast"}</h3>
                            {if let Some(store) = &selected_store {
                                html! {
                                    <p class="text-sm text-gray-500">
                                        <i class="fas fa-location-dot mr-1"></i>
                                        {&store.location}
                                    </p>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
                        {selector}
                    </div>

                    {match &*fetch_state {
                        FetchState::Loading => html! {
                            <div class="flex justify-center items-center py-8">
                                <span class="loading loading-spinner loading-lg"></span>
                            </div>
                        },
                        FetchState::Error(error) => html! {
                            <ErrorDisplay message={error.clone()} on_retry={Some(on_retry.clone())} />
                        },
                        FetchState::Success(predictions) => {
                            // Unknown ids fall back to an empty prediction so the
                            // sections render their empty states.
                            let prediction = predictions
                                .get(&*selected_id)
                                .cloned()
                                .unwrap_or_else(StorePrediction::empty);

                            html! {
                                <div class="space-y-6 mt-4">
                                    <StoreSummary prediction={prediction.clone()} />
                                    <TrendChart store_id={(*selected_id).clone()} prediction={prediction.clone()} />
                                    <TermTabs prediction={prediction} />
                                </div>
                            }
                        },
                        FetchState::NotStarted => html! {},
                    }}
                </div>
            </div>
        </div>
    }
}
