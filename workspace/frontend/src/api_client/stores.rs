use std::collections::BTreeMap;

use common::{ChartData, StorePrediction};

use crate::api_client;

/// Get the prediction bundles for every store, keyed by store id.
pub async fn get_all_predictions() -> Result<BTreeMap<String, StorePrediction>, String> {
    log::trace!("Fetching predictions for all stores");
    let result: Result<BTreeMap<String, StorePrediction>, String> =
        api_client::get("/stores/predictions").await;
    match &result {
        Ok(predictions) => log::info!("Fetched predictions for {} stores", predictions.len()),
        Err(e) => log::error!("Failed to fetch store predictions: {}", e),
    }
    result
}

/// Get the cross-store demand overview chart.
pub async fn get_demand_overview() -> Result<ChartData, String> {
    log::trace!("Fetching demand overview chart");
    let result: Result<ChartData, String> = api_client::get("/stores/demand-overview").await;
    match &result {
        Ok(chart) => log::info!("Fetched demand overview with {} series", chart.series.len()),
        Err(e) => log::error!("Failed to fetch demand overview: {}", e),
    }
    result
}
