use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    response::Json,
};
use common::{ChartData, Store, StorePrediction, store_catalog};
use tracing::{debug, info, instrument, trace, warn};

use crate::schemas::{ApiResponse, AppState};

/// List all stores in the catalog
#[utoipa::path(
    get,
    path = "/api/v1/stores",
    tag = "stores",
    responses(
        (status = 200, description = "Stores retrieved successfully", body = ApiResponse<Vec<Store>>)
    )
)]
#[instrument(skip(state))]
pub async fn get_stores(State(state): State<AppState>) -> Json<ApiResponse<Vec<Store>>> {
    trace!("Entering get_stores function");
    let stores = store_catalog();
    debug!("Catalog contains {} stores, {} with predictions", stores.len(), state.predictions.len());

    Json(ApiResponse {
        data: stores,
        message: "Stores retrieved successfully".to_string(),
        success: true,
    })
}

/// Get the prediction tree for every store
#[utoipa::path(
    get,
    path = "/api/v1/stores/predictions",
    tag = "stores",
    responses(
        (status = 200, description = "Predictions retrieved successfully", body = ApiResponse<BTreeMap<String, StorePrediction>>)
    )
)]
#[instrument(skip(state))]
pub async fn get_all_predictions(
    State(state): State<AppState>,
) -> Json<ApiResponse<BTreeMap<String, StorePrediction>>> {
    trace!("Entering get_all_predictions function");
    let predictions = state.predictions.as_ref().clone();
    info!("Returning predictions for {} stores", predictions.len());

    Json(ApiResponse {
        data: predictions,
        message: "Predictions retrieved successfully".to_string(),
        success: true,
    })
}

/// Get the prediction tree for one store
///
/// Unknown store ids answer 200 with an empty-but-complete prediction
/// shape so dashboard pages can render their skeleton without special
/// casing missing stores.
#[utoipa::path(
    get,
    path = "/api/v1/stores/{store_id}/predictions",
    tag = "stores",
    params(
        ("store_id" = String, Path, description = "Store ID"),
    ),
    responses(
        (status = 200, description = "Prediction retrieved successfully", body = ApiResponse<StorePrediction>)
    )
)]
#[instrument(skip(state))]
pub async fn get_store_prediction(
    Path(store_id): Path<String>,
    State(state): State<AppState>,
) -> Json<ApiResponse<StorePrediction>> {
    trace!("Entering get_store_prediction function for store: {}", store_id);

    match state.predictions.get(&store_id) {
        Some(prediction) => {
            info!("Returning prediction for store {}", store_id);
            Json(ApiResponse {
                data: prediction.clone(),
                message: "Prediction retrieved successfully".to_string(),
                success: true,
            })
        }
        None => {
            warn!("No prediction for store {}; returning empty shape", store_id);
            Json(ApiResponse {
                data: StorePrediction::empty(),
                message: "No predictions for this store yet".to_string(),
                success: true,
            })
        }
    }
}

/// Get the cross-store demand overview chart
///
/// One category per short-term demand change across every store, with
/// parallel Change and Confidence series. This payload does not depend on
/// any dashboard selection, so it is derived server side.
#[utoipa::path(
    get,
    path = "/api/v1/stores/demand-overview",
    tag = "stores",
    responses(
        (status = 200, description = "Demand overview retrieved successfully", body = ApiResponse<ChartData>)
    )
)]
#[instrument(skip(state))]
pub async fn get_demand_overview(State(state): State<AppState>) -> Json<ApiResponse<ChartData>> {
    trace!("Entering get_demand_overview function");

    let overview = compute::demand_overview(&state.predictions);
    debug!("Overview spans {} categories", overview.categories.len());

    Json(ApiResponse {
        data: overview,
        message: "Demand overview retrieved successfully".to_string(),
        success: true,
    })
}
