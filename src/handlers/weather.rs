use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use common::BulkWeatherRequest;
use serde::Deserialize;
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for the weather alerts endpoint
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct AlertsQuery {
    /// Location query (city name, postcode or coordinates)
    pub location: String,
}

/// Query parameters for the future weather endpoint
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct FutureQuery {
    /// Location query (city name, postcode or coordinates)
    pub location: String,
    /// Date in YYYY-MM-DD format, between 14 and 300 days ahead
    pub date: String,
}

fn error_response(
    status: StatusCode,
    code: &str,
    message: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            code: code.to_string(),
            success: false,
        }),
    )
}

/// Returns the configured API key or the 503 answer the weather routes
/// share when the deployment has no key.
fn require_api_key(state: &AppState) -> Result<String, (StatusCode, Json<ErrorResponse>)> {
    match &state.weather.api_key {
        Some(key) => Ok(key.clone()),
        None => {
            warn!("Weather request rejected: no upstream API key configured");
            Err(error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "WEATHER_NOT_CONFIGURED",
                "Weather service is not configured on this deployment",
            ))
        }
    }
}

fn upstream_error(context: &str) -> (StatusCode, Json<ErrorResponse>) {
    error_response(
        StatusCode::BAD_GATEWAY,
        "UPSTREAM_WEATHER_ERROR",
        format!("Could not retrieve {} from the weather service", context),
    )
}

/// Decodes an upstream response, treating non-2xx statuses as errors.
async fn decode_upstream(
    response: reqwest::Response,
    context: &str,
) -> Result<serde_json::Value, (StatusCode, Json<ErrorResponse>)> {
    let status = response.status();
    if !status.is_success() {
        warn!("Upstream weather service answered {} for {}", status, context);
        return Err(upstream_error(context));
    }
    response.json::<serde_json::Value>().await.map_err(|decode_error| {
        warn!("Upstream weather response for {} is not JSON: {}", context, decode_error);
        upstream_error(context)
    })
}

/// Get active weather alerts for a location
///
/// Proxies the upstream alerts endpoint and narrows the response to its
/// alerts object. Responses are cached per location.
#[utoipa::path(
    get,
    path = "/api/v1/weather/alerts",
    tag = "weather",
    params(AlertsQuery),
    responses(
        (status = 200, description = "Alerts retrieved successfully"),
        (status = 502, description = "Upstream weather service failed", body = ErrorResponse),
        (status = 503, description = "Weather service not configured", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_weather_alerts(
    Query(query): Query<AlertsQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<serde_json::Value>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_weather_alerts function");
    let api_key = require_api_key(&state)?;

    let cache_key = format!("weather_alerts:{}", query.location);
    if let Some(CachedData::Weather(alerts)) = state.cache.get(&cache_key).await {
        debug!("Serving cached alerts for '{}'", query.location);
        return Ok(Json(ApiResponse {
            data: alerts,
            message: "Weather alerts retrieved successfully".to_string(),
            success: true,
        }));
    }

    let url = format!("{}/alerts.json", state.weather.base_url.trim_end_matches('/'));
    debug!("Fetching weather alerts for '{}'", query.location);
    let response = state
        .http
        .get(&url)
        .query(&[("key", api_key.as_str()), ("q", query.location.as_str())])
        .send()
        .await
        .map_err(|transport_error| {
            error!("Failed to reach weather service: {}", transport_error);
            upstream_error("alerts")
        })?;

    let body = decode_upstream(response, "alerts").await?;
    let alerts = body
        .get("alerts")
        .cloned()
        .unwrap_or_else(|| serde_json::json!({}));

    state
        .cache
        .insert(cache_key, CachedData::Weather(alerts.clone()))
        .await;
    info!("Retrieved weather alerts for '{}'", query.location);

    Ok(Json(ApiResponse {
        data: alerts,
        message: "Weather alerts retrieved successfully".to_string(),
        success: true,
    }))
}

/// Get the forecast for a future date
///
/// Proxies the upstream future weather endpoint. The upstream service
/// accepts dates between 14 and 300 days ahead; anything else comes back
/// as an upstream failure. Responses are cached per location and date.
#[utoipa::path(
    get,
    path = "/api/v1/weather/future",
    tag = "weather",
    params(FutureQuery),
    responses(
        (status = 200, description = "Future weather retrieved successfully"),
        (status = 502, description = "Upstream weather service failed", body = ErrorResponse),
        (status = 503, description = "Weather service not configured", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_future_weather(
    Query(query): Query<FutureQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<serde_json::Value>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_future_weather function");
    let api_key = require_api_key(&state)?;

    let cache_key = format!("weather_future:{}:{}", query.location, query.date);
    if let Some(CachedData::Weather(forecast)) = state.cache.get(&cache_key).await {
        debug!(
            "Serving cached future weather for '{}' on {}",
            query.location, query.date
        );
        return Ok(Json(ApiResponse {
            data: forecast,
            message: "Future weather retrieved successfully".to_string(),
            success: true,
        }));
    }

    let url = format!("{}/future.json", state.weather.base_url.trim_end_matches('/'));
    debug!(
        "Fetching future weather for '{}' on {}",
        query.location, query.date
    );
    let response = state
        .http
        .get(&url)
        .query(&[
            ("key", api_key.as_str()),
            ("q", query.location.as_str()),
            ("dt", query.date.as_str()),
        ])
        .send()
        .await
        .map_err(|transport_error| {
            error!("Failed to reach weather service: {}", transport_error);
            upstream_error("future weather")
        })?;

    let forecast = decode_upstream(response, "future weather").await?;

    state
        .cache
        .insert(cache_key, CachedData::Weather(forecast.clone()))
        .await;
    info!(
        "Retrieved future weather for '{}' on {}",
        query.location, query.date
    );

    Ok(Json(ApiResponse {
        data: forecast,
        message: "Future weather retrieved successfully".to_string(),
        success: true,
    }))
}

/// Get current weather for several locations at once
///
/// Forwards the location list to the upstream bulk endpoint and narrows
/// the response to its bulk array. Bulk responses are not cached.
#[utoipa::path(
    post,
    path = "/api/v1/weather/bulk",
    tag = "weather",
    request_body = BulkWeatherRequest,
    responses(
        (status = 200, description = "Bulk weather retrieved successfully"),
        (status = 502, description = "Upstream weather service failed", body = ErrorResponse),
        (status = 503, description = "Weather service not configured", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_bulk_weather(
    State(state): State<AppState>,
    Json(payload): Json<BulkWeatherRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_bulk_weather function");
    let api_key = require_api_key(&state)?;
    debug!("Fetching bulk weather for {} locations", payload.locations.len());

    // Upstream bulk requests use the current-conditions endpoint with a
    // literal q=bulk marker and the locations in the body.
    let url = format!(
        "{}/current.json?q=bulk",
        state.weather.base_url.trim_end_matches('/')
    );
    let locations: Vec<serde_json::Value> = payload
        .locations
        .iter()
        .map(|location| serde_json::json!({ "q": location }))
        .collect();

    let response = state
        .http
        .post(&url)
        .query(&[("key", api_key.as_str())])
        .json(&serde_json::json!({ "locations": locations }))
        .send()
        .await
        .map_err(|transport_error| {
            error!("Failed to reach weather service: {}", transport_error);
            upstream_error("bulk weather")
        })?;

    let body = decode_upstream(response, "bulk weather").await?;
    let bulk = body
        .get("bulk")
        .cloned()
        .unwrap_or_else(|| serde_json::json!([]));
    info!(
        "Retrieved bulk weather for {} locations",
        payload.locations.len()
    );

    Ok(Json(ApiResponse {
        data: bulk,
        message: "Bulk weather retrieved successfully".to_string(),
        success: true,
    }))
}
