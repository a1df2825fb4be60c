use crate::handlers::{
    health::health_check,
    stores::{get_all_predictions, get_demand_overview, get_store_prediction, get_stores},
    uploads::{create_upload, get_upload_profile, get_uploads},
    users::{create_user, get_users},
    weather::{get_bulk_weather, get_future_weather, get_weather_alerts},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Store and prediction routes
        .route("/api/v1/stores", get(get_stores))
        .route("/api/v1/stores/predictions", get(get_all_predictions))
        .route("/api/v1/stores/demand-overview", get(get_demand_overview))
        .route("/api/v1/stores/:store_id/predictions", get(get_store_prediction))
        // CSV upload routes
        .route("/api/v1/uploads", post(create_upload))
        .route("/api/v1/uploads", get(get_uploads))
        .route("/api/v1/uploads/:upload_id/profile", get(get_upload_profile))
        // Early access signup routes
        .route("/api/v1/users", post(create_user))
        .route("/api/v1/users", get(get_users))
        // Weather proxy routes
        .route("/api/v1/weather/alerts", get(get_weather_alerts))
        .route("/api/v1/weather/future", get(get_future_weather))
        .route("/api/v1/weather/bulk", post(get_bulk_weather))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
