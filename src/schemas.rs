use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use common::{
    BulkWeatherRequest, ChartData, ChartSeries, ColumnProfile, DemandChange, DemographicShift,
    EmergingCategory, InfrastructureDevelopment, LongTermOutlook, MidTermOutlook, PeakHours,
    PopulationEvolution, RecommendedAdaptation, SeriesData, SeriesPoint, ShortTermOutlook,
    SignupRequest, Store, StorePrediction, TableProfile,
};
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cache for expensive operations
    pub cache: Cache<String, CachedData>,
    /// Prediction tree per store id, loaded once at startup
    pub predictions: Arc<BTreeMap<String, StorePrediction>>,
    /// Directory where accepted CSV uploads are stored
    pub upload_dir: PathBuf,
    /// Upstream weather service configuration
    pub weather: WeatherConfig,
    /// Shared HTTP client for upstream calls
    pub http: reqwest::Client,
}

/// Upstream weather service configuration.
/// The key is optional; without it the weather routes answer 503.
#[derive(Clone, Debug)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Profile(TableProfile),
    Weather(serde_json::Value),
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::stores::get_stores,
        crate::handlers::stores::get_all_predictions,
        crate::handlers::stores::get_store_prediction,
        crate::handlers::stores::get_demand_overview,
        crate::handlers::uploads::create_upload,
        crate::handlers::uploads::get_uploads,
        crate::handlers::uploads::get_upload_profile,
        crate::handlers::users::create_user,
        crate::handlers::users::get_users,
        crate::handlers::weather::get_weather_alerts,
        crate::handlers::weather::get_future_weather,
        crate::handlers::weather::get_bulk_weather,
    ),
    components(
        schemas(
            ApiResponse<Vec<Store>>,
            ApiResponse<StorePrediction>,
            ApiResponse<BTreeMap<String, StorePrediction>>,
            ApiResponse<ChartData>,
            ApiResponse<TableProfile>,
            ApiResponse<crate::handlers::uploads::UploadResponse>,
            ApiResponse<Vec<crate::handlers::uploads::UploadResponse>>,
            ApiResponse<crate::handlers::users::UserResponse>,
            ApiResponse<Vec<crate::handlers::users::UserResponse>>,
            ErrorResponse,
            HealthResponse,
            Store,
            StorePrediction,
            ShortTermOutlook,
            MidTermOutlook,
            LongTermOutlook,
            DemandChange,
            PeakHours,
            EmergingCategory,
            DemographicShift,
            PopulationEvolution,
            InfrastructureDevelopment,
            RecommendedAdaptation,
            ChartData,
            ChartSeries,
            SeriesData,
            SeriesPoint,
            TableProfile,
            ColumnProfile,
            SignupRequest,
            BulkWeatherRequest,
            crate::handlers::uploads::UploadResponse,
            crate::handlers::users::UserResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "stores", description = "Store catalog and demand prediction endpoints"),
        (name = "uploads", description = "CSV upload and profiling endpoints"),
        (name = "users", description = "Early-access signup endpoints"),
        (name = "weather", description = "Upstream weather proxy endpoints"),
    ),
    info(
        title = "Demandcast API",
        description = "Hyperlocal Demand Forecasting API - store-level demand predictions, CSV ingestion and dashboard data",
        version = "0.1.0",
        contact(
            name = "Demandcast Team",
            email = "contact@demandcast.app"
        ),
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
