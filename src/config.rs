use anyhow::Result;
use moka::future::Cache;
use sea_orm::Database;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::schemas::{AppState, WeatherConfig};

/// Initialize application configuration and state
pub async fn initialize_app_state() -> Result<AppState> {
    // Load configuration
    dotenvy::dotenv().ok();
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://demandcast.db".to_string());

    initialize_app_state_with_url(&database_url).await
}

/// Initialize application state against an explicit database URL
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    dotenvy::dotenv().ok();

    // Connect to database
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    // Initialize cache
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    // Ensure the upload directory exists
    let upload_dir = get_upload_dir();
    tracing::info!("Using upload directory: {}", upload_dir.display());
    tokio::fs::create_dir_all(&upload_dir).await?;

    let weather = get_weather_config();
    if weather.api_key.is_none() {
        tracing::warn!("WEATHER_API_KEY not set; weather routes will answer 503");
    }

    let predictions = Arc::new(common::sample_predictions());
    tracing::info!("Loaded predictions for {} stores", predictions.len());

    Ok(AppState {
        db,
        cache,
        predictions,
        upload_dir,
        weather,
        http: reqwest::Client::new(),
    })
}

/// Get bind address from environment or use default
pub fn get_bind_address() -> String {
    std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}

/// Get upload directory from environment or use default
pub fn get_upload_dir() -> PathBuf {
    std::env::var("UPLOAD_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("uploads"))
}

/// Get upstream weather configuration from environment
pub fn get_weather_config() -> WeatherConfig {
    WeatherConfig {
        api_key: std::env::var("WEATHER_API_KEY").ok(),
        base_url: std::env::var("WEATHER_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.weatherapi.com/v1".to_string()),
    }
}
