//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' request/response payloads
//! so the frontend can deserialize API responses without duplicating shapes.

mod charts;
mod predictions;
mod sample;

pub use charts::{ChartData, ChartSeries, SeriesData, SeriesPoint};
pub use predictions::{
    DemandChange, DemographicShift, EmergingCategory, InfrastructureDevelopment, LongTermOutlook,
    MidTermOutlook, PeakHours, PopulationEvolution, RecommendedAdaptation, ShortTermOutlook, Store,
    StorePrediction, store_catalog,
};
pub use sample::sample_predictions;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
/// Note: The backend has its own definition in demandcast/src/schemas.rs with
/// the same field names. We mirror it here for the frontend to reuse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

// ===================== Users =====================

/// Request body for joining the early-access list (mirrors backend).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
}

/// User response model (mirrors backend UserResponse).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
}

// ===================== Uploads =====================

/// Stored CSV upload record (mirrors backend UploadResponse).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UploadDto {
    pub id: i32,
    /// File name as submitted by the browser.
    pub original_name: String,
    /// Parsed dimensions of the table.
    pub row_count: i64,
    pub column_count: i64,
    /// Size of the raw payload in bytes.
    pub size_bytes: i64,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

/// Per-column summary of an uploaded table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ColumnProfile {
    pub name: String,
    /// Cells that contain any non-whitespace text.
    pub non_empty: u64,
    /// Cells that parse as numbers.
    pub numeric: u64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

/// Whole-table summary of an uploaded CSV.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TableProfile {
    pub row_count: u64,
    pub column_count: u64,
    pub columns: Vec<ColumnProfile>,
}

// ===================== Weather =====================

/// Request body for fetching weather across several locations at once.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BulkWeatherRequest {
    pub locations: Vec<String>,
}
