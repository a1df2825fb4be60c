use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse};
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use common::TableProfile;
use model::entities::csv_upload;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Serialize;
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::ToSchema;

/// Registered CSV upload response model
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub id: i32,
    /// File name as submitted by the browser
    pub original_name: String,
    /// Number of data rows in the parsed table
    pub row_count: i64,
    /// Number of columns in the parsed table
    pub column_count: i64,
    /// Size of the raw payload in bytes
    pub size_bytes: i64,
    pub uploaded_at: chrono::DateTime<Utc>,
}

impl From<csv_upload::Model> for UploadResponse {
    fn from(model: csv_upload::Model) -> Self {
        Self {
            id: model.id,
            original_name: model.original_name,
            row_count: model.row_count,
            column_count: model.column_count,
            size_bytes: model.size_bytes,
            uploaded_at: model.uploaded_at,
        }
    }
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

/// Whether the submitted file declares itself as CSV.
///
/// Browsers are inconsistent about the MIME type for CSV files (text/csv,
/// application/vnd.ms-excel, sometimes empty), so the `.csv` extension is
/// accepted as a fallback.
fn is_csv_file(file_name: &str, content_type: Option<&str>) -> bool {
    if content_type == Some("text/csv") {
        return true;
    }
    file_name.to_lowercase().ends_with(".csv")
}

/// Name for the file in the upload directory: a millisecond timestamp plus
/// the original name reduced to a safe character set.
fn stored_file_name(original_name: &str) -> String {
    let safe: String = original_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{}-{}", Utc::now().timestamp_millis(), safe)
}

/// Accept a CSV upload
///
/// Expects a multipart body with the raw file bytes under a field named
/// `file`. The file is validated as CSV, parsed to enforce a uniform table
/// shape, stored on disk and registered in the upload table.
#[utoipa::path(
    post,
    path = "/api/v1/uploads",
    tag = "uploads",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Upload accepted and registered", body = ApiResponse<UploadResponse>),
        (status = 400, description = "Missing file field or malformed CSV", body = ErrorResponse),
        (status = 415, description = "File is not a CSV", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, multipart))]
pub async fn create_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadResponse>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_upload function");

    // Pull the `file` field out of the multipart stream.
    let mut upload: Option<(String, Option<String>, Vec<u8>)> = None;
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(multipart_error) => {
                warn!("Malformed multipart body: {}", multipart_error);
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    "MALFORMED_MULTIPART",
                    "Could not read the multipart request body",
                ));
            }
        };

        if field.name() != Some("file") {
            trace!("Skipping multipart field: {:?}", field.name());
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload.csv").to_string();
        let content_type = field.content_type().map(|c| c.to_string());
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(multipart_error) => {
                warn!("Failed to read file field bytes: {}", multipart_error);
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    "MALFORMED_MULTIPART",
                    "Could not read the uploaded file contents",
                ));
            }
        };
        upload = Some((file_name, content_type, bytes));
    }

    let Some((file_name, content_type, bytes)) = upload else {
        warn!("Upload request without a 'file' field");
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "MISSING_FILE_FIELD",
            "Multipart body must contain a 'file' field",
        ));
    };
    debug!(
        "Received file '{}' ({} bytes, content type {:?})",
        file_name,
        bytes.len(),
        content_type
    );

    if !is_csv_file(&file_name, content_type.as_deref()) {
        warn!(
            "Rejecting non-CSV upload '{}' with content type {:?}",
            file_name, content_type
        );
        return Err(error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "UNSUPPORTED_FILE_TYPE",
            "Only CSV files are accepted",
        ));
    }

    let text = match String::from_utf8(bytes.clone()) {
        Ok(text) => text,
        Err(_) => {
            warn!("Upload '{}' is not valid UTF-8", file_name);
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "INVALID_ENCODING",
                "CSV file must be UTF-8 encoded",
            ));
        }
    };

    let table = match compute::parse_csv(&text) {
        Ok(table) => table,
        Err(parse_error) => {
            warn!("Upload '{}' failed to parse: {}", file_name, parse_error);
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "INVALID_CSV",
                format!("Could not parse CSV file: {}", parse_error),
            ));
        }
    };
    debug!(
        "Parsed '{}' into {} rows x {} columns",
        file_name,
        table.row_count(),
        table.column_count()
    );

    // Persist the original bytes, not the parsed table.
    let stored_name = stored_file_name(&file_name);
    let stored_path = state.upload_dir.join(&stored_name);
    trace!("Writing upload to {}", stored_path.display());
    if let Err(io_error) = tokio::fs::write(&stored_path, &bytes).await {
        error!(
            "Failed to store upload '{}' at {}: {}",
            file_name,
            stored_path.display(),
            io_error
        );
        return Err(error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "STORAGE_ERROR",
            "Could not store the uploaded file",
        ));
    }

    let record = csv_upload::ActiveModel {
        original_name: Set(file_name.clone()),
        stored_name: Set(stored_name),
        size_bytes: Set(bytes.len() as i64),
        row_count: Set(table.row_count() as i64),
        column_count: Set(table.column_count() as i64),
        uploaded_at: Set(Utc::now()),
        ..Default::default()
    };

    match record.insert(&state.db).await {
        Ok(model) => {
            info!(
                "Registered upload '{}' with ID {} ({} rows)",
                model.original_name, model.id, model.row_count
            );
            let response = ApiResponse {
                data: UploadResponse::from(model),
                message: "Upload accepted successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!("Failed to register upload '{}': {}", file_name, db_error);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Could not register the uploaded file",
            ))
        }
    }
}

/// List registered uploads
#[utoipa::path(
    get,
    path = "/api/v1/uploads",
    tag = "uploads",
    responses(
        (status = 200, description = "Uploads retrieved successfully", body = ApiResponse<Vec<UploadResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_uploads(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UploadResponse>>>, StatusCode> {
    trace!("Entering get_uploads function");

    match csv_upload::Entity::find()
        .order_by_desc(csv_upload::Column::UploadedAt)
        .all(&state.db)
        .await
    {
        Ok(uploads) => {
            debug!("Retrieved {} uploads from database", uploads.len());
            let responses: Vec<UploadResponse> =
                uploads.into_iter().map(UploadResponse::from).collect();

            Ok(Json(ApiResponse {
                data: responses,
                message: "Uploads retrieved successfully".to_string(),
                success: true,
            }))
        }
        Err(db_error) => {
            error!("Failed to retrieve uploads: {}", db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Get the per-column profile of an upload
///
/// Re-reads the stored file, parses it and summarizes each column. The
/// profile is cached; repeated requests for the same upload are served
/// from the cache until it expires.
#[utoipa::path(
    get,
    path = "/api/v1/uploads/{upload_id}/profile",
    tag = "uploads",
    params(
        ("upload_id" = i32, Path, description = "Upload ID"),
    ),
    responses(
        (status = 200, description = "Profile computed successfully", body = ApiResponse<TableProfile>),
        (status = 404, description = "Upload not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_upload_profile(
    Path(upload_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TableProfile>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_upload_profile function for upload: {}", upload_id);

    let cache_key = format!("upload_profile:{}", upload_id);
    if let Some(CachedData::Profile(profile)) = state.cache.get(&cache_key).await {
        debug!("Serving cached profile for upload {}", upload_id);
        return Ok(Json(ApiResponse {
            data: profile,
            message: "Profile retrieved successfully".to_string(),
            success: true,
        }));
    }

    let record = match csv_upload::Entity::find_by_id(upload_id).one(&state.db).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            warn!("Upload {} not found", upload_id);
            return Err(error_response(
                StatusCode::NOT_FOUND,
                "UPLOAD_NOT_FOUND",
                format!("No upload with ID {}", upload_id),
            ));
        }
        Err(db_error) => {
            error!("Failed to look up upload {}: {}", upload_id, db_error);
            return Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Could not look up the upload",
            ));
        }
    };

    let stored_path = state.upload_dir.join(&record.stored_name);
    trace!("Reading stored upload from {}", stored_path.display());
    let text = match tokio::fs::read_to_string(&stored_path).await {
        Ok(text) => text,
        Err(io_error) => {
            error!(
                "Stored file for upload {} missing or unreadable at {}: {}",
                upload_id,
                stored_path.display(),
                io_error
            );
            return Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPLOAD_FILE_MISSING",
                "Stored upload file could not be read",
            ));
        }
    };

    let table = match compute::parse_csv(&text) {
        Ok(table) => table,
        Err(parse_error) => {
            // The file was validated at upload time, so this means the
            // stored copy was modified or truncated afterwards.
            error!(
                "Stored file for upload {} no longer parses: {}",
                upload_id, parse_error
            );
            return Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPLOAD_FILE_CORRUPT",
                "Stored upload file is no longer valid CSV",
            ));
        }
    };

    let profile = compute::profile_table(&table);
    state
        .cache
        .insert(cache_key, CachedData::Profile(profile.clone()))
        .await;
    info!(
        "Profiled upload {} ({} rows x {} columns)",
        upload_id, profile.row_count, profile.column_count
    );

    Ok(Json(ApiResponse {
        data: profile,
        message: "Profile computed successfully".to_string(),
        success: true,
    }))
}
