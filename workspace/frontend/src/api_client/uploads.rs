use common::UploadDto;
use web_sys::FormData;

use crate::api_client;

/// Upload a CSV file to the backend for storage and profiling.
///
/// The file travels as the `file` field of a multipart form, exactly as a
/// plain HTML form submit would send it.
pub async fn upload_csv(file: &web_sys::File) -> Result<UploadDto, String> {
    log::debug!("Uploading CSV file: {}", file.name());

    let form = FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Failed to attach file to form".to_string())?;

    let result: Result<UploadDto, String> = api_client::post_multipart("/uploads", form).await;
    match &result {
        Ok(upload) => log::info!(
            "Uploaded '{}' as upload #{} ({} rows)",
            upload.original_name,
            upload.id,
            upload.row_count
        ),
        Err(e) => log::error!("Failed to upload '{}': {}", file.name(), e),
    }
    result
}

/// Get all stored uploads, newest first.
pub async fn get_uploads() -> Result<Vec<UploadDto>, String> {
    log::trace!("Fetching upload history");
    let result: Result<Vec<UploadDto>, String> = api_client::get("/uploads").await;
    match &result {
        Ok(uploads) => log::info!("Fetched {} uploads", uploads.len()),
        Err(e) => log::error!("Failed to fetch uploads: {}", e),
    }
    result
}
