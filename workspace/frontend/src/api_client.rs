pub mod stores;
pub mod uploads;
pub mod users;

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::settings;

pub use common::ApiResponse;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Error payload returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub success: bool,
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        return Err(read_error(response, "GET", endpoint).await);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(api_response.data)
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        return Err(read_error(response, "POST", endpoint).await);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(api_response.data)
}

/// Multipart POST handler for file uploads.
///
/// The browser fills in the multipart boundary itself, so no Content-Type
/// header is set here.
pub async fn post_multipart<T>(endpoint: &str, form: web_sys::FormData) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST (multipart) request to: {}", url);

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| {
            let error_msg = format!("Failed to build request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        return Err(read_error(response, "POST", endpoint).await);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let api_response: ApiResponse<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(api_response.data)
}

/// Extract a readable message from a non-OK response.
///
/// Prefers the structured [`ErrorResponse`] body and falls back to the bare
/// HTTP status when the body is not JSON.
async fn read_error(response: gloo_net::http::Response, method: &str, endpoint: &str) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(err) => {
            log::error!("{} {} - API error: {}", method, endpoint, err.error);
            format!("Error: {}", err.error)
        }
        Err(_) => {
            let error_msg = format!("HTTP error: {}", status);
            log::error!("{} {} - {}", method, endpoint, error_msg);
            error_msg
        }
    }
}
