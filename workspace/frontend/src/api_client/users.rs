use common::{SignupRequest, UserDto};

use crate::api_client;

/// Join the early-access list.
pub async fn create_signup(request: SignupRequest) -> Result<UserDto, String> {
    log::debug!("Submitting signup for: {}", request.username);
    let result: Result<UserDto, String> = api_client::post("/users", &request).await;
    match &result {
        Ok(user) => log::info!("Signed up {} (ID: {})", user.username, user.id),
        Err(e) => log::error!("Failed to sign up '{}': {}", request.username, e),
    }
    result
}
