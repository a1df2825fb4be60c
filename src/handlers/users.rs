use crate::schemas::{ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use common::SignupRequest;
use model::entities::user;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, Set};
use serde::Serialize;
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::ToSchema;

/// Early-access signup response model
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            phone: model.phone,
        }
    }
}

/// Whether a database error is a unique-constraint violation.
///
/// SQLite reports these through different DbErr variants depending on the
/// statement path, so we match on the message rather than the variant.
fn is_unique_violation(db_error: &DbErr) -> bool {
    match db_error {
        DbErr::Exec(exec_err) => {
            let message = exec_err.to_string().to_lowercase();
            message.contains("unique") || message.contains("constraint")
        }
        DbErr::Query(query_err) => {
            let message = query_err.to_string().to_lowercase();
            message.contains("unique") || message.contains("constraint")
        }
        _ => false,
    }
}

/// Register an early-access signup
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Signup registered successfully", body = ApiResponse<UserResponse>),
        (status = 409, description = "Username or email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_user function");
    debug!("Registering signup for username: {}", request.username);

    let new_user = user::ActiveModel {
        username: Set(request.username.clone()),
        email: Set(request.email.clone()),
        phone: Set(request.phone.clone()),
        ..Default::default()
    };

    trace!("Attempting to insert signup into database");
    match new_user.insert(&state.db).await {
        Ok(user_model) => {
            info!(
                "Signup registered with ID: {}, username: {}",
                user_model.id, user_model.username
            );
            let response = ApiResponse {
                data: UserResponse::from(user_model),
                message: "Signup registered successfully".to_string(),
                success: true,
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            if is_unique_violation(&db_error) {
                warn!(
                    "Duplicate signup rejected for username '{}' / email '{}'",
                    request.username, request.email
                );
                let error_response = ErrorResponse {
                    error: format!(
                        "Username '{}' or email '{}' is already registered",
                        request.username, request.email
                    ),
                    code: "ALREADY_REGISTERED".to_string(),
                    success: false,
                };
                return Err((StatusCode::CONFLICT, Json(error_response)));
            }

            error!("Failed to register signup '{}': {}", request.username, db_error);
            let error_response = ErrorResponse {
                error: "Internal server error while registering signup".to_string(),
                code: "DATABASE_ERROR".to_string(),
                success: false,
            };
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)))
        }
    }
}

/// Get all early-access signups
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    responses(
        (status = 200, description = "Signups retrieved successfully", body = ApiResponse<Vec<UserResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, StatusCode> {
    trace!("Entering get_users function");
    debug!("Fetching all signups from database");

    match user::Entity::find().all(&state.db).await {
        Ok(users) => {
            let user_count = users.len();
            debug!("Retrieved {} signups from database", user_count);

            let user_responses: Vec<UserResponse> =
                users.into_iter().map(UserResponse::from).collect();

            info!("Successfully retrieved {} signups", user_count);
            let response = ApiResponse {
                data: user_responses,
                message: "Signups retrieved successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(db_error) => {
            error!("Failed to retrieve signups from database: {}", db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
