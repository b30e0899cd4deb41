//! User handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewUser, User, UserId};
use crate::errors::{AppError, AppResult};
use crate::types::{Created, MessageResponse};

/// User creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User display name
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[schema(example = "Ann", min_length = 1)]
    pub name: String,
    /// User email address (must be unique)
    #[validate(length(min = 1, message = "email must not be empty"))]
    #[schema(example = "ann@example.com", min_length = 1)]
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser::new(req.name, req.email)
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).delete(delete_user))
}

/// Resolve a path id. Anything that is not an integer is a validation error;
/// integers outside the assignable range are simply unknown.
fn user_id(path: Result<Path<String>, PathRejection>) -> AppResult<UserId> {
    let Path(raw) = path.map_err(|e| AppError::validation(e.body_text()))?;
    let id: i128 = match raw.parse() {
        Ok(id) => id,
        Err(_) if is_integer_literal(&raw) => return Err(AppError::NotFound),
        Err(_) => {
            return Err(AppError::validation(format!(
                "id must be an integer, got '{}'",
                raw
            )))
        }
    };
    UserId::try_from(id)
        .ok()
        .filter(|id| *id > 0)
        .ok_or(AppError::NotFound)
}

/// Optional sign followed by ASCII digits; catches values too wide for `i128`.
fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in creation order", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.user_service.list_users().await?))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Email already registered"),
        (status = 422, description = "Name or email missing or empty")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<User>> {
    let user = state.user_service.create_user(payload.into()).await?;
    Ok(Created(user))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(user_id(id)?).await?;
    Ok(Json(user))
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    state.user_service.delete_user(user_id(id)?).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
