//! User handlers for the CRUD endpoints.

use actix_web::{web, HttpResponse};
use log::{debug, info};
use validator::Validate;

use crate::constants::{MSG_USER_CREATED, MSG_USER_DELETED, MSG_USER_UPDATED};
use crate::errors::ApiError;
use crate::models::{
    CreateUserRequest, CreatedResponse, MessageResponse, StatusMessageResponse, UpdateUserRequest,
    UserDataResponse, UserResponse,
};
use crate::services::UserService;
use crate::validators::validation_errors_to_api_error;

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreatedResponse),
        (status = 400, description = "Email already registered", body = crate::models::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 500, description = "Database error", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let id = user_service.create_user(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreatedResponse {
        id: id.to_hex(),
        message: MSG_USER_CREATED.to_string(),
    }))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = String, Path, description = "User ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "User found", body = UserDataResponse),
        (status = 400, description = "Invalid user ID format", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Database error", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let user = user_service.get_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(UserDataResponse::success(UserResponse::from(user))))
}

/// Partially update a user
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = String, Path, description = "User ID (24 hex characters)")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = StatusMessageResponse),
        (status = 400, description = "Invalid user ID, empty update or email taken", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 422, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 500, description = "Database error", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    body.validate().map_err(validation_errors_to_api_error)?;

    info!("Updating user with id: {}", user_id);
    user_service.update_user(&user_id, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(StatusMessageResponse::success(MSG_USER_UPDATED)))
}

/// Delete a user permanently
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "Users",
    params(
        ("user_id" = String, Path, description = "User ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid user ID format", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Database error", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    info!("Deleting user with id: {}", user_id);
    user_service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: MSG_USER_DELETED.to_string(),
    }))
}
