use utoipa::OpenApi;

use crate::models::{
    CreateUserRequest, CreatedResponse, ErrorResponse, HealthResponse, MessageResponse,
    StatusMessageResponse, UpdateUserRequest, UserDataResponse, UserResponse,
};

/// OpenAPI documentation for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "0.1.0",
        description = "Create, read, update and delete user records stored in MongoDB."
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Users", description = "User CRUD operations")
    ),
    paths(
        crate::routes::health_check,
        crate::handlers::create_user,
        crate::handlers::get_user,
        crate::handlers::update_user,
        crate::handlers::delete_user
    ),
    components(
        schemas(
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            UserDataResponse,
            CreatedResponse,
            StatusMessageResponse,
            MessageResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
