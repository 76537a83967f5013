use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};
use log::warn;
use utoipa::OpenApi;

use crate::constants::{ERR_METHOD_NOT_ALLOWED, ERR_ROUTE_NOT_FOUND};
use crate::errors::ApiError;
use crate::handlers;
use crate::models::{ErrorResponse, HealthResponse};
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Liveness check
        .service(
            web::resource("/")
                .route(web::get().to(health_check))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/api-docs/openapi.json")
                .route(web::get().to(openapi_json))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::scope("/users")
                .service(
                    web::resource("")
                        .route(web::post().to(handlers::create_user))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(
                    web::resource("/{user_id}")
                        .route(web::get().to(handlers::get_user))
                        .route(web::put().to(handlers::update_user))
                        .route(web::delete().to(handlers::delete_user))
                        .default_service(web::to(method_not_allowed)),
                )
                .default_service(web::to(not_found)),
        );
}

/// Fallback for paths no route matches. Registered with `App::default_service`.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        detail: ERR_ROUTE_NOT_FOUND.to_string(),
    })
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorResponse {
        detail: ERR_METHOD_NOT_ALLOWED.to_string(),
    })
}

/// Report undecodable bodies (bad JSON, missing fields, wrong types) as 422.
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);
    ApiError::Validation(vec![err.to_string()]).into()
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
