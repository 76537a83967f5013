//! Generic API response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::STATUS_SUCCESS;

/// Error response body shared by every failure
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error description
    #[schema(example = "User not found")]
    pub detail: String,
}

/// Liveness check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "success")]
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
        }
    }
}

/// Response to a successful create
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Identifier assigned by the store
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    #[schema(example = "User created successfully")]
    pub message: String,
}

/// Status plus message, returned by update
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusMessageResponse {
    #[schema(example = "success")]
    pub status: String,
    pub message: String,
}

impl StatusMessageResponse {
    pub fn success(message: &str) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: message.to_string(),
        }
    }
}

/// Bare message, returned by delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User deleted successfully")]
    pub message: String,
}
