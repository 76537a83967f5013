//! User-related response models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::STATUS_SUCCESS;
use crate::models::User;

/// User data returned by `GET /users/{user_id}`
///
/// Carries no `added_on`/`updated_on`: store-managed timestamps never leave the
/// service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[serde(rename = "_id")]
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub dob: NaiveDate,
    pub address: String,
    pub gender: String,
    pub email: String,
    pub phone_number: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            firstname: user.firstname,
            lastname: user.lastname,
            dob: user.dob,
            address: user.address,
            gender: user.gender,
            email: user.email,
            phone_number: user.phone_number,
        }
    }
}

/// Envelope for a single user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDataResponse {
    #[schema(example = "success")]
    pub status: String,
    pub data: UserResponse,
}

impl UserDataResponse {
    pub fn success(data: UserResponse) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data,
        }
    }
}
