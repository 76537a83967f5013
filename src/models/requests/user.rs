//! User-related request models.

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{User, UserChanges};
use crate::validators::{normalize_email, validate_email_domain, validate_phone_number};

/// Request payload for creating a user
///
/// `id`, `added_on` and `updated_on` are assigned by the server; clients that
/// send them are ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// First name (1-50 characters)
    #[validate(length(
        min = 1,
        max = 50,
        message = "First name must be between 1 and 50 characters"
    ))]
    #[schema(example = "John")]
    pub firstname: String,
    /// Last name (1-50 characters)
    #[validate(length(
        min = 1,
        max = 50,
        message = "Last name must be between 1 and 50 characters"
    ))]
    #[schema(example = "Doe")]
    pub lastname: String,
    /// Date of birth in YYYY-MM-DD format
    #[schema(example = "1990-01-15")]
    pub dob: NaiveDate,
    /// Postal address (max 200 characters)
    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    #[schema(example = "221B Baker Street, London")]
    pub address: String,
    /// Gender (max 10 characters)
    #[validate(length(max = 10, message = "Gender must be at most 10 characters"))]
    #[schema(example = "male")]
    pub gender: String,
    /// Email address, unique across all users
    #[validate(
        email(message = "Invalid email format"),
        custom(function = "validate_email_domain")
    )]
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    /// Exactly ten digits
    #[validate(custom(function = "validate_phone_number"))]
    #[schema(example = "9876543210")]
    pub phone_number: String,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            id: None,
            firstname: req.firstname,
            lastname: req.lastname,
            dob: req.dob,
            address: req.address,
            gender: req.gender,
            email: normalize_email(&req.email),
            phone_number: req.phone_number,
            added_on: None,
            updated_on: None,
        }
    }
}

/// Request payload for a partial user update
///
/// Every field is optional; only the supplied ones are changed.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "First name must be between 1 and 50 characters"
    ))]
    #[schema(example = "John")]
    pub firstname: Option<String>,
    #[validate(length(
        min = 1,
        max = 50,
        message = "Last name must be between 1 and 50 characters"
    ))]
    #[schema(example = "Doe")]
    pub lastname: Option<String>,
    /// Date of birth in YYYY-MM-DD format
    #[schema(example = "1990-01-15")]
    pub dob: Option<NaiveDate>,
    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,
    #[validate(length(max = 10, message = "Gender must be at most 10 characters"))]
    pub gender: Option<String>,
    #[validate(
        email(message = "Invalid email format"),
        custom(function = "validate_email_domain")
    )]
    #[schema(example = "newemail@example.com")]
    pub email: Option<String>,
    #[validate(custom(function = "validate_phone_number"))]
    #[schema(example = "9876543210")]
    pub phone_number: Option<String>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            firstname: req.firstname,
            lastname: req.lastname,
            dob: req.dob,
            address: req.address,
            gender: req.gender,
            email: req.email.as_deref().map(normalize_email),
            phone_number: req.phone_number,
        }
    }
}
