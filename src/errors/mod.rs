use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use mongodb::error::{ErrorKind, WriteFailure};
use std::fmt;

use crate::constants::{
    ERR_DATABASE_PREFIX, ERR_EMAIL_EXISTS, ERR_INVALID_USER_ID, ERR_NO_FIELDS_TO_UPDATE,
    ERR_USER_NOT_FOUND, ERR_VALIDATION_PREFIX,
};
use crate::models::ErrorResponse;

/// MongoDB server code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Every failure a request can end in. Handlers only ever return these.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Malformed or out-of-range input (422).
    Validation(Vec<String>),
    /// Email already held by another user (400).
    DuplicateEmail,
    /// Path id is not a syntactically valid ObjectId (400).
    InvalidId,
    /// Update payload carried no fields (400).
    EmptyUpdate,
    NotFound,
    /// Any store failure, carrying the driver's message (500).
    Store(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(errors) => {
                write!(f, "{}: {}", ERR_VALIDATION_PREFIX, errors.join("; "))
            }
            ApiError::DuplicateEmail => f.write_str(ERR_EMAIL_EXISTS),
            ApiError::InvalidId => f.write_str(ERR_INVALID_USER_ID),
            ApiError::EmptyUpdate => f.write_str(ERR_NO_FIELDS_TO_UPDATE),
            ApiError::NotFound => f.write_str(ERR_USER_NOT_FOUND),
            ApiError::Store(cause) => write!(f, "{}: {}", ERR_DATABASE_PREFIX, cause),
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::DuplicateEmail | ApiError::InvalidId | ApiError::EmptyUpdate => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.to_string(),
        })
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        let write_code = match *err.kind {
            ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => Some(write_error.code),
            _ => None,
        };
        classify_store_failure(write_code, err.to_string())
    }
}

/// Map a failed store call to an `ApiError` from its write error code.
///
/// A unique index violation can only come from the email index, so it is the
/// same outcome as the pre-insert duplicate check.
fn classify_store_failure(write_code: Option<i32>, cause: String) -> ApiError {
    if write_code == Some(DUPLICATE_KEY_CODE) {
        return ApiError::DuplicateEmail;
    }
    error!("MongoDB operation failed: {}", cause);
    ApiError::Store(cause)
}

impl From<mongodb::bson::ser::Error> for ApiError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        error!("Failed to encode BSON document: {}", err);
        ApiError::Store(err.to_string())
    }
}
