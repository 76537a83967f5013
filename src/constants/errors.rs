//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID format";
pub const ERR_EMAIL_EXISTS: &str = "User with this email already exists";
pub const ERR_NO_FIELDS_TO_UPDATE: &str = "No fields to update";

// Validation errors
pub const ERR_VALIDATION_PREFIX: &str = "Validation error";
pub const ERR_INVALID_EMAIL_DOMAIN: &str = "Email domain must contain a dot";
pub const ERR_INVALID_PHONE_NUMBER: &str = "Phone number must be a 10-digit number";

// Routing errors
pub const ERR_ROUTE_NOT_FOUND: &str = "Not Found";
pub const ERR_METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

// Store errors
pub const ERR_DATABASE_PREFIX: &str = "Database error";
pub const ERR_MISSING_INSERTED_ID: &str = "insert did not return an ObjectId";
