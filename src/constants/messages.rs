//! Success message constants used throughout the application.

pub const STATUS_SUCCESS: &str = "success";

// User management messages
pub const MSG_USER_CREATED: &str = "User created successfully";
pub const MSG_USER_UPDATED: &str = "User updated successfully";
pub const MSG_USER_DELETED: &str = "User deleted successfully";
