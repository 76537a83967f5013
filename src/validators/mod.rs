//! Validation helpers shared by the request models and handlers.

pub mod common;
pub mod user;

pub use common::*;
pub use user::*;
