//! Application constants module.
//!
//! Centralizes the response strings and collection names used by the
//! handlers, services and repositories.

pub mod collections;
pub mod errors;
pub mod messages;

pub use collections::*;
pub use errors::*;
pub use messages::*;
