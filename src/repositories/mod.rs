//! Repository layer for database operations.
//!
//! Services talk to the [`UserRepository`] trait; the MongoDB implementation is
//! wired in at startup and tests swap in an in-memory one.

#[cfg(test)]
pub mod memory;
pub mod user_repository;

pub use user_repository::{MongoUserRepository, UserRepository};
