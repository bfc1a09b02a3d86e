//! Driver Registry API
//!
//! A Rust-based microservice for managing driver records following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
