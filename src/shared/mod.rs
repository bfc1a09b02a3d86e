//! Shared Kernel
//!
//! Error types used by every layer of the driver registry.

pub mod errors;

pub use errors::{ApiError, DomainError, RepositoryError, UseCaseError};
