//! Infrastructure Layer
//!
//! The REST API that drives the driver use cases, and the storage
//! adapters (PostgreSQL, in-memory) plus configuration they are driven by.

pub mod driven_adapters;
pub mod driving_adapters;
