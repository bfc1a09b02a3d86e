//! Application Layer
//!
//! Driver use cases. They talk to storage only through the
//! `DriverRepository` gateway, never a concrete adapter.

pub mod use_cases;
