//! Driving Adapters
//!
//! Entry points that drive the application: the REST API with its
//! handlers, DTOs, and middleware.

pub mod api_rest;
