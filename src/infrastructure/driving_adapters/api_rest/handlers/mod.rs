//! HTTP Handlers

pub mod drivers;
pub mod fallback;
