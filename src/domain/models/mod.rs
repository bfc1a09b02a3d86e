//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod driver;

pub use driver::{Address, CreateDriverData, Curp, Driver, FullName, License, UpdateDriverData};
