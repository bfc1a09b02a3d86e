//! Create Driver Use Case
//!
//! Registers a new driver after checking its CURP is not taken.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{CreateDriverData, Driver};
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for creating a new driver
pub struct CreateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl CreateDriverUseCase {
    /// Create a new CreateDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if a driver with the same CURP already exists.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateDriverData) -> Result<Driver, UseCaseError> {
        tracing::info!(curp = %data.curp, "Creating new driver");

        // Fast-path rejection; the insert itself enforces the unique key
        if self
            .driver_repository
            .find_by_curp(&data.curp)
            .await?
            .is_some()
        {
            tracing::warn!(curp = %data.curp, "Driver with CURP already exists");
            return Err(conflict(data.curp.as_str()));
        }

        let driver = Driver::new(data);
        let created = self
            .driver_repository
            .save(&driver)
            .await
            .map_err(|err| match err {
                RepositoryError::Duplicate(curp) => {
                    tracing::warn!(curp = %curp, "Concurrent insert won the CURP");
                    conflict(&curp)
                }
                other => other.into(),
            })?;

        tracing::info!(curp = %created.curp(), "Driver created successfully");

        Ok(created)
    }
}

fn conflict(curp: &str) -> UseCaseError {
    UseCaseError::Conflict(format!("Driver with CURP {curp} already exists"))
}
