//! Update Driver Use Case (PUT)
//!
//! Overwrites every mutable field of an existing driver. The CURP is the
//! lookup key and can never change; the salary is fixed at creation.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, UpdateDriverData};
use crate::shared::errors::UseCaseError;

/// Use case for a full driver update
pub struct UpdateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl UpdateDriverUseCase {
    /// Create a new UpdateDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Domain` if the supplied CURP differs from the stored one.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: UpdateDriverData) -> Result<Driver, UseCaseError> {
        tracing::info!(curp = %data.curp, "Updating driver");

        let existing = self
            .driver_repository
            .find_by_curp(&data.curp)
            .await?
            .ok_or_else(|| {
                tracing::warn!(curp = %data.curp, "Driver not found for update");
                UseCaseError::driver_not_found(data.curp.as_str())
            })?;

        let updated = existing.with_updates(data).map_err(|err| {
            tracing::warn!(error = %err, "Rejected driver update");
            err
        })?;

        let result = self.driver_repository.update(&updated).await?;

        tracing::info!(curp = %result.curp(), "Driver updated successfully");
        Ok(result)
    }
}
