//! Delete Driver Use Case
//!
//! Removes a driver record entirely.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::Curp;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a driver
pub struct DeleteDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl DeleteDriverUseCase {
    /// Create a new DeleteDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, curp: &Curp) -> Result<(), UseCaseError> {
        tracing::info!(curp = %curp, "Deleting driver");

        let driver = self
            .driver_repository
            .find_by_curp(curp)
            .await?
            .ok_or_else(|| {
                tracing::warn!(curp = %curp, "Driver not found for deletion");
                UseCaseError::driver_not_found(curp.as_str())
            })?;

        self.driver_repository.delete(&driver).await?;

        tracing::info!(curp = %curp, "Driver deleted successfully");
        Ok(())
    }
}
