//! Get All Drivers Use Case
//!
//! Retrieves every stored driver, in storage order.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::Driver;
use crate::shared::errors::UseCaseError;

/// Use case for listing all drivers
pub struct GetAllDriversUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl GetAllDriversUseCase {
    /// Create a new GetAllDriversUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Driver>, UseCaseError> {
        tracing::debug!("Getting all drivers");

        let drivers = self.driver_repository.find_all().await?;

        tracing::debug!(count = drivers.len(), "Found drivers");
        Ok(drivers)
    }
}
