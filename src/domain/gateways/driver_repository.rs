//! Driver Repository Gateway
//!
//! Abstract trait defining the contract for driver persistence operations.

use async_trait::async_trait;

use crate::domain::models::driver::{Curp, Driver};
use crate::shared::errors::RepositoryError;

/// Repository trait for Driver persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Find every driver, in storage order
    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError>;

    /// Find a driver by its CURP
    async fn find_by_curp(&self, curp: &Curp) -> Result<Option<Driver>, RepositoryError>;

    /// Insert a new driver
    ///
    /// Fails with `RepositoryError::Duplicate` if the CURP is already stored,
    /// even when a concurrent insert wins the race.
    async fn save(&self, driver: &Driver) -> Result<Driver, RepositoryError>;

    /// Overwrite the mutable fields of a stored driver
    async fn update(&self, driver: &Driver) -> Result<Driver, RepositoryError>;

    /// Remove a stored driver
    async fn delete(&self, driver: &Driver) -> Result<(), RepositoryError>;
}
