//! Get Driver By CURP Use Case
//!
//! Retrieves a single driver by its CURP.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Curp, Driver};
use crate::shared::errors::UseCaseError;

/// Use case for getting a driver by CURP
pub struct GetDriverByCurpUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl GetDriverByCurpUseCase {
    /// Create a new GetDriverByCurpUseCase
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
    pub async fn execute(&self, curp: &Curp) -> Result<Driver, UseCaseError> {
        tracing::debug!(curp = %curp, "Getting driver by CURP");

        let driver = self
            .driver_repository
            .find_by_curp(curp)
            .await?
            .ok_or_else(|| {
                tracing::warn!(curp = %curp, "Driver not found");
                UseCaseError::driver_not_found(curp.as_str())
            })?;

        tracing::debug!(curp = %curp, "Driver found");
        Ok(driver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::driver::{Address, CreateDriverData, FullName, License};
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct MockDriverRepository {
        find_by_curp_result: Mutex<Option<Result<Option<Driver>, RepositoryError>>>,
        requested: Mutex<Vec<Curp>>,
    }

    impl MockDriverRepository {
        fn new() -> Self {
            Self {
                find_by_curp_result: Mutex::new(None),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn with_find_by_curp(self, result: Result<Option<Driver>, RepositoryError>) -> Self {
            *self.find_by_curp_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl DriverRepository for MockDriverRepository {
        async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError> {
            Ok(vec![])
        }

        async fn find_by_curp(&self, curp: &Curp) -> Result<Option<Driver>, RepositoryError> {
            self.requested.lock().unwrap().push(curp.clone());
            self.find_by_curp_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(None))
        }

        async fn save(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
            Ok(driver.clone())
        }

        async fn update(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
            Ok(driver.clone())
        }

        async fn delete(&self, _driver: &Driver) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    fn create_test_driver() -> Driver {
        Driver::new(CreateDriverData {
            curp: Curp::new("AAAA000101HDFXXX01"),
            full_name: FullName::new("Ana", "Lopez"),
            address: Address::default(),
            monthly_salary: dec!(12000),
            license: License::new("LIC123"),
            registration_date: None,
        })
    }

    #[tokio::test]
    async fn should_return_driver_when_found() {
        let driver = create_test_driver();
        let repo = Arc::new(MockDriverRepository::new().with_find_by_curp(Ok(Some(driver.clone()))));

        let use_case = GetDriverByCurpUseCase::new(repo.clone());
        let result = use_case.execute(driver.curp()).await;

        assert_eq!(result.unwrap(), driver);
        assert_eq!(repo.requested.lock().unwrap().as_slice(), &[driver.curp().clone()]);
    }

    #[tokio::test]
    async fn should_return_not_found_when_driver_does_not_exist() {
        let repo = Arc::new(MockDriverRepository::new().with_find_by_curp(Ok(None)));

        let use_case = GetDriverByCurpUseCase::new(repo);
        let result = use_case.execute(&Curp::new("UNKNOWN")).await;

        let err = result.unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound { .. }));
        assert_eq!(err.to_string(), "Driver not found with CURP: UNKNOWN");
    }
}
