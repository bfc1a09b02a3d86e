//! In-Memory Driver Repository
//!
//! `HashMap`-backed implementation for local runs and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Curp, Driver};
use crate::shared::errors::RepositoryError;

/// In-memory implementation of DriverRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryDriverRepository {
    drivers: Arc<RwLock<HashMap<Curp, Driver>>>,
}

impl InMemoryDriverRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DriverRepository for InMemoryDriverRepository {
    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError> {
        let drivers = self.drivers.read().await;
        Ok(drivers.values().cloned().collect())
    }

    async fn find_by_curp(&self, curp: &Curp) -> Result<Option<Driver>, RepositoryError> {
        let drivers = self.drivers.read().await;
        Ok(drivers.get(curp).cloned())
    }

    async fn save(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
        // Check and insert under one write guard
        let mut drivers = self.drivers.write().await;

        if drivers.contains_key(driver.curp()) {
            return Err(RepositoryError::Duplicate(driver.curp().to_string()));
        }

        drivers.insert(driver.curp().clone(), driver.clone());
        tracing::debug!(curp = %driver.curp(), "Stored driver in memory");
        Ok(driver.clone())
    }

    async fn update(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
        let mut drivers = self.drivers.write().await;

        let stored = drivers
            .get_mut(driver.curp())
            .ok_or_else(|| RepositoryError::NotFound(driver.curp().to_string()))?;

        // Salary is fixed at creation; keep the stored one
        *stored = Driver::restore(
            driver.curp().clone(),
            driver.full_name().clone(),
            driver.address().clone(),
            stored.monthly_salary(),
            driver.license().clone(),
            driver.registration_date(),
        );

        Ok(stored.clone())
    }

    async fn delete(&self, driver: &Driver) -> Result<(), RepositoryError> {
        let mut drivers = self.drivers.write().await;

        drivers
            .remove(driver.curp())
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(driver.curp().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::driver::{
        Address, CreateDriverData, FullName, License, UpdateDriverData,
    };
    use rust_decimal_macros::dec;

    fn create_test_driver(curp: &str) -> Driver {
        Driver::new(CreateDriverData {
            curp: Curp::new(curp),
            full_name: FullName::new("Ana", "Lopez"),
            address: Address::new(Some("5 de Mayo".to_string()), None, None),
            monthly_salary: dec!(12000),
            license: License::new("LIC123"),
            registration_date: None,
        })
    }

    #[tokio::test]
    async fn test_save_and_find_by_curp() {
        let repo = InMemoryDriverRepository::new();
        let driver = create_test_driver("AAAA000101HDFXXX01");

        let saved = repo.save(&driver).await.unwrap();
        let found = repo.find_by_curp(driver.curp()).await.unwrap();

        assert_eq!(saved, driver);
        assert_eq!(found, Some(driver));
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_curp() {
        let repo = InMemoryDriverRepository::new();
        let driver = create_test_driver("AAAA000101HDFXXX01");
        repo.save(&driver).await.unwrap();

        let result = repo.save(&driver).await;

        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_saves_of_same_curp_admit_one() {
        let repo = InMemoryDriverRepository::new();
        let driver = create_test_driver("AAAA000101HDFXXX01");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                let driver = driver.clone();
                tokio::spawn(async move { repo.save(&driver).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
    }

    #[tokio::test]
    async fn test_update_keeps_salary() {
        let repo = InMemoryDriverRepository::new();
        let driver = create_test_driver("AAAA000101HDFXXX01");
        repo.save(&driver).await.unwrap();

        let updated = driver
            .with_updates(UpdateDriverData {
                curp: Curp::new("AAAA000101HDFXXX01"),
                full_name: FullName::new("Ana", "Lopez"),
                address: Address::new(Some("Reforma".to_string()), None, None),
                license: License::new("LIC123"),
                registration_date: None,
            })
            .unwrap();
        let stored = repo.update(&updated).await.unwrap();

        assert_eq!(stored.address().street(), Some("Reforma"));
        assert_eq!(stored.monthly_salary(), dec!(12000));
    }

    #[tokio::test]
    async fn test_update_missing_driver_is_not_found() {
        let repo = InMemoryDriverRepository::new();

        let result = repo.update(&create_test_driver("AAAA000101HDFXXX01")).await;

        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_driver() {
        let repo = InMemoryDriverRepository::new();
        let driver = create_test_driver("AAAA000101HDFXXX01");
        repo.save(&driver).await.unwrap();

        repo.delete(&driver).await.unwrap();

        assert!(repo.find_by_curp(driver.curp()).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(&driver).await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
