//! PostgreSQL Driver Repository Implementation
//!
//! Implements the DriverRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Address, Curp, Driver, FullName, License};
use crate::shared::errors::RepositoryError;

/// Database row representation for drivers table
#[derive(Debug, sqlx::FromRow)]
struct DriverRow {
    curp: String,
    first_name: String,
    last_name: String,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    license_number: String,
    monthly_salary: Decimal,
    registration_date: DateTime<Utc>,
}

impl From<DriverRow> for Driver {
    fn from(row: DriverRow) -> Self {
        Driver::restore(
            Curp::new(row.curp),
            FullName::new(row.first_name, row.last_name),
            Address::new(row.street, row.city, row.state),
            row.monthly_salary,
            License::new(row.license_number),
            row.registration_date,
        )
    }
}

/// PostgreSQL implementation of DriverRepository
pub struct PostgresDriverRepository {
    pool: PgPool,
}

impl PostgresDriverRepository {
    /// Create a new PostgresDriverRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DriverRepository for PostgresDriverRepository {
    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError> {
        let rows = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT curp, first_name, last_name, street, city, state,
                   license_number, monthly_salary, registration_date
            FROM drivers
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Driver::from).collect())
    }

    async fn find_by_curp(&self, curp: &Curp) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT curp, first_name, last_name, street, city, state,
                   license_number, monthly_salary, registration_date
            FROM drivers
            WHERE curp = $1
            "#,
        )
        .bind(curp.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Driver::from))
    }

    async fn save(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
        // ON CONFLICT keeps check-and-insert atomic on the primary key
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            INSERT INTO drivers (
                curp, first_name, last_name, street, city, state,
                license_number, monthly_salary, registration_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (curp) DO NOTHING
            RETURNING curp, first_name, last_name, street, city, state,
                      license_number, monthly_salary, registration_date
            "#,
        )
        .bind(driver.curp().as_str())
        .bind(driver.full_name().first_name())
        .bind(driver.full_name().last_name())
        .bind(driver.address().street())
        .bind(driver.address().city())
        .bind(driver.address().state())
        .bind(driver.license().license_number())
        .bind(driver.monthly_salary())
        .bind(driver.registration_date())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Driver::from)
            .ok_or_else(|| RepositoryError::Duplicate(driver.curp().to_string()))
    }

    async fn update(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
        // monthly_salary is fixed at creation
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            UPDATE drivers
            SET first_name = $2,
                last_name = $3,
                street = $4,
                city = $5,
                state = $6,
                license_number = $7,
                registration_date = $8
            WHERE curp = $1
            RETURNING curp, first_name, last_name, street, city, state,
                      license_number, monthly_salary, registration_date
            "#,
        )
        .bind(driver.curp().as_str())
        .bind(driver.full_name().first_name())
        .bind(driver.full_name().last_name())
        .bind(driver.address().street())
        .bind(driver.address().city())
        .bind(driver.address().state())
        .bind(driver.license().license_number())
        .bind(driver.registration_date())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Driver::from)
            .ok_or_else(|| RepositoryError::NotFound(driver.curp().to_string()))
    }

    async fn delete(&self, driver: &Driver) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM drivers
            WHERE curp = $1
            "#,
        )
        .bind(driver.curp().as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(driver.curp().to_string()));
        }

        Ok(())
    }
}
