//! Driver DTO
//!
//! Flat transport representation of a driver, shared by requests and responses.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::driver::{
    Address, CreateDriverData, Curp, Driver, FullName, License, UpdateDriverData,
};
use crate::shared::errors::DomainError;

lazy_static! {
    /// Regex for the 18-character CURP layout
    static ref CURP_REGEX: Regex =
        Regex::new(r"^[A-Z]{4}\d{6}[HMX][A-Z]{5}[A-Z0-9]\d$").expect("valid regex");
}

/// Validates a CURP format
fn validate_curp(curp: &str) -> Result<(), validator::ValidationError> {
    if CURP_REGEX.is_match(curp) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("curp");
        error.message = Some("Invalid CURP format (expected 18 uppercase characters, e.g. AAAA000101HDFXXX01)".into());
        Err(error)
    }
}

/// Largest salary a `NUMERIC(12, 2)` column holds
const MAX_MONTHLY_SALARY: f64 = 9_999_999_999.99;

/// Salaries are stored in cents
const SALARY_SCALE: u32 = 2;

/// Converts a salary into a `Decimal` the store can hold exactly
///
/// Goes through the shortest decimal rendering of the float so `12000.55`
/// stays `12000.55` instead of picking up binary noise.
fn salary_to_decimal(value: f64) -> Result<Decimal, DomainError> {
    if !value.is_finite() || !(0.0..=MAX_MONTHLY_SALARY).contains(&value) {
        return Err(DomainError::InvalidValue(format!(
            "monthlySalary must be between 0 and {MAX_MONTHLY_SALARY} (got {value})"
        )));
    }

    let decimal: Decimal = value.to_string().parse().map_err(|_| {
        DomainError::InvalidValue(format!(
            "monthlySalary cannot be represented as a decimal (got {value})"
        ))
    })?;

    if decimal.normalize().scale() > SALARY_SCALE {
        return Err(DomainError::InvalidValue(format!(
            "monthlySalary must have at most {SALARY_SCALE} decimal places (got {value})"
        )));
    }

    Ok(decimal)
}

/// Driver data transfer object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DriverDto {
    #[validate(length(min = 1, max = 100, message = "firstName must be between 1 and 100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "lastName must be between 1 and 100 characters"))]
    pub last_name: String,

    #[validate(custom(function = "validate_curp"))]
    pub curp: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "street must be at most 200 characters"))]
    pub street: Option<String>,

    #[serde(default)]
    #[validate(length(max = 200, message = "city must be at most 200 characters"))]
    pub city: Option<String>,

    #[serde(default)]
    #[validate(length(max = 200, message = "state must be at most 200 characters"))]
    pub state: Option<String>,

    #[validate(length(min = 1, max = 50, message = "licenseNumber must be between 1 and 50 characters"))]
    pub license_number: String,

    /// Required on create; ignored on update
    #[serde(default)]
    #[validate(range(
        min = 0.0,
        max = 9999999999.99,
        message = "monthlySalary must be between 0 and 9999999999.99"
    ))]
    pub monthly_salary: Option<f64>,

    #[serde(default)]
    pub registration_date: Option<DateTime<Utc>>,
}

impl DriverDto {
    fn full_name(&self) -> FullName {
        FullName::new(self.first_name.clone(), self.last_name.clone())
    }

    fn address(&self) -> Address {
        Address::new(self.street.clone(), self.city.clone(), self.state.clone())
    }

    fn license(&self) -> License {
        License::new(self.license_number.clone())
    }
}

impl TryFrom<DriverDto> for CreateDriverData {
    type Error = DomainError;

    fn try_from(dto: DriverDto) -> Result<Self, Self::Error> {
        Ok(Self {
            full_name: dto.full_name(),
            address: dto.address(),
            license: dto.license(),
            monthly_salary: dto
                .monthly_salary
                .ok_or_else(|| DomainError::InvalidValue("monthlySalary is required".to_string()))
                .and_then(salary_to_decimal)?,
            curp: Curp::new(dto.curp),
            registration_date: dto.registration_date,
        })
    }
}

impl From<DriverDto> for UpdateDriverData {
    fn from(dto: DriverDto) -> Self {
        Self {
            full_name: dto.full_name(),
            address: dto.address(),
            license: dto.license(),
            curp: Curp::new(dto.curp),
            registration_date: dto.registration_date,
        }
    }
}

impl From<&Driver> for DriverDto {
    fn from(driver: &Driver) -> Self {
        Self {
            first_name: driver.full_name().first_name().to_string(),
            last_name: driver.full_name().last_name().to_string(),
            curp: driver.curp().to_string(),
            street: driver.address().street().map(str::to_string),
            city: driver.address().city().map(str::to_string),
            state: driver.address().state().map(str::to_string),
            license_number: driver.license().license_number().to_string(),
            monthly_salary: driver.monthly_salary().to_f64(),
            registration_date: Some(driver.registration_date()),
        }
    }
}

impl From<Driver> for DriverDto {
    fn from(driver: Driver) -> Self {
        Self::from(&driver)
    }
}
