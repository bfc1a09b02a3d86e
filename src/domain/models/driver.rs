//! Driver Domain Model
//!
//! Represents a driver record and its value objects.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::shared::errors::DomainError;

/// Newtype wrapper for the CURP, the driver's national identifier and key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Curp(String);

impl Curp {
    /// Wrap a CURP value as-is
    ///
    /// Format checks belong to the API boundary; lookups accept any key.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Curp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Curp {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Curp {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Driver's full name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    first_name: String,
    last_name: String,
}

impl FullName {
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

/// Postal address; every part is optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
}

impl Address {
    #[must_use]
    pub fn new(street: Option<String>, city: Option<String>, state: Option<String>) -> Self {
        Self { street, city, state }
    }

    #[must_use]
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }
}

/// Driving license
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    license_number: String,
}

impl License {
    #[must_use]
    pub fn new(license_number: impl Into<String>) -> Self {
        Self {
            license_number: license_number.into(),
        }
    }

    #[must_use]
    pub fn license_number(&self) -> &str {
        &self.license_number
    }
}

/// Data required to create a new Driver
#[derive(Debug, Clone)]
pub struct CreateDriverData {
    pub curp: Curp,
    pub full_name: FullName,
    pub address: Address,
    pub monthly_salary: Decimal,
    pub license: License,
    /// Defaults to the creation instant when absent
    pub registration_date: Option<DateTime<Utc>>,
}

/// Data for a full update of an existing Driver
///
/// Carries no salary: it is fixed at creation.
#[derive(Debug, Clone)]
pub struct UpdateDriverData {
    pub curp: Curp,
    pub full_name: FullName,
    pub address: Address,
    pub license: License,
    /// Keeps the stored date when absent
    pub registration_date: Option<DateTime<Utc>>,
}

/// Driver aggregate root
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    curp: Curp,
    full_name: FullName,
    address: Address,
    monthly_salary: Decimal,
    license: License,
    registration_date: DateTime<Utc>,
}

impl Driver {
    /// Create a new Driver from creation data
    #[must_use]
    pub fn new(data: CreateDriverData) -> Self {
        Self {
            curp: data.curp,
            full_name: data.full_name,
            address: data.address,
            monthly_salary: data.monthly_salary,
            license: data.license,
            registration_date: data.registration_date.unwrap_or_else(Utc::now),
        }
    }

    /// Restore a Driver from persisted data
    #[must_use]
    pub fn restore(
        curp: Curp,
        full_name: FullName,
        address: Address,
        monthly_salary: Decimal,
        license: License,
        registration_date: DateTime<Utc>,
    ) -> Self {
        Self {
            curp,
            full_name,
            address,
            monthly_salary,
            license,
            registration_date,
        }
    }

    /// Overwrite every mutable field, returning a new instance
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CurpImmutable` if `data.curp` differs from the stored CURP.
    pub fn with_updates(self, data: UpdateDriverData) -> Result<Self, DomainError> {
        if data.curp != self.curp {
            return Err(DomainError::CurpImmutable {
                stored: self.curp.to_string(),
                supplied: data.curp.to_string(),
            });
        }

        Ok(Self {
            full_name: data.full_name,
            address: data.address,
            license: data.license,
            registration_date: data.registration_date.unwrap_or(self.registration_date),
            ..self
        })
    }

    // Getters

    #[must_use]
    pub fn curp(&self) -> &Curp {
        &self.curp
    }

    #[must_use]
    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub fn monthly_salary(&self) -> Decimal {
        self.monthly_salary
    }

    #[must_use]
    pub fn license(&self) -> &License {
        &self.license
    }

    #[must_use]
    pub fn registration_date(&self) -> DateTime<Utc> {
        self.registration_date
    }
}
