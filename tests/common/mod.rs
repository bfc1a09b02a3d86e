//! Common test utilities
//!
//! Builds the full router over the in-memory repository, plus request and
//! response shapes matching the wire format.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use driver_registry::infrastructure::driven_adapters::InMemoryDriverRepository;
use driver_registry::infrastructure::driving_adapters::api_rest::{build_router, AppState};

/// CURP used by the default request
pub const TEST_CURP: &str = "AAAA000101HDFXXX01";

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub repository: InMemoryDriverRepository,
}

impl TestApp {
    /// Create a new test application with an empty in-memory store
    pub fn new() -> Self {
        let repository = InMemoryDriverRepository::new();
        let router = build_router(AppState::new(Arc::new(repository.clone())));

        Self { router, repository }
    }
}

/// Request body for create and update
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRequest {
    pub first_name: String,
    pub last_name: String,
    pub curp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub license_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<DateTime<Utc>>,
}

impl Default for DriverRequest {
    fn default() -> Self {
        Self {
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            curp: TEST_CURP.to_string(),
            street: Some("5 de Mayo".to_string()),
            city: Some("CDMX".to_string()),
            state: Some("CDMX".to_string()),
            license_number: "LIC123".to_string(),
            monthly_salary: Some(12000.0),
            registration_date: None,
        }
    }
}

impl DriverRequest {
    pub fn with_curp(mut self, curp: &str) -> Self {
        self.curp = curp.to_string();
        self
    }

    pub fn with_street(mut self, street: &str) -> Self {
        self.street = Some(street.to_string());
        self
    }

    pub fn with_salary(mut self, salary: Option<f64>) -> Self {
        self.monthly_salary = salary;
        self
    }

    pub fn with_registration_date(mut self, date: DateTime<Utc>) -> Self {
        self.registration_date = Some(date);
        self
    }
}

/// Driver as returned by the API
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    pub first_name: String,
    pub last_name: String,
    pub curp: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub license_number: String,
    pub monthly_salary: f64,
    pub registration_date: DateTime<Utc>,
}

/// Error response for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// A fixed timestamp for requests that supply their own registration date
pub fn fixed_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}

/// Build a JSON request
pub fn json_request(method: Method, uri: &str, body: &impl Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Build a request without a body
pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read and deserialize a JSON response body
pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
