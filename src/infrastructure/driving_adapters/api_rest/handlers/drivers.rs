//! Driver Handlers
//!
//! HTTP handlers for driver operations. Each handler names the operation it
//! runs so failures reach the client with that context attached.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::driver::{CreateDriverData, Curp, UpdateDriverData};
use crate::infrastructure::driving_adapters::api_rest::dto::driver::DriverDto;
use crate::infrastructure::driving_adapters::api_rest::handlers::fallback::method_not_allowed;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

/// Create the router for driver endpoints
///
/// Known paths answer unsupported methods with 405.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_driver).fallback(method_not_allowed))
        .route("/update", put(update_driver).fallback(method_not_allowed))
        .route("/get/:curp", get(get_driver_by_curp).fallback(method_not_allowed))
        .route("/all", get(get_all_drivers).fallback(method_not_allowed))
        .route("/delete/:curp", delete(delete_driver).fallback(method_not_allowed))
}

fn in_operation(context: &str) -> impl Fn(UseCaseError) -> ApiError + '_ {
    move |err| ApiError::during(context, err)
}

fn parse_body(
    context: &str,
    payload: Result<Json<DriverDto>, JsonRejection>,
) -> Result<DriverDto, ApiError> {
    let Json(dto) = payload.map_err(|rejection| ApiError::malformed_body(context, &rejection))?;
    dto.validate()
        .map_err(|errors| ApiError::during(context, errors.into()))?;
    Ok(dto)
}

/// POST /driver/create - Register a new driver
///
/// # Responses
///
/// * 200 OK - Driver created, echoed back
/// * 400 Bad Request - Malformed body or validation error
/// * 409 Conflict - A driver with the same CURP already exists
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn create_driver(
    State(state): State<AppState>,
    payload: Result<Json<DriverDto>, JsonRejection>,
) -> Result<Json<DriverDto>, ApiError> {
    const OPERATION: &str = "create the driver";

    let dto = parse_body(OPERATION, payload)?;
    let data = CreateDriverData::try_from(dto).map_err(|err| ApiError::during(OPERATION, err.into()))?;

    let driver = state
        .create_driver_use_case
        .execute(data)
        .await
        .map_err(in_operation(OPERATION))?;

    Ok(Json(DriverDto::from(driver)))
}

/// PUT /driver/update - Overwrite a driver's mutable fields
///
/// # Responses
///
/// * 200 OK - Driver updated
/// * 400 Bad Request - Malformed body, validation error, or CURP change
/// * 404 Not Found - No driver with that CURP
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn update_driver(
    State(state): State<AppState>,
    payload: Result<Json<DriverDto>, JsonRejection>,
) -> Result<Json<DriverDto>, ApiError> {
    const OPERATION: &str = "update the driver";

    let dto = parse_body(OPERATION, payload)?;

    let driver = state
        .update_driver_use_case
        .execute(UpdateDriverData::from(dto))
        .await
        .map_err(in_operation(OPERATION))?;

    Ok(Json(DriverDto::from(driver)))
}

/// GET /driver/get/:curp - Look up a driver
///
/// # Responses
///
/// * 200 OK - Driver found
/// * 404 Not Found - No driver with that CURP
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn get_driver_by_curp(
    State(state): State<AppState>,
    Path(curp): Path<String>,
) -> Result<Json<DriverDto>, ApiError> {
    let operation = format!("get the driver with CURP {curp}");

    let driver = state
        .get_driver_by_curp_use_case
        .execute(&Curp::new(curp))
        .await
        .map_err(in_operation(&operation))?;

    Ok(Json(DriverDto::from(driver)))
}

/// GET /driver/all - List every driver
///
/// Order follows storage and is not guaranteed.
#[axum::debug_handler]
async fn get_all_drivers(State(state): State<AppState>) -> Result<Json<Vec<DriverDto>>, ApiError> {
    let drivers = state
        .get_all_drivers_use_case
        .execute()
        .await
        .map_err(in_operation("list the drivers"))?;

    Ok(Json(drivers.iter().map(DriverDto::from).collect()))
}

/// DELETE /driver/delete/:curp - Remove a driver
///
/// # Responses
///
/// * 204 No Content - Driver deleted
/// * 404 Not Found - No driver with that CURP
#[axum::debug_handler]
async fn delete_driver(
    State(state): State<AppState>,
    Path(curp): Path<String>,
) -> Result<StatusCode, ApiError> {
    let operation = format!("delete the driver with CURP {curp}");

    state
        .delete_driver_use_case
        .execute(&Curp::new(curp))
        .await
        .map_err(in_operation(&operation))?;

    Ok(StatusCode::NO_CONTENT)
}
