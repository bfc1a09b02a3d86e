//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::drivers::{
    CreateDriverUseCase, DeleteDriverUseCase, GetAllDriversUseCase, GetDriverByCurpUseCase,
    UpdateDriverUseCase,
};
use crate::domain::gateways::DriverRepository;
use handlers::{drivers, fallback};
use middleware::request_id::request_id_middleware;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub create_driver_use_case: Arc<CreateDriverUseCase>,
    pub get_driver_by_curp_use_case: Arc<GetDriverByCurpUseCase>,
    pub get_all_drivers_use_case: Arc<GetAllDriversUseCase>,
    pub update_driver_use_case: Arc<UpdateDriverUseCase>,
    pub delete_driver_use_case: Arc<DeleteDriverUseCase>,
}

impl AppState {
    /// Wire every driver use case to the same repository
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self {
            create_driver_use_case: Arc::new(CreateDriverUseCase::new(driver_repository.clone())),
            get_driver_by_curp_use_case: Arc::new(GetDriverByCurpUseCase::new(
                driver_repository.clone(),
            )),
            get_all_drivers_use_case: Arc::new(GetAllDriversUseCase::new(driver_repository.clone())),
            update_driver_use_case: Arc::new(UpdateDriverUseCase::new(driver_repository.clone())),
            delete_driver_use_case: Arc::new(DeleteDriverUseCase::new(driver_repository)),
        }
    }
}

/// Build the application router
///
/// Driver endpoints live under `/driver`; anything else answers 404 with
/// the standard error body.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/driver", drivers::router())
        .fallback(fallback::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
