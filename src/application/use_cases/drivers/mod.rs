//! Driver Use Cases
//!
//! Business rules for managing driver records. Together these form the
//! driver service consumed by the REST handlers.

mod create_driver;
mod delete_driver;
mod get_all_drivers;
mod get_driver_by_curp;
mod update_driver;

pub use create_driver::CreateDriverUseCase;
pub use delete_driver::DeleteDriverUseCase;
pub use get_all_drivers::GetAllDriversUseCase;
pub use get_driver_by_curp::GetDriverByCurpUseCase;
pub use update_driver::UpdateDriverUseCase;
