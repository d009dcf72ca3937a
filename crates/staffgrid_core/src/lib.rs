//! Core logic for the editable employee grid.
//! This crate owns row CRUD, cell edit validation and the change log; the
//! rendering surface stays outside.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, GridConfig, MAX_AGE, MIN_AGE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::cell::{CellValue, EmployeeField};
pub use model::employee::{EmployeeId, EmployeeRecord};
pub use repo::employee_repo::{
    EmployeeRepository, InMemoryEmployeeRepository, RepoError, RepoResult,
};
pub use service::change_log::{ChangeLog, ChangeLogEntry};
pub use service::grid_service::{EditCommit, EmployeeGrid};
pub use service::hooks::GridObserver;
pub use service::validation::{
    coerce_date, parse_date_text, validate_field, EditError, EditResult, FieldUpdate,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
