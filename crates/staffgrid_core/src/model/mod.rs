//! Domain model for the employee grid.
//!
//! # Responsibility
//! - Define the employee record rendered as one grid row.
//! - Define the typed cell values and editable field names fed by the UI.
//!
//! # Invariants
//! - Every record is identified by an `EmployeeId` unique within its grid.
//! - Reference-list membership is checked on write, not carried by the type.

pub mod cell;
pub mod employee;
