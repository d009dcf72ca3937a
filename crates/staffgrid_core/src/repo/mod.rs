//! Record collection contracts and implementations.
//!
//! # Responsibility
//! - Define the row-level data access contract used by the grid controller.
//! - Keep collection ordering and identity rules out of the edit pipeline.
//!
//! # Invariants
//! - Row order is insertion order; replacement keeps the row position.
//! - Identifiers are unique within one repository.

pub mod employee_repo;
