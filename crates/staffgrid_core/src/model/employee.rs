//! Employee record model.
//!
//! # Responsibility
//! - Define the canonical row shape shown by the grid.
//! - Provide a compact diagnostic rendering for change-log lines.
//!
//! # Invariants
//! - `id` is stable for the record lifetime; edits never change it.
//! - `salary` is never negative once written through the edit pipeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Row identifier, unique within one grid session.
pub type EmployeeId = i64;

/// One employee entry in the grid collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub age: i64,
    /// Gross salary in the deployment currency; serialized as a string.
    pub salary: Decimal,
    /// Serialized as `YYYY-MM-DD`.
    pub hire_date: NaiveDate,
    /// Member of the grid's department list at write time.
    pub department: String,
    /// Each tag is a member of the grid's skill list at write time.
    pub skills: Vec<String>,
}

impl EmployeeRecord {
    /// Creates a record with the given identity and blank payload fields.
    ///
    /// Used by import paths and tests; the grid's add-row flow fills in
    /// configured defaults instead.
    pub fn new(id: EmployeeId, hire_date: NaiveDate, department: impl Into<String>) -> Self {
        Self {
            id,
            name: String::new(),
            age: 0,
            salary: Decimal::ZERO,
            hire_date,
            department: department.into(),
            skills: Vec::new(),
        }
    }
}

impl Display for EmployeeRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Dept: {}, Skills: [{}]",
            self.id,
            self.name,
            self.department,
            self.skills.join(", ")
        )
    }
}
