//! Field validation and coercion rules for cell edits.
//!
//! # Responsibility
//! - Decide, per editable field, which raw cell values are acceptable.
//! - Coerce accepted values into the field's semantic type in one step.
//!
//! # Invariants
//! - Validation never mutates a record; `FieldUpdate::apply` is the only
//!   write path and cannot fail.
//! - Coercion failures are reported as validation failures.
//! - Date parsing returns `None` instead of panicking on any input.

use crate::config::{GridConfig, MAX_AGE, MIN_AGE};
use crate::model::cell::{CellValue, EmployeeField};
use crate::model::employee::{EmployeeId, EmployeeRecord};
use crate::repo::employee_repo::RepoError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub type EditResult<T> = Result<T, EditError>;

/// Failure kinds reported by the cell edit pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Field name outside the editable set.
    UnknownField(String),
    /// Proposed value rejected by the field rule (includes coercion failures).
    Validation {
        field: EmployeeField,
        reason: String,
    },
    /// Edited record is no longer in the collection at commit time.
    RecordNotFound(EmployeeId),
    /// Fault caught at the pipeline boundary.
    Unexpected(String),
}

impl EditError {
    fn validation(field: EmployeeField, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Returns whether the error came from a field rule.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "unknown field: `{name}`"),
            Self::Validation { field, reason } => {
                write!(f, "validation failed for {field}: {reason}")
            }
            Self::RecordNotFound(id) => write!(f, "employee not found in list: ID={id}"),
            Self::Unexpected(detail) => write!(f, "unexpected edit failure: {detail}"),
        }
    }
}

impl Error for EditError {}

impl From<RepoError> for EditError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::RecordNotFound(id),
            other => Self::Unexpected(other.to_string()),
        }
    }
}

/// Validated, coerced single-field change.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Age(i64),
    Salary(Decimal),
    HireDate(NaiveDate),
    Department(String),
    Skills(Vec<String>),
}

impl FieldUpdate {
    /// Writes the coerced value into `record`, leaving every other field as is.
    pub fn apply(self, record: &mut EmployeeRecord) {
        match self {
            Self::Name(value) => record.name = value,
            Self::Age(value) => record.age = value,
            Self::Salary(value) => record.salary = value,
            Self::HireDate(value) => record.hire_date = value,
            Self::Department(value) => record.department = value,
            Self::Skills(value) => record.skills = value,
        }
    }
}

/// Validates `value` for `field` and returns the coerced update.
///
/// # Errors
/// - Returns `EditError::Validation` when the variant is not accepted for the
///   field, when parsing fails, or when a range/membership rule is violated.
pub fn validate_field(
    config: &GridConfig,
    field: EmployeeField,
    value: &CellValue,
) -> EditResult<FieldUpdate> {
    match field {
        EmployeeField::Name => validate_name(value),
        EmployeeField::Age => validate_age(value),
        EmployeeField::Salary => validate_salary(value),
        EmployeeField::HireDate => coerce_date(value)
            .map(FieldUpdate::HireDate)
            .ok_or_else(|| {
                EditError::validation(field, format!("`{value}` is not a recognized date"))
            }),
        EmployeeField::Department => validate_department(config, value),
        EmployeeField::Skills => validate_skills(config, value),
    }
}

fn validate_name(value: &CellValue) -> EditResult<FieldUpdate> {
    let field = EmployeeField::Name;
    let CellValue::Text(text) = value else {
        return Err(unsupported(field, value));
    };
    if text.trim().is_empty() {
        return Err(EditError::validation(field, "name cannot be blank"));
    }
    Ok(FieldUpdate::Name(text.clone()))
}

fn validate_age(value: &CellValue) -> EditResult<FieldUpdate> {
    let field = EmployeeField::Age;
    let age = match value {
        CellValue::Integer(age) => Some(*age),
        CellValue::Text(text) => text.trim().parse::<i64>().ok(),
        CellValue::Decimal(age) if age.fract().is_zero() => age.to_i64(),
        CellValue::Decimal(_) => None,
        _ => return Err(unsupported(field, value)),
    };
    let Some(age) = age else {
        return Err(EditError::validation(
            field,
            format!("`{value}` is not a whole number"),
        ));
    };
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(EditError::validation(
            field,
            format!("{age} is outside {MIN_AGE}..={MAX_AGE}"),
        ));
    }
    Ok(FieldUpdate::Age(age))
}

fn validate_salary(value: &CellValue) -> EditResult<FieldUpdate> {
    let field = EmployeeField::Salary;
    let salary = match value {
        CellValue::Decimal(salary) => Some(*salary),
        CellValue::Integer(salary) => Some(Decimal::from(*salary)),
        CellValue::Text(text) => Decimal::from_str(text.trim()).ok(),
        _ => return Err(unsupported(field, value)),
    };
    let Some(salary) = salary else {
        return Err(EditError::validation(
            field,
            format!("`{value}` is not a decimal number"),
        ));
    };
    if salary < Decimal::ZERO {
        return Err(EditError::validation(field, "salary cannot be negative"));
    }
    // "-0" parses with the sign bit set; store it as plain zero.
    let salary = if salary.is_zero() { Decimal::ZERO } else { salary };
    Ok(FieldUpdate::Salary(salary))
}

fn validate_department(config: &GridConfig, value: &CellValue) -> EditResult<FieldUpdate> {
    let field = EmployeeField::Department;
    let CellValue::Text(department) = value else {
        return Err(unsupported(field, value));
    };
    if department.is_empty() {
        return Err(EditError::validation(field, "department cannot be empty"));
    }
    if !config.departments.iter().any(|known| known == department) {
        return Err(EditError::validation(
            field,
            format!("`{department}` is not an allowed department"),
        ));
    }
    Ok(FieldUpdate::Department(department.clone()))
}

fn validate_skills(config: &GridConfig, value: &CellValue) -> EditResult<FieldUpdate> {
    let field = EmployeeField::Skills;
    let CellValue::Tags(skills) = value else {
        return Err(unsupported(field, value));
    };
    if let Some(unknown) = skills
        .iter()
        .find(|skill| !config.skills.iter().any(|known| known == *skill))
    {
        return Err(EditError::validation(
            field,
            format!("`{unknown}` is not an allowed skill"),
        ));
    }
    Ok(FieldUpdate::Skills(skills.clone()))
}

fn unsupported(field: EmployeeField, value: &CellValue) -> EditError {
    EditError::validation(field, format!("{} values are not accepted", value.kind_name()))
}

/// Resolves a cell value to a calendar date.
///
/// Accepts native dates as-is and date-like text; everything else, including
/// `CellValue::Empty`, yields `None`.
pub fn coerce_date(value: &CellValue) -> Option<NaiveDate> {
    match value {
        CellValue::Date(date) => Some(*date),
        CellValue::Text(text) => parse_date_text(text),
        _ => None,
    }
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses date-like text in the formats grid editors emit.
///
/// Day-first `DD/MM/YYYY` is accepted; month-first is not.
pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|value| value.date_naive())
        })
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
                .map(|value| value.date())
        })
}
