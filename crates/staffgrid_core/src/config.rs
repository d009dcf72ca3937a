//! Grid session configuration.
//!
//! # Responsibility
//! - Hold the reference lists used for membership validation.
//! - Hold the defaults applied to rows created by add-row.
//!
//! # Invariants
//! - Reference lists are non-empty, trimmed and free of duplicates.
//! - A validated config never yields a default row that would fail its own
//!   field rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 100;

const DEFAULT_DEPARTMENTS: [&str; 5] = ["IT", "HR", "Finance", "Marketing", "Sales"];
const DEFAULT_SKILLS: [&str; 10] = [
    "C#",
    "JavaScript",
    "Python",
    "SQL",
    "React",
    "Angular",
    "Vue",
    "Docker",
    "Kubernetes",
    "AWS",
];
const DEFAULT_AGE: i64 = 25;
const DEFAULT_SALARY: i64 = 30_000_000;

/// Configuration error for grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyList(&'static str),
    BlankEntry(&'static str),
    DuplicateEntry { list: &'static str, value: String },
    DefaultAgeOutOfRange(i64),
    NegativeDefaultSalary(Decimal),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyList(list) => write!(f, "{list} list cannot be empty"),
            Self::BlankEntry(list) => write!(f, "{list} list contains a blank entry"),
            Self::DuplicateEntry { list, value } => {
                write!(f, "{list} list contains duplicate entry `{value}`")
            }
            Self::DefaultAgeOutOfRange(age) => write!(
                f,
                "default age {age} must be within {MIN_AGE}..={MAX_AGE}"
            ),
            Self::NegativeDefaultSalary(salary) => {
                write!(f, "default salary {salary} cannot be negative")
            }
        }
    }
}

impl Error for ConfigError {}

/// Reference lists and row defaults for one grid session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Allowed department values; the first entry seeds new rows.
    pub departments: Vec<String>,
    /// Allowed skill tags.
    pub skills: Vec<String>,
    pub default_age: i64,
    pub default_salary: Decimal,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            departments: DEFAULT_DEPARTMENTS.iter().map(|v| v.to_string()).collect(),
            skills: DEFAULT_SKILLS.iter().map(|v| v.to_string()).collect(),
            default_age: DEFAULT_AGE,
            default_salary: Decimal::from(DEFAULT_SALARY),
        }
    }
}

impl GridConfig {
    /// Validates reference lists and row defaults.
    ///
    /// # Errors
    /// - Returns `EmptyList`/`BlankEntry`/`DuplicateEntry` for malformed lists.
    /// - Returns `DefaultAgeOutOfRange` when `default_age` is outside 18..=100.
    /// - Returns `NegativeDefaultSalary` for a salary below zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_list("departments", &self.departments)?;
        validate_list("skills", &self.skills)?;

        if !(MIN_AGE..=MAX_AGE).contains(&self.default_age) {
            return Err(ConfigError::DefaultAgeOutOfRange(self.default_age));
        }
        if self.default_salary < Decimal::ZERO {
            return Err(ConfigError::NegativeDefaultSalary(self.default_salary));
        }
        Ok(())
    }
}

fn validate_list(list: &'static str, values: &[String]) -> Result<(), ConfigError> {
    if values.is_empty() {
        return Err(ConfigError::EmptyList(list));
    }

    let mut seen = HashSet::with_capacity(values.len());
    for value in values {
        if value.trim().is_empty() || value.trim() != value {
            return Err(ConfigError::BlankEntry(list));
        }
        if !seen.insert(value.as_str()) {
            return Err(ConfigError::DuplicateEntry {
                list,
                value: value.clone(),
            });
        }
    }
    Ok(())
}
