//! Cell value and editable field model.
//!
//! # Responsibility
//! - Carry one raw cell edit from the UI as a tagged value.
//! - Map UI column names onto the fixed set of editable fields.
//!
//! # Invariants
//! - Field names match case-insensitively; unknown names never map to a field.
//! - `CellValue::Empty` is the only representation of an absent value.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Raw value proposed by one cell editor.
///
/// Each editor widget produces exactly one variant; the edit pipeline decides
/// per field which variants it accepts and how they coerce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// Cleared editor (e.g. an emptied date picker).
    Empty,
    Text(String),
    Integer(i64),
    Decimal(Decimal),
    Date(NaiveDate),
    /// Multi-select tag editor output.
    Tags(Vec<String>),
}

impl CellValue {
    /// Returns the variant name used in validation messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Decimal(_) => "decimal",
            Self::Date(_) => "date",
            Self::Tags(_) => "tags",
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("NULL"),
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            Self::Tags(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimal> for CellValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Option<NaiveDate>> for CellValue {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(Self::Empty, Self::Date)
    }
}

impl From<Vec<String>> for CellValue {
    fn from(value: Vec<String>) -> Self {
        Self::Tags(value)
    }
}

impl From<&[&str]> for CellValue {
    fn from(value: &[&str]) -> Self {
        Self::Tags(value.iter().map(|tag| (*tag).to_string()).collect())
    }
}

/// Editable employee columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeField {
    Name,
    Age,
    Salary,
    HireDate,
    Department,
    Skills,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 6] = [
        Self::Name,
        Self::Age,
        Self::Salary,
        Self::HireDate,
        Self::Department,
        Self::Skills,
    ];

    /// Resolves a UI column name, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything outside the editable set.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "age" => Some(Self::Age),
            "salary" => Some(Self::Salary),
            "hiredate" => Some(Self::HireDate),
            "department" => Some(Self::Department),
            "skills" => Some(Self::Skills),
            _ => None,
        }
    }

    /// Canonical lowercase column name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Salary => "salary",
            Self::HireDate => "hiredate",
            Self::Department => "department",
            Self::Skills => "skills",
        }
    }
}

impl Display for EmployeeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{CellValue, EmployeeField};
    use chrono::NaiveDate;

    #[test]
    fn field_parse_ignores_case_and_whitespace() {
        assert_eq!(EmployeeField::parse("HireDate"), Some(EmployeeField::HireDate));
        assert_eq!(EmployeeField::parse(" SKILLS "), Some(EmployeeField::Skills));
        assert_eq!(EmployeeField::parse("hire_date"), None);
        assert_eq!(EmployeeField::parse("id"), None);
    }

    #[test]
    fn every_field_parses_from_its_canonical_name() {
        for field in EmployeeField::ALL {
            assert_eq!(EmployeeField::parse(field.as_str()), Some(field));
        }
    }

    #[test]
    fn display_renders_empty_as_null() {
        assert_eq!(CellValue::Empty.to_string(), "NULL");
        assert_eq!(CellValue::from(None::<NaiveDate>), CellValue::Empty);
        let tags: &[&str] = &["C#", "SQL"];
        assert_eq!(CellValue::from(tags).to_string(), "[C#, SQL]");
    }
}
