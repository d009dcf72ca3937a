//! Employee grid controller.
//!
//! # Responsibility
//! - Own one grid session: rows, reference lists, change log, observers.
//! - Provide add/delete row and the validate-then-commit cell edit pipeline.
//!
//! # Invariants
//! - A cell edit replaces at most one row, as a whole, and only after the
//!   value passed its field rule.
//! - Every attempted action leaves at least one change-log entry.
//! - No edit failure escapes as a panic; faults surface as
//!   `EditError::Unexpected` and the session stays usable.

use crate::config::{ConfigError, GridConfig};
use crate::logging::payload_summary;
use crate::model::cell::{CellValue, EmployeeField};
use crate::model::employee::{EmployeeId, EmployeeRecord};
use crate::repo::employee_repo::{EmployeeRepository, InMemoryEmployeeRepository};
use crate::service::change_log::ChangeLog;
use crate::service::hooks::{GridObserver, ObserverSet};
use crate::service::validation::{validate_field, EditError, EditResult};
use chrono::{Local, Months, NaiveDate};
use log::Level;
use rust_decimal::Decimal;
use std::panic::{self, AssertUnwindSafe};

/// Successful commit of one cell edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommit {
    /// Row position of the replaced record.
    pub index: usize,
    /// Record as stored after the edit.
    pub record: EmployeeRecord,
}

/// Controller for one editable employee grid.
pub struct EmployeeGrid<R: EmployeeRepository = InMemoryEmployeeRepository> {
    repo: R,
    config: GridConfig,
    change_log: ChangeLog,
    observers: ObserverSet,
}

impl EmployeeGrid<InMemoryEmployeeRepository> {
    /// Creates an empty grid after validating `config`.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        Self::with_repository(InMemoryEmployeeRepository::new(), config)
    }

    /// Creates a grid with default config and three demo employees.
    pub fn with_sample_data() -> Self {
        let mut grid = Self::default();
        let today = Local::now().date_naive();
        for (id, name, age, salary, years_ago, department, skills) in SAMPLE_ROWS {
            let record = EmployeeRecord {
                id,
                name: name.to_string(),
                age,
                salary: Decimal::from(salary),
                hire_date: years_before(today, years_ago),
                department: department.to_string(),
                skills: skills.iter().map(|skill| skill.to_string()).collect(),
            };
            if let Err(err) = grid.repo.insert(record) {
                grid.change_log
                    .record(Level::Error, format!("Failed to seed sample row: {err}"));
            }
        }
        grid
    }
}

impl Default for EmployeeGrid<InMemoryEmployeeRepository> {
    fn default() -> Self {
        Self {
            repo: InMemoryEmployeeRepository::new(),
            config: GridConfig::default(),
            change_log: ChangeLog::new(),
            observers: ObserverSet::default(),
        }
    }
}

/// Salary is in whole currency units.
type SampleRow = (EmployeeId, &'static str, i64, i64, u32, &'static str, &'static [&'static str]);

const SAMPLE_ROWS: [SampleRow; 3] = [
    (1, "Nguyễn Văn A", 30, 50_000_000, 2, "IT", &["C#", "SQL", "JavaScript"]),
    (2, "Trần Thị B", 28, 45_000_000, 1, "HR", &["Python", "SQL"]),
    (3, "Lê Văn C", 35, 60_000_000, 3, "Finance", &["C#", "React", "Docker"]),
];

fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(date)
}

impl<R: EmployeeRepository> EmployeeGrid<R> {
    /// Creates a grid over an existing repository after validating `config`.
    pub fn with_repository(repo: R, config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            repo,
            config,
            change_log: ChangeLog::new(),
            observers: ObserverSet::default(),
        })
    }

    /// Subscribes an observer for lifecycle and refresh notifications.
    pub fn subscribe(&mut self, observer: Box<dyn GridObserver>) {
        self.observers.subscribe(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Rows in insertion order, for rendering.
    pub fn rows(&self) -> &[EmployeeRecord] {
        self.repo.list()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&EmployeeRecord> {
        self.repo.get(id)
    }

    pub fn len(&self) -> usize {
        self.repo.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.list().is_empty()
    }

    /// Department options for selection editors.
    pub fn departments(&self) -> &[String] {
        &self.config.departments
    }

    /// Skill options for tag editors.
    pub fn skills(&self) -> &[String] {
        &self.config.skills
    }

    pub fn change_log(&self) -> &ChangeLog {
        &self.change_log
    }

    /// Appends a row with configured defaults and returns it.
    ///
    /// # Contract
    /// - `id` is max existing id + 1, or 1 for an empty grid.
    /// - Blank name, today's hire date, first department, no skills.
    /// - Returns `None` and logs the failure when no row could be added
    ///   (id space exhausted); never panics.
    pub fn add_row(&mut self) -> Option<EmployeeRecord> {
        let Some(id) = self.repo.next_id() else {
            self.change_log.record(
                Level::Error,
                format!("Failed to add row: no id left after ID={}", EmployeeId::MAX),
            );
            return None;
        };

        let record = EmployeeRecord {
            id,
            name: String::new(),
            age: self.config.default_age,
            salary: self.config.default_salary,
            hire_date: Local::now().date_naive(),
            department: self.config.departments.first().cloned().unwrap_or_default(),
            skills: Vec::new(),
        };

        match self.repo.insert(record.clone()) {
            Ok(_) => {
                self.change_log
                    .record(Level::Info, format!("Added row: ID={}", record.id));
                self.observers.refresh_requested();
                Some(record)
            }
            Err(err) => {
                self.change_log
                    .record(Level::Error, format!("Failed to add row: {err}"));
                None
            }
        }
    }

    /// Removes the row with `record`'s identity.
    ///
    /// Returns `false` and changes nothing when the row is already gone.
    pub fn delete_row(&mut self, record: &EmployeeRecord) -> bool {
        match self.repo.remove(record.id) {
            Some(removed) => {
                self.change_log.record(
                    Level::Info,
                    format!("Deleted row: ID={}, {}", removed.id, removed.name),
                );
                self.observers.refresh_requested();
                true
            }
            None => {
                self.change_log.record(
                    Level::Info,
                    format!("Delete skipped, row not present: ID={}", record.id),
                );
                false
            }
        }
    }

    /// Notifies that the UI opened an editor on `record`.
    pub fn begin_edit(&mut self, record: &EmployeeRecord) {
        self.change_log
            .record(Level::Info, format!("StartedEditingItem: {}", record.name));
        self.observers.edit_started(record);
    }

    /// Notifies that the UI discarded an edit; `record` stays unchanged.
    pub fn cancel_edit(&mut self, record: &EmployeeRecord) {
        self.change_log
            .record(Level::Info, format!("CancelledEditingItem: {}", record.name));
        self.observers.edit_cancelled(record);
    }

    /// Checks `value` against the rule for `field` without committing.
    pub fn validate_change(&self, value: &CellValue, field: &str) -> EditResult<()> {
        let field = parse_field(field)?;
        validate_field(&self.config, field, value).map(|_| ())
    }

    /// Validates and commits one cell edit on `record`.
    ///
    /// # Contract
    /// - `field` matches `name|age|salary|hiredate|department|skills`,
    ///   case-insensitively.
    /// - The value is validated before anything is written.
    /// - The stored row with `record.id` is replaced by a copy carrying the
    ///   new value; all other fields keep their stored values.
    /// - On commit, observers get `on_edit_committed` then
    ///   `on_refresh_requested`.
    ///
    /// # Errors
    /// - `UnknownField`, `Validation`: nothing written.
    /// - `RecordNotFound`: value was valid but the row is gone.
    /// - `Unexpected`: a fault was caught inside the pipeline.
    pub fn apply_cell_edit(
        &mut self,
        record: &EmployeeRecord,
        value: impl Into<CellValue>,
        field: &str,
    ) -> EditResult<EditCommit> {
        let value = value.into();
        self.change_log.record(
            Level::Info,
            format!("OnCellChange: ID={}, {field} = {value}", record.id),
        );

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.commit_cell_edit(record, &value, field)
        }));

        outcome.unwrap_or_else(|payload| {
            let detail = payload_summary(payload.as_ref());
            self.change_log
                .record(Level::Error, format!("Exception in OnCellChange: {detail}"));
            Err(EditError::Unexpected(detail))
        })
    }

    fn commit_cell_edit(
        &mut self,
        record: &EmployeeRecord,
        value: &CellValue,
        field: &str,
    ) -> EditResult<EditCommit> {
        let field = match parse_field(field) {
            Ok(field) => field,
            Err(err) => {
                self.change_log
                    .record(Level::Warn, format!("Unknown property: {field}"));
                return Err(err);
            }
        };

        let update = match validate_field(&self.config, field, value) {
            Ok(update) => update,
            Err(err) => {
                self.change_log.record(
                    Level::Warn,
                    format!("Validation failed for {field}: {}", validation_reason(&err)),
                );
                return Err(err);
            }
        };

        let Some(stored) = self.repo.get(record.id) else {
            self.change_log.record(
                Level::Warn,
                format!("Employee not found in list: ID={}", record.id),
            );
            return Err(EditError::RecordNotFound(record.id));
        };

        let mut working = stored.clone();
        update.apply(&mut working);

        let index = match self.repo.replace(working.clone()) {
            Ok(index) => index,
            Err(err) => {
                let err = EditError::from(err);
                self.change_log.record(Level::Warn, err.to_string());
                return Err(err);
            }
        };

        self.change_log.record(
            Level::Info,
            format!("Updated employee at index {index}: {}", working.name),
        );
        self.notify_committed(&working);
        self.observers.refresh_requested();

        Ok(EditCommit {
            index,
            record: working,
        })
    }

    fn notify_committed(&mut self, record: &EmployeeRecord) {
        self.change_log.record(
            Level::Info,
            format!(
                "CommittedItemChanges: {} - {}",
                record.name, record.department
            ),
        );
        self.observers.edit_committed(record);
    }
}

fn parse_field(name: &str) -> EditResult<EmployeeField> {
    EmployeeField::parse(name).ok_or_else(|| EditError::UnknownField(name.to_string()))
}

fn validation_reason(err: &EditError) -> String {
    match err {
        EditError::Validation { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{years_before, EmployeeGrid};
    use crate::config::GridConfig;
    use crate::model::cell::CellValue;
    use crate::service::hooks::GridObserver;
    use chrono::NaiveDate;
    use std::cell::Cell;
    use std::rc::Rc;

    struct PanickingObserver;

    impl GridObserver for PanickingObserver {
        fn on_edit_committed(&mut self, _record: &crate::EmployeeRecord) {
            panic!("observer exploded");
        }
    }

    struct RefreshCounter(Rc<Cell<usize>>);

    impl GridObserver for RefreshCounter {
        fn on_refresh_requested(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn years_before_clamps_leap_day() {
        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            years_before(leap, 1),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    #[test]
    fn sample_data_seeds_three_valid_rows() {
        let grid = EmployeeGrid::with_sample_data();
        let ids: Vec<i64> = grid.rows().iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        for row in grid.rows() {
            assert!(grid.departments().contains(&row.department));
            assert!(row.skills.iter().all(|skill| grid.skills().contains(skill)));
        }
        assert!(grid.change_log().is_empty());
    }

    #[test]
    fn panic_inside_pipeline_is_reported_and_session_survives() {
        let mut grid = EmployeeGrid::with_sample_data();
        grid.subscribe(Box::new(PanickingObserver));
        let record = grid.get(1).cloned().unwrap();

        let err = grid
            .apply_cell_edit(&record, "HR", "department")
            .unwrap_err();
        assert!(matches!(err, crate::EditError::Unexpected(ref detail) if detail.contains("observer exploded")));
        assert!(grid.change_log().contains("Exception in OnCellChange"));

        // The row was replaced before the observer fault; the grid stays usable.
        assert_eq!(grid.get(1).unwrap().department, "HR");
        let next = grid.add_row().unwrap();
        assert_eq!(next.id, 4);
    }

    #[test]
    fn refresh_is_requested_for_add_delete_and_commit_only() {
        let refreshes = Rc::new(Cell::new(0));
        let mut grid = EmployeeGrid::new(GridConfig::default()).unwrap();
        grid.subscribe(Box::new(RefreshCounter(Rc::clone(&refreshes))));

        let row = grid.add_row().unwrap();
        grid.apply_cell_edit(&row, "Ada", "name").unwrap();
        grid.apply_cell_edit(&row, CellValue::Empty, "hiredate")
            .unwrap_err();
        assert!(grid.delete_row(&row));
        assert!(!grid.delete_row(&row));

        assert_eq!(refreshes.get(), 3);
    }
}
