use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use staffgrid_core::{
    ConfigError, EmployeeGrid, EmployeeRecord, EmployeeRepository, GridConfig,
    InMemoryEmployeeRepository,
};

fn record(id: i64) -> EmployeeRecord {
    EmployeeRecord::new(id, NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(), "IT")
}

#[test]
fn add_row_on_empty_grid_uses_id_one_and_defaults() {
    let mut grid = EmployeeGrid::new(GridConfig::default()).unwrap();

    let row = grid.add_row().unwrap();
    assert_eq!(row.id, 1);
    assert_eq!(row.name, "");
    assert_eq!(row.age, 25);
    assert_eq!(row.salary, Decimal::from(30_000_000));
    assert_eq!(row.hire_date, Local::now().date_naive());
    assert_eq!(row.department, "IT");
    assert!(row.skills.is_empty());

    assert_eq!(grid.rows(), &[row]);
    assert!(grid.change_log().contains("Added row: ID=1"));
}

#[test]
fn add_row_follows_max_id_not_row_count() {
    let repo = InMemoryEmployeeRepository::from_rows(vec![record(7), record(3)]).unwrap();
    let mut grid = EmployeeGrid::with_repository(repo, GridConfig::default()).unwrap();

    assert_eq!(grid.add_row().unwrap().id, 8);
    assert_eq!(grid.add_row().unwrap().id, 9);

    let ids: Vec<i64> = grid.rows().iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![7, 3, 8, 9]);
}

#[test]
fn add_row_uses_configured_defaults() {
    let config = GridConfig {
        departments: vec!["Ops".to_string(), "IT".to_string()],
        default_age: 40,
        default_salary: Decimal::new(100_050, 2),
        ..GridConfig::default()
    };
    let mut grid = EmployeeGrid::new(config).unwrap();

    let row = grid.add_row().unwrap();
    assert_eq!(row.department, "Ops");
    assert_eq!(row.age, 40);
    assert_eq!(row.salary.to_string(), "1000.50");
}

#[test]
fn delete_row_removes_exactly_one_and_is_safe_to_repeat() {
    let mut grid = EmployeeGrid::with_sample_data();
    let target = grid.get(2).cloned().unwrap();

    assert!(grid.delete_row(&target));
    assert!(!grid.delete_row(&target));

    let ids: Vec<i64> = grid.rows().iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(grid.change_log().contains("Deleted row: ID=2"));
    assert!(grid.change_log().contains("Delete skipped, row not present: ID=2"));
}

#[test]
fn delete_then_add_reuses_freed_max_id() {
    let mut grid = EmployeeGrid::with_sample_data();
    let last = grid.get(3).cloned().unwrap();
    grid.delete_row(&last);

    assert_eq!(grid.add_row().unwrap().id, 3);
}

#[test]
fn add_row_fails_without_panicking_when_ids_are_exhausted() {
    let repo = InMemoryEmployeeRepository::from_rows(vec![record(i64::MAX)]).unwrap();
    let mut grid = EmployeeGrid::with_repository(repo, GridConfig::default()).unwrap();

    assert!(grid.add_row().is_none());
    assert_eq!(grid.len(), 1);
    assert_eq!(grid.rows()[0].id, i64::MAX);
    assert!(grid.change_log().contains("Failed to add row"));
}

#[test]
fn grid_rejects_invalid_config() {
    let config = GridConfig {
        departments: vec![],
        ..GridConfig::default()
    };
    let err = EmployeeGrid::new(config).err().unwrap();
    assert_eq!(err, ConfigError::EmptyList("departments"));
}

#[test]
fn reference_lists_are_exposed_for_selection_editors() {
    let grid = EmployeeGrid::new(GridConfig::default()).unwrap();
    assert_eq!(
        grid.departments(),
        &["IT", "HR", "Finance", "Marketing", "Sales"].map(String::from)
    );
    assert!(grid.skills().iter().any(|skill| skill == "Kubernetes"));
    assert!(grid.is_empty());
    assert_eq!(grid.len(), 0);
}

#[test]
fn repository_rows_are_visible_through_the_grid() {
    let mut repo = InMemoryEmployeeRepository::new();
    repo.insert(record(5)).unwrap();
    let grid = EmployeeGrid::with_repository(repo, GridConfig::default()).unwrap();

    assert_eq!(grid.get(5).map(|row| row.department.as_str()), Some("IT"));
    assert!(grid.get(6).is_none());
}
