use chrono::NaiveDate;
use rust_decimal::Decimal;
use staffgrid_core::{CellValue, EmployeeRecord, GridConfig};

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let mut record = EmployeeRecord::new(3, NaiveDate::from_ymd_opt(2023, 7, 14).unwrap(), "Finance");
    record.name = "Lê Văn C".to_string();
    record.age = 35;
    record.salary = Decimal::new(6_000_000_050, 2);
    record.skills = vec!["C#".to_string(), "Docker".to_string()];

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "Lê Văn C");
    assert_eq!(json["age"], 35);
    assert_eq!(json["salary"], "60000000.50");
    assert_eq!(json["hire_date"], "2023-07-14");
    assert_eq!(json["department"], "Finance");
    assert_eq!(json["skills"], serde_json::json!(["C#", "Docker"]));

    let decoded: EmployeeRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn cell_value_is_tagged_by_kind() {
    let json = serde_json::to_value(CellValue::from(vec!["SQL".to_string()])).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "tags", "value": ["SQL"]}));

    let date: CellValue =
        serde_json::from_value(serde_json::json!({"kind": "date", "value": "2024-01-31"}))
            .unwrap();
    assert_eq!(date, CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));

    let empty: CellValue = serde_json::from_value(serde_json::json!({"kind": "empty"})).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn grid_config_fills_missing_fields_with_defaults() {
    let config: GridConfig =
        serde_json::from_value(serde_json::json!({"departments": ["Ops"], "default_age": 30}))
            .unwrap();

    assert_eq!(config.departments, vec!["Ops".to_string()]);
    assert_eq!(config.default_age, 30);
    assert_eq!(config.skills, GridConfig::default().skills);
    config.validate().unwrap();
}
