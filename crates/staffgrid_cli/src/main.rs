//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive one scripted grid session against `staffgrid_core`.
//! - Print rows and the change log so edit behaviour can be eyeballed.
//!
//! Pass an absolute directory as the first argument to also write rolling
//! diagnostic logs there.

use staffgrid_core::{default_log_level, init_logging, CellValue, EmployeeGrid};

fn main() {
    if let Some(log_dir) = std::env::args().nth(1) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut grid = EmployeeGrid::with_sample_data();
    let Some(added) = grid.add_row() else {
        eprintln!("add row failed; see change log");
        return;
    };

    let script: Vec<(i64, CellValue, &str)> = vec![
        (1, "HR".into(), "department"),
        (1, "15".into(), "age"),
        (2, vec!["COBOL".to_string()].into(), "skills"),
        (added.id, "Phạm Thị D".into(), "Name"),
        (added.id, "2024-05-20".into(), "hiredate"),
        (99, "X".into(), "name"),
    ];

    for (id, value, field) in script {
        let record = grid.get(id).cloned().unwrap_or_else(|| {
            let mut ghost = added.clone();
            ghost.id = id;
            ghost
        });
        grid.begin_edit(&record);
        match grid.apply_cell_edit(&record, value, field) {
            Ok(commit) => println!("ok    row={} -> {}", commit.index, commit.record),
            Err(err) => {
                grid.cancel_edit(&record);
                println!("error {err}");
            }
        }
    }

    println!();
    for row in grid.rows() {
        println!("{row}");
    }
    println!();
    for line in grid.change_log().lines() {
        println!("{line}");
    }
    log::info!(
        "event=cli_done module=cli status=ok rows={} log_entries={}",
        grid.len(),
        grid.change_log().len()
    );
}
