//! End-to-end tests for the two-stage generator

use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::path::Path;
use trainplan_core::TrainingPlan;
use trainplan_render::generate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

type SheetCells = Vec<(String, Vec<(usize, usize, Data)>)>;

/// Every non-empty cell of every sheet, keyed by sheet name
fn snapshot(path: &Path) -> SheetCells {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    workbook
        .sheet_names()
        .into_iter()
        .map(|name| {
            let range = workbook.worksheet_range(&name).unwrap();
            let cells = range
                .used_cells()
                .map(|(row, col, value)| (row, col, value.clone()))
                .collect();
            (name, cells)
        })
        .collect()
}

#[test]
fn generates_two_sheet_workbook_named_after_the_date() {
    let dir = tempfile::tempdir().unwrap();
    let run_date = date(2026, 10, 16);
    let plan = TrainingPlan::standard(run_date);

    let path = generate(&plan, dir.path()).unwrap();

    let file_name = path.file_name().unwrap().to_str().unwrap();
    assert_eq!(file_name, "Training_Plan_20261016.xlsx");

    let digits = file_name
        .strip_prefix("Training_Plan_")
        .and_then(|rest| rest.strip_suffix(".xlsx"))
        .unwrap();
    assert_eq!(digits.len(), 8);
    assert_eq!(
        NaiveDate::parse_from_str(digits, "%Y%m%d").unwrap(),
        run_date
    );

    let workbook: Xlsx<_> = open_workbook(&path).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        vec!["Training Plan".to_string(), "Exercise Library".to_string()]
    );
}

#[test]
fn same_date_gives_identical_layout() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();
    let plan = TrainingPlan::standard(date(2026, 3, 2));

    let first = generate(&plan, first_dir.path()).unwrap();
    let second = generate(&plan, second_dir.path()).unwrap();

    assert_eq!(snapshot(&first), snapshot(&second));
}

#[test]
fn rerun_in_same_directory_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let plan = TrainingPlan::standard(date(2026, 3, 2));

    let first = generate(&plan, dir.path()).unwrap();
    let before = snapshot(&first);
    let second = generate(&plan, dir.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(before, snapshot(&second));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn different_dates_differ_only_in_start_date_label() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();

    let first = generate(&TrainingPlan::standard(date(2026, 3, 2)), first_dir.path()).unwrap();
    let second = generate(&TrainingPlan::standard(date(2026, 3, 9)), second_dir.path()).unwrap();

    let first = snapshot(&first);
    let second = snapshot(&second);
    assert_eq!(first.len(), second.len());

    let mut differing = Vec::new();
    for ((name, a), (_, b)) in first.iter().zip(&second) {
        assert_eq!(a.len(), b.len(), "{name}");
        for (x, y) in a.iter().zip(b) {
            assert_eq!((x.0, x.1), (y.0, y.1), "{name}");
            if x.2 != y.2 {
                differing.push((name.clone(), x.0, x.1));
            }
        }
    }

    // "Start Date:" value sits in B4
    assert_eq!(differing, vec![("Training Plan".to_string(), 3, 1)]);
}
