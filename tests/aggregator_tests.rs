mod common;
use chrono::TimeDelta;
use common::{at, setup_dir};
use rattendance::core::aggregator::{MonthlySheet, SheetRow};
use rattendance::core::process::evaluate_day;
use rattendance::errors::AppError;
use rattendance::models::event::AttendanceEvent;
use rattendance::models::policy::AttendancePolicy;
use rattendance::models::verdict::{AttendanceVerdict, Verdict};
use rattendance::sheet::{load_sheet, save_sheet};
use std::collections::HashMap;
use std::fs;

fn verdict(name: Option<&str>, date: &str, v: Verdict) -> AttendanceVerdict {
    AttendanceVerdict {
        participant: name.map(str::to_string),
        date: date.to_string(),
        total: TimeDelta::zero(),
        verdict: v,
    }
}

#[test]
fn test_append_to_empty_sheet() {
    let mut sheet = MonthlySheet::new();
    let summary = sheet.append_date_column(
        "2/8/2025",
        &[
            verdict(Some("Jane"), "2/8/2025", Verdict::Present),
            verdict(Some("John"), "2/8/2025", Verdict::Absent),
        ],
    );

    assert_eq!(summary.added_rows, 2);
    assert_eq!(sheet.dates(), ["2/8/2025".to_string()]);
    assert_eq!(sheet.get("Jane", "2/8/2025"), Some(Verdict::Present));
    assert_eq!(sheet.get("John", "2/8/2025"), Some(Verdict::Absent));
}

#[test]
fn test_same_date_twice_overwrites() {
    let mut sheet = MonthlySheet::new();
    sheet.append_date_column("2/8/2025", &[verdict(Some("Jane"), "2/8/2025", Verdict::Absent)]);
    let summary =
        sheet.append_date_column("2/8/2025", &[verdict(Some("Jane"), "2/8/2025", Verdict::Present)]);

    assert!(summary.replaced_column);
    assert_eq!(summary.updated_rows, 1);
    assert_eq!(sheet.rows().len(), 1);
    assert_eq!(sheet.dates().len(), 1);
    assert_eq!(sheet.get("Jane", "2/8/2025"), Some(Verdict::Present));
}

#[test]
fn test_new_date_adds_column_and_keeps_old_rows() {
    let mut sheet = MonthlySheet::new();
    sheet.append_date_column("2/8/2025", &[verdict(Some("Jane"), "2/8/2025", Verdict::Present)]);
    sheet.append_date_column(
        "2/9/2025",
        &[
            verdict(Some("John"), "2/9/2025", Verdict::Present),
            verdict(Some("Jane"), "2/9/2025", Verdict::Present),
        ],
    );

    assert_eq!(sheet.dates(), ["2/8/2025".to_string(), "2/9/2025".to_string()]);
    let names: Vec<_> = sheet.rows().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Jane", "John"]);
    assert_eq!(sheet.get("John", "2/8/2025"), None);
    assert_eq!(sheet.present_count("Jane"), 2);
    assert_eq!(sheet.present_count("John"), 1);
    assert_eq!(sheet.present_count("Nobody"), 0);
}

#[test]
fn test_unnamed_verdicts_are_skipped() {
    let mut sheet = MonthlySheet::new();
    let summary = sheet.append_date_column("2/8/2025", &[verdict(None, "2/8/2025", Verdict::Present)]);

    assert_eq!(summary.skipped_unnamed, 1);
    assert!(sheet.rows().is_empty());
}

#[test]
fn test_identities_cleaning_to_same_name_share_a_row() {
    let events = vec![
        AttendanceEvent::join("Jane Doe (Unverified)", at("2025-02-08", "21:00:00")),
        AttendanceEvent::join("Jane Doe", at("2025-02-08", "22:50:00")),
        AttendanceEvent::leave("Jane Doe", at("2025-02-08", "23:00:00")),
    ];

    let report = evaluate_day(&events, &AttendancePolicy::default(), "2/8/2025").unwrap();
    assert_eq!(report.entries.len(), 2);

    let mut sheet = MonthlySheet::new();
    sheet.append_date_column("2/8/2025", &report.verdicts());

    assert_eq!(sheet.rows().len(), 1);
    // the later raw identity (10 minutes) wins
    assert_eq!(sheet.get("Jane Doe", "2/8/2025"), Some(Verdict::Absent));
}

#[test]
fn test_merged_identities_are_counted_once() {
    let mut sheet = MonthlySheet::new();
    sheet.append_date_column("2/1/2025", &[verdict(Some("John"), "2/1/2025", Verdict::Present)]);

    let summary = sheet.append_date_column(
        "2/8/2025",
        &[
            verdict(Some("Jane Doe"), "2/8/2025", Verdict::Present),
            verdict(Some("John"), "2/8/2025", Verdict::Absent),
            verdict(Some("Jane Doe"), "2/8/2025", Verdict::Absent),
            verdict(Some("John"), "2/8/2025", Verdict::Present),
        ],
    );

    assert_eq!(summary.added_rows, 1);
    assert_eq!(summary.updated_rows, 1);
    assert_eq!(sheet.get("Jane Doe", "2/8/2025"), Some(Verdict::Absent));
    assert_eq!(sheet.get("John", "2/8/2025"), Some(Verdict::Present));
}

#[test]
fn test_from_rows_rejects_duplicates() {
    let row = SheetRow {
        name: "Jane".to_string(),
        marks: HashMap::new(),
    };
    let dup_rows = MonthlySheet::from_rows(vec!["2/8/2025".into()], vec![row.clone(), row]);
    assert!(matches!(dup_rows, Err(AppError::Sheet(_))));

    let dup_dates = MonthlySheet::from_rows(vec!["2/8/2025".into(), "2/8/2025".into()], vec![]);
    assert!(matches!(dup_dates, Err(AppError::Sheet(_))));
}

#[test]
fn test_sheet_survives_save_and_load() {
    let dir = setup_dir("sheet_save_load");
    let path = dir.join("Monthly.csv");

    let mut sheet = MonthlySheet::new();
    sheet.append_date_column("2/8/2025", &[verdict(Some("Jane"), "2/8/2025", Verdict::Present)]);
    sheet.append_date_column("2/9/2025", &[verdict(Some("John"), "2/9/2025", Verdict::Absent)]);

    save_sheet(&sheet, &path).expect("save");
    let loaded = load_sheet(&path).expect("load");

    assert_eq!(loaded, sheet);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines, vec!["Name,2/8/2025,2/9/2025", "Jane,Y,", "John,,N"]);
    assert!(!dir.join(".Monthly.csv.tmp").exists());
}

#[test]
fn test_load_sheet_rejects_bad_marks() {
    let dir = setup_dir("sheet_bad_marks");
    let path = dir.join("bad.csv");
    fs::write(&path, "Name,2/8/2025\nJane,maybe\n").unwrap();

    assert!(matches!(load_sheet(&path), Err(AppError::Sheet(_))));
}

#[test]
fn test_load_sheet_requires_name_column() {
    let dir = setup_dir("sheet_no_name");
    let path = dir.join("bad.csv");
    fs::write(&path, "Student,2/8/2025\nJane,Y\n").unwrap();

    assert!(matches!(load_sheet(&path), Err(AppError::Sheet(_))));
}
