use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rat, sample_rows, setup_dir, write_config, write_utf16_log};

fn sheet_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read sheet")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_process_writes_monthly_sheet() {
    let dir = setup_dir("process_writes_sheet");
    let cfg = write_config(&dir, "");
    let log = write_utf16_log(&dir, "daily.csv", &sample_rows());

    rat()
        .args(["--config", &cfg, "process", "--file", &log, "--date", "2/8/2025"])
        .assert()
        .success()
        .stdout(contains("2/3 present"));

    let out = dir.join("Monthly_Attendance_2_8_2025.csv");
    assert_eq!(
        sheet_lines(&out),
        vec!["Name,2/8/2025", "Jane Doe,Y", "John Smith,N", "Ann Lee,Y"]
    );
}

#[test]
fn test_process_details_and_custom_threshold() {
    let dir = setup_dir("process_details");
    let cfg = write_config(&dir, "");
    let log = write_utf16_log(&dir, "daily.csv", &sample_rows());

    rat()
        .args([
            "--config",
            &cfg,
            "process",
            "--file",
            &log,
            "--date",
            "2/8/2025",
            "--min-fraction",
            "0.5",
            "--details",
        ])
        .assert()
        .success()
        .stdout(contains("John Smith").and(contains("1:00:00")))
        .stdout(contains("Jane Doe").and(contains("1:50:00")));

    let out = dir.join("Monthly_Attendance_2_8_2025.csv");
    assert_eq!(
        sheet_lines(&out),
        vec!["Name,2/8/2025", "Jane Doe,Y", "John Smith,Y", "Ann Lee,Y"]
    );
}

#[test]
fn test_process_extends_existing_sheet() {
    let dir = setup_dir("process_extends_sheet");
    let cfg = write_config(&dir, "");
    let prior = dir.join("Monthly_Attendance_2_1_2025.csv");
    fs::write(&prior, "Name,2/1/2025\nJane Doe,N\nMark Twain,Y\n").unwrap();

    let log = write_utf16_log(&dir, "daily.csv", &sample_rows());

    rat()
        .args([
            "--config",
            &cfg,
            "process",
            "--file",
            &log,
            "--date",
            "2/8/2025",
            "--sheet",
            &prior.to_string_lossy(),
        ])
        .assert()
        .success();

    let out = dir.join("Monthly_Attendance_2_8_2025.csv");
    assert_eq!(
        sheet_lines(&out),
        vec![
            "Name,2/1/2025,2/8/2025",
            "Jane Doe,N,Y",
            "Mark Twain,Y,",
            "John Smith,,N",
            "Ann Lee,,Y",
        ]
    );
}

#[test]
fn test_process_missing_file_fails() {
    let dir = setup_dir("process_missing_file");
    let cfg = write_config(&dir, "");
    let missing = dir.join("nope.csv");

    rat()
        .args([
            "--config",
            &cfg,
            "process",
            "--file",
            &missing.to_string_lossy(),
            "--date",
            "2/8/2025",
        ])
        .assert()
        .failure()
        .stderr(contains("not found"));

    assert!(!dir.join("Monthly_Attendance_2_8_2025.csv").exists());
}

#[test]
fn test_process_wrong_encoding_fails() {
    let dir = setup_dir("process_wrong_encoding");
    let cfg = write_config(&dir, "");
    let log = dir.join("daily.csv");
    fs::write(&log, common::meeting_log(&sample_rows())).unwrap();

    rat()
        .args([
            "--config",
            &cfg,
            "process",
            "--file",
            &log.to_string_lossy(),
            "--date",
            "2/8/2025",
        ])
        .assert()
        .failure()
        .stderr(contains("not encoded in UTF-16"));

    assert!(!dir.join("Monthly_Attendance_2_8_2025.csv").exists());
}

#[test]
fn test_process_utf8_when_configured() {
    let dir = setup_dir("process_utf8");
    let cfg = write_config(&dir, "input_encoding: auto\n");
    let log = dir.join("daily.csv");
    fs::write(&log, common::meeting_log(&sample_rows())).unwrap();

    rat()
        .args([
            "--config",
            &cfg,
            "process",
            "--file",
            &log.to_string_lossy(),
            "--date",
            "2/8/2025",
        ])
        .assert()
        .success();

    assert!(dir.join("Monthly_Attendance_2_8_2025.csv").exists());
}

#[test]
fn test_process_missing_column_writes_nothing() {
    let dir = setup_dir("process_missing_column");
    let cfg = write_config(&dir, "");
    let log = dir.join("daily.csv");
    fs::write(
        &log,
        common::utf16le("Name\tUser Action\tTimestamp\nJane\tJoined\t2/8/25, 9:00:00 PM\n"),
    )
    .unwrap();

    rat()
        .args([
            "--config",
            &cfg,
            "process",
            "--file",
            &log.to_string_lossy(),
            "--date",
            "2/8/2025",
        ])
        .assert()
        .failure()
        .stderr(contains("Full Name"));

    assert!(!dir.join("Monthly_Attendance_2_8_2025.csv").exists());
}

#[test]
fn test_process_leave_before_join_fails() {
    let dir = setup_dir("process_leave_first");
    let cfg = write_config(&dir, "");
    let log = write_utf16_log(
        &dir,
        "daily.csv",
        &[
            ("Jane Doe", "Left", "2/8/25, 9:00:00 PM"),
            ("Jane Doe", "Joined", "2/8/25, 9:05:00 PM"),
        ],
    );

    rat()
        .args(["--config", &cfg, "process", "--file", &log, "--date", "2/8/2025"])
        .assert()
        .failure()
        .stderr(contains("precedes"));
}

#[test]
fn test_process_rejects_bad_date() {
    let dir = setup_dir("process_bad_date");
    let cfg = write_config(&dir, "");
    let log = write_utf16_log(&dir, "daily.csv", &sample_rows());

    rat()
        .args(["--config", &cfg, "process", "--file", &log, "--date", "2025-02-08"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_process_uses_configured_input_and_date() {
    let dir = setup_dir("process_config_defaults");
    let log = write_utf16_log(&dir, "daily.csv", &sample_rows());
    let cfg = write_config(&dir, &format!("input_file: '{log}'\ndate: '2/8/2025'\n"));

    rat()
        .args(["--config", &cfg, "process"])
        .assert()
        .success();

    assert!(dir.join("Monthly_Attendance_2_8_2025.csv").exists());
}

#[test]
fn test_show_and_export() {
    let dir = setup_dir("show_and_export");
    let cfg = write_config(&dir, "");
    let log = write_utf16_log(&dir, "daily.csv", &sample_rows());

    rat()
        .args(["--config", &cfg, "process", "--file", &log, "--date", "2/8/2025"])
        .assert()
        .success();

    let sheet = dir.join("Monthly_Attendance_2_8_2025.csv");
    let sheet = sheet.to_string_lossy();

    rat()
        .args(["--config", &cfg, "show", "--sheet", &sheet])
        .assert()
        .success()
        .stdout(contains("Ann Lee").and(contains("1/1")).and(contains("0/1")));

    let json = dir.join("attendance.json");
    rat()
        .args([
            "--config",
            &cfg,
            "export",
            "--sheet",
            &sheet,
            "--format",
            "json",
            "--file",
            &json.to_string_lossy(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&json).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value[0]["name"], "Jane Doe");
    assert_eq!(value[0]["marks"][0]["date"], "2/8/2025");
    assert_eq!(value[0]["marks"][0]["mark"], "Y");
    assert_eq!(value[1]["present"], 0);

    let xlsx = dir.join("attendance.xlsx");
    rat()
        .args([
            "--config",
            &cfg,
            "export",
            "--sheet",
            &sheet,
            "--format",
            "xlsx",
            "--file",
            &xlsx.to_string_lossy(),
        ])
        .assert()
        .success();
    assert!(xlsx.exists());
}

#[test]
fn test_json_export_keeps_column_order() {
    let dir = setup_dir("json_column_order");
    let cfg = write_config(&dir, "");
    let sheet = dir.join("Monthly_Attendance_2_22_2025.csv");
    fs::write(
        &sheet,
        "Name,2/8/2025,2/15/2025,2/22/2025\nJane Doe,Y,N,Y\nJohn Smith,,Y,\n",
    )
    .unwrap();

    let json = dir.join("ordered.json");
    rat()
        .args([
            "--config",
            &cfg,
            "export",
            "--sheet",
            &sheet.to_string_lossy(),
            "--format",
            "json",
            "--file",
            &json.to_string_lossy(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&json).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let dates: Vec<&str> = value[0]["marks"]
        .as_array()
        .expect("marks array")
        .iter()
        .map(|m| m["date"].as_str().expect("date"))
        .collect();
    assert_eq!(dates, vec!["2/8/2025", "2/15/2025", "2/22/2025"]);
    assert_eq!(value[0]["marks"][1]["mark"], "N");

    assert_eq!(value[1]["marks"].as_array().expect("marks array").len(), 1);
    assert_eq!(value[1]["marks"][0]["date"], "2/15/2025");
    assert_eq!(value[1]["present"], 1);
}

#[test]
fn test_export_requires_absolute_path() {
    let dir = setup_dir("export_relative");
    let cfg = write_config(&dir, "");
    let sheet = dir.join("sheet.csv");
    fs::write(&sheet, "Name,2/8/2025\nJane,Y\n").unwrap();

    rat()
        .args([
            "--config",
            &cfg,
            "export",
            "--sheet",
            &sheet.to_string_lossy(),
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}

#[test]
fn test_existing_output_needs_force() {
    let dir = setup_dir("process_force");
    let cfg = write_config(&dir, "");
    let log = write_utf16_log(&dir, "daily.csv", &sample_rows());
    let out = dir.join("Monthly_Attendance_2_8_2025.csv");
    fs::write(&out, "Name,2/8/2025\n").unwrap();

    // no confirmation on stdin → cancelled, file untouched
    rat()
        .args(["--config", &cfg, "process", "--file", &log, "--date", "2/8/2025"])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(sheet_lines(&out), vec!["Name,2/8/2025"]);

    rat()
        .args([
            "--config", &cfg, "process", "--file", &log, "--date", "2/8/2025", "--force",
        ])
        .assert()
        .success();
    assert_eq!(sheet_lines(&out).len(), 4);
}

#[test]
fn test_journal_records_runs() {
    let dir = setup_dir("journal");
    let cfg = write_config(&dir, "");
    let log = write_utf16_log(&dir, "daily.csv", &sample_rows());

    rat()
        .args(["--config", &cfg, "process", "--file", &log, "--date", "2/8/2025"])
        .assert()
        .success();

    rat()
        .args(["--config", &cfg, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("process").and(contains("2/8/2025")));
}

#[test]
fn test_init_test_mode_and_config_print() {
    let dir = setup_dir("init_test_mode");
    let cfg = dir.join("fresh.conf");
    let cfg = cfg.to_string_lossy();

    rat()
        .env("HOME", &dir)
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("21:00"));
    assert!(!dir.join("fresh.conf").exists());

    rat()
        .env("HOME", &dir)
        .args(["--config", &cfg, "init"])
        .assert()
        .success();
    assert!(dir.join("fresh.conf").exists());

    rat()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("window_start").and(contains("min_attendance_fraction")));
}
