#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Fresh, empty working directory inside the system temp dir
pub fn setup_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rattendance_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Write a config file pointing output and journal into `dir`
pub fn write_config(dir: &PathBuf, extra: &str) -> String {
    let cfg_path = dir.join("rattendance.conf");
    let yaml = format!(
        "output_dir: '{}'\njournal_file: '{}'\n{}",
        dir.display(),
        dir.join("journal.log").display(),
        extra
    );
    fs::write(&cfg_path, yaml).expect("write config");
    cfg_path.to_string_lossy().to_string()
}

/// Encode `text` as UTF-16LE with a byte order mark
pub fn utf16le(text: &str) -> Vec<u8> {
    let mut out = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

/// Tab-separated meeting log with the usual three columns
pub fn meeting_log(rows: &[(&str, &str, &str)]) -> String {
    let mut text = String::from("Full Name\tUser Action\tTimestamp\n");
    for (name, action, ts) in rows {
        text.push_str(&format!("{name}\t{action}\t{ts}\n"));
    }
    text
}

/// A small log: Jane present, John absent, Ann (guest, never left) present
pub fn sample_rows() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("Jane Doe", "Joined", "2/8/25, 8:55:00 PM"),
        ("John Smith", "Joined", "2/8/25, 9:30:00 PM"),
        ("  Ann Lee (Unverified) ", "Joined", "2/8/25, 9:00:00 PM"),
        ("John Smith", "Left", "2/8/25, 10:30:00 PM"),
        ("Jane Doe", "Left", "2/8/25, 10:50:00 PM"),
    ]
}

pub fn write_utf16_log(dir: &PathBuf, file: &str, rows: &[(&str, &str, &str)]) -> String {
    let path = dir.join(file);
    fs::write(&path, utf16le(&meeting_log(rows))).expect("write log");
    path.to_string_lossy().to_string()
}

pub fn at(date: &str, time: &str) -> NaiveDateTime {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date");
    let t = NaiveTime::parse_from_str(time, "%H:%M:%S").expect("time");
    d.and_time(t)
}

pub fn hms(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("time")
}
