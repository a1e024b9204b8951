use super::decode::decode_text;
use crate::config::{Config, InputEncoding};
use crate::core::normalizer::{normalize_header, parse_timestamp};
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::event::AttendanceEvent;
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;

pub const COL_FULL_NAME: &str = "Full Name";
pub const COL_USER_ACTION: &str = "User Action";
pub const COL_TIMESTAMP: &str = "Timestamp";

pub const REQUIRED_COLUMNS: [&str; 3] = [COL_FULL_NAME, COL_USER_ACTION, COL_TIMESTAMP];

#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    pub encoding: InputEncoding,
    pub delimiter: u8,
    pub skip_malformed_rows: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            encoding: InputEncoding::Utf16,
            delimiter: b'\t',
            skip_malformed_rows: false,
        }
    }
}

impl ReadOptions {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            encoding: cfg.input_encoding,
            delimiter: cfg.delimiter_byte()?,
            skip_malformed_rows: cfg.skip_malformed_rows,
        })
    }
}

/// A row left out because its timestamp could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

/// Parsed content of a daily meeting log.
#[derive(Debug, Clone, Default)]
pub struct DailyLog {
    pub columns: Vec<String>,
    pub events: Vec<AttendanceEvent>,
    /// rows whose action is neither `Joined` nor `Left`
    pub ignored_actions: usize,
    pub skipped_rows: Vec<SkippedRow>,
}

/// Read and parse the daily log at `path`.
pub fn read_daily_log(path: &Path, opts: &ReadOptions) -> AppResult<DailyLog> {
    if !path.is_file() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let bytes = fs::read(path)?;
    let text = decode_text(&bytes, opts.encoding, &path.display().to_string())?;

    parse_daily_log(&text, opts)
}

/// Parse already decoded log text.
pub fn parse_daily_log(text: &str, opts: &ReadOptions) -> AppResult<DailyLog> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = rdr.headers()?.iter().map(normalize_header).collect();

    let position = |name: &str| -> AppResult<usize> {
        columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| AppError::MissingRequiredColumn {
                column: name.to_string(),
                found: columns.join(", "),
            })
    };

    let i_name = position(COL_FULL_NAME)?;
    let i_action = position(COL_USER_ACTION)?;
    let i_time = position(COL_TIMESTAMP)?;

    let mut log = DailyLog {
        columns: columns.clone(),
        ..Default::default()
    };

    for record in rdr.records() {
        let record = record?;

        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let timestamp = match parse_timestamp(field(&record, i_time)) {
            Ok(ts) => ts,
            Err(e) if opts.skip_malformed_rows => {
                log.skipped_rows.push(SkippedRow {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
            Err(e) => return Err(e),
        };

        let Some(action) = Action::from_log_str(field(&record, i_action)) else {
            log.ignored_actions += 1;
            continue;
        };

        let raw_name = field(&record, i_name);
        let participant = if raw_name.trim().is_empty() {
            None
        } else {
            Some(raw_name.to_string())
        };

        log.events
            .push(AttendanceEvent::new(participant, action, timestamp));
    }

    Ok(log)
}

fn field(record: &StringRecord, i: usize) -> &str {
    record.get(i).unwrap_or("")
}
