use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use regex::Regex;

const SHEET_DATE_FMT: &str = "%m/%d/%Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Format a date the way sheet columns are labelled: `M/D/YYYY`, no padding.
pub fn format_sheet_date(d: NaiveDate) -> String {
    d.format("%-m/%-d/%Y").to_string()
}

/// Check a processing date (`M/D/YYYY`) and return it trimmed.
pub fn validate_sheet_date(s: &str) -> AppResult<String> {
    let s = s.trim();
    let re = Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").map_err(|e| AppError::Config(e.to_string()))?;

    if !re.is_match(s) || parse_sheet_date(s).is_none() {
        return Err(AppError::InvalidDate(format!("{s} (expected M/D/YYYY)")));
    }

    Ok(s.to_string())
}

pub fn parse_sheet_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), SHEET_DATE_FMT).ok()
}

/// File name of the monthly sheet produced for `date`
/// (separators replaced by underscores).
pub fn sheet_file_name(date: &str) -> String {
    format!("Monthly_Attendance_{}.csv", date.replace('/', "_"))
}
