//! Event normalization: participant names, timestamps and column headers
//! as they come out of a meeting attendance log.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Annotation some meeting tools append to guests' names.
pub const UNVERIFIED_MARK: &str = "(Unverified)";

const TIMESTAMP_FMT: &str = "%m/%d/%y, %I:%M:%S %p";
const TIMESTAMP_FMT_LONG_YEAR: &str = "%m/%d/%Y, %I:%M:%S %p";

/// Parse a log timestamp such as `2/8/25, 9:05:12 PM`.
///
/// Month, day and hour need no zero padding. Non-breaking spaces (U+00A0,
/// U+202F) are treated as regular spaces. A four-digit year is accepted as
/// a fallback.
pub fn parse_timestamp(raw: &str) -> AppResult<NaiveDateTime> {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| if c == '\u{a0}' || c == '\u{202f}' { ' ' } else { c })
        .collect();

    NaiveDateTime::parse_from_str(&cleaned, TIMESTAMP_FMT)
        .or_else(|_| NaiveDateTime::parse_from_str(&cleaned, TIMESTAMP_FMT_LONG_YEAR))
        .map_err(|_| AppError::MalformedTimestamp {
            value: raw.to_string(),
        })
}

/// Clean a participant name: trim, drop every `(Unverified)` and trim again.
///
/// Case and punctuation are left alone, so `jane doe` and `Jane Doe` stay
/// two distinct participants.
pub fn clean_identity(raw: Option<&str>) -> Option<String> {
    raw.map(|name| name.trim().replace(UNVERIFIED_MARK, "").trim().to_string())
}

/// Normalize a column header before matching it against the required names.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .replace('\u{a0}', " ")
        .trim()
        .to_string()
}
