//! Formatting utilities used for CLI and export outputs.

use chrono::TimeDelta;
use unicode_width::UnicodeWidthStr;

/// `H:MM:SS`, with a leading `-` for negative spans.
pub fn format_duration(d: TimeDelta) -> String {
    let sign = if d < TimeDelta::zero() { "-" } else { "" };
    let secs = d.num_seconds().abs();
    format!("{}{}:{:02}:{:02}", sign, secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Share of the session attended, e.g. ` 80.0%`.
pub fn percent_of(part: TimeDelta, whole: TimeDelta) -> String {
    if whole <= TimeDelta::zero() {
        return "   n/a".to_string();
    }
    let pct = part.num_milliseconds() as f64 * 100.0 / whole.num_milliseconds() as f64;
    format!("{:>5.1}%", pct)
}

/// Remove ANSI escape sequences (for width computations).
pub fn strip_ansi(s: &str) -> String {
    match regex::Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// Visible width of a possibly colored string.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}
