//! ANSI color helper utilities for terminal output.
use crate::models::verdict::Verdict;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Present → green, absent → red
pub fn color_for_verdict(v: Verdict) -> &'static str {
    match v {
        Verdict::Present => GREEN,
        Verdict::Absent => RED,
    }
}

/// Colored mark for a sheet cell; empty cells become a grey `-`.
pub fn colorize_mark(v: Option<Verdict>) -> String {
    match v {
        Some(v) => format!("{}{}{}", color_for_verdict(v), v.mark(), RESET),
        None => format!("{GREY}-{RESET}"),
    }
}

/// Negative spans (join after the window end) are shown in yellow.
pub fn colorize_duration(value: &str, negative: bool) -> String {
    if negative {
        format!("{YELLOW}{value}{RESET}")
    } else {
        value.to_string()
    }
}
