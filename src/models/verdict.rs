use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary attendance mark, persisted as `Y` / `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Y")]
    Present,
    #[serde(rename = "N")]
    Absent,
}

impl Verdict {
    pub fn mark(&self) -> &'static str {
        match self {
            Verdict::Present => "Y",
            Verdict::Absent => "N",
        }
    }

    pub fn from_mark(s: &str) -> Option<Self> {
        match s.trim() {
            "Y" => Some(Verdict::Present),
            "N" => Some(Verdict::Absent),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Verdict::Present)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mark())
    }
}

/// Outcome for one participant on one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceVerdict {
    pub participant: Option<String>, // cleaned identity
    pub date: String,
    pub total: TimeDelta,
    pub verdict: Verdict,
}
