use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Official time-of-day bounds of a session.
///
/// Any attendance outside `[start, end]` earns no credit: timestamps falling
/// outside are clamped to the nearest bound on the join's calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Default for CanonicalWindow {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(21, 0, 0).expect("21:00 is a valid time"),
            end: NaiveTime::from_hms_opt(23, 0, 0).expect("23:00 is a valid time"),
        }
    }
}

impl CanonicalWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        if end <= start {
            return Err(AppError::Config(format!(
                "session window end ({}) must be after its start ({})",
                end.format("%H:%M"),
                start.format("%H:%M")
            )));
        }
        Ok(Self { start, end })
    }

    /// Full length of the session (`end - start`).
    pub fn session_duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Official close of the session on `date`.
    pub fn end_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.end)
    }

    /// Clamp an interval to the window.
    ///
    /// Only the time-of-day is rewritten, always on the join's date.
    /// An already clamped interval is returned unchanged.
    pub fn clamp(&self, join: NaiveDateTime, leave: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
        let date = join.date();

        let join = if join.time() < self.start {
            date.and_time(self.start)
        } else {
            join
        };

        let leave = if leave.time() > self.end {
            date.and_time(self.end)
        } else {
            leave
        };

        (join, leave)
    }

    pub fn label(&self) -> String {
        format!(
            "{}–{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
