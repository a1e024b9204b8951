use crate::models::verdict::Verdict;
use chrono::TimeDelta;

/// Minimum attended time required for a `session` long session.
///
/// Computed in microseconds and rounded to the nearest one.
pub fn required_duration(session: TimeDelta, min_fraction: f64) -> TimeDelta {
    let micros = session.num_microseconds().unwrap_or(i64::MAX) as f64 * min_fraction;
    TimeDelta::microseconds(micros.round() as i64)
}

/// `Present` when `total` reaches `session * min_fraction` (inclusive).
pub fn classify(total: TimeDelta, session: TimeDelta, min_fraction: f64) -> Verdict {
    if total >= required_duration(session, min_fraction) {
        Verdict::Present
    } else {
        Verdict::Absent
    }
}
