use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;
use crate::models::session::ParticipantSession;
use crate::models::window::CanonicalWindow;
use chrono::{NaiveDateTime, TimeDelta};
use std::collections::HashMap;

/// One join/leave pair after clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub join: NaiveDateTime,
    pub leave: NaiveDateTime,
    /// `true` when the leave was synthesized at the window end
    pub open: bool,
}

impl Interval {
    /// Signed length; may be zero or negative when the join is past the window end.
    pub fn duration(&self) -> TimeDelta {
        self.leave - self.join
    }
}

/// Total attended time of one participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantDuration {
    pub participant: Option<String>, // raw identity, as found in the log
    pub intervals: Vec<Interval>,
    pub total: TimeDelta,
    pub ignored_leaves: usize,
}

/// Group events by raw participant identity.
///
/// Order of the result follows the first appearance of each identity, and
/// join/leave times keep the log order. A `Left` seen before any `Joined`
/// of the same participant is rejected.
pub fn group_sessions(events: &[AttendanceEvent]) -> AppResult<Vec<ParticipantSession>> {
    let mut sessions: Vec<ParticipantSession> = Vec::new();
    let mut index: HashMap<Option<String>, usize> = HashMap::new();

    for ev in events {
        let slot = *index.entry(ev.participant.clone()).or_insert_with(|| {
            sessions.push(ParticipantSession::new(ev.participant.clone()));
            sessions.len() - 1
        });
        let session = &mut sessions[slot];

        if ev.action.is_join() {
            session.join_times.push(ev.timestamp);
        } else {
            if session.join_times.is_empty() {
                return Err(AppError::LeaveBeforeJoin {
                    participant: ev.participant_label().to_string(),
                    at: ev.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                });
            }
            session.leave_times.push(ev.timestamp);
        }
    }

    Ok(sessions)
}

/// Pair the i-th join with the i-th leave and clamp each pair to the window.
///
/// Joins without a leave close at the window end of the join's date; leaves
/// beyond the number of joins are never consumed.
pub fn pair_intervals(session: &ParticipantSession, window: &CanonicalWindow) -> Vec<Interval> {
    session
        .join_times
        .iter()
        .enumerate()
        .map(|(i, &join)| {
            let (leave, open) = match session.leave_times.get(i) {
                Some(&leave) => (leave, false),
                None => (window.end_on(join.date()), true),
            };

            let (join, leave) = window.clamp(join, leave);

            Interval { join, leave, open }
        })
        .collect()
}

/// Reconcile a day's events into a total duration per raw participant identity.
pub fn reconcile(
    events: &[AttendanceEvent],
    window: &CanonicalWindow,
) -> AppResult<Vec<ParticipantDuration>> {
    let sessions = group_sessions(events)?;

    let durations = sessions
        .into_iter()
        .map(|session| {
            let intervals = pair_intervals(&session, window);

            // zero and negative contributions are summed as they are
            let total = intervals
                .iter()
                .fold(TimeDelta::zero(), |acc, iv| acc + iv.duration());

            ParticipantDuration {
                ignored_leaves: session.surplus_leaves(),
                participant: session.participant,
                intervals,
                total,
            }
        })
        .collect();

    Ok(durations)
}
