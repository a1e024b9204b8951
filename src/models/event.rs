use super::action::Action;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A single join/leave row of a daily meeting log.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttendanceEvent {
    pub participant: Option<String>, // ⇔ "Full Name" (raw, not cleaned)
    pub action: Action,              // ⇔ "User Action"
    pub timestamp: NaiveDateTime,    // ⇔ "Timestamp"
}

impl AttendanceEvent {
    pub fn new(participant: Option<String>, action: Action, timestamp: NaiveDateTime) -> Self {
        Self {
            participant,
            action,
            timestamp,
        }
    }

    pub fn join(participant: &str, timestamp: NaiveDateTime) -> Self {
        Self::new(Some(participant.to_string()), Action::Join, timestamp)
    }

    pub fn leave(participant: &str, timestamp: NaiveDateTime) -> Self {
        Self::new(Some(participant.to_string()), Action::Leave, timestamp)
    }

    /// Participant name for messages; empty names are shown as `<unnamed>`.
    pub fn participant_label(&self) -> &str {
        self.participant.as_deref().unwrap_or("<unnamed>")
    }
}
