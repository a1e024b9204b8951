use chrono::NaiveDateTime;

/// Join and leave times of one participant, in log order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantSession {
    pub participant: Option<String>,
    pub join_times: Vec<NaiveDateTime>,
    pub leave_times: Vec<NaiveDateTime>,
}

impl ParticipantSession {
    pub fn new(participant: Option<String>) -> Self {
        Self {
            participant,
            join_times: Vec::new(),
            leave_times: Vec::new(),
        }
    }

    /// Leave events that no join will ever be paired with.
    pub fn surplus_leaves(&self) -> usize {
        self.leave_times.len().saturating_sub(self.join_times.len())
    }
}
