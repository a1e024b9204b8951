use serde::Serialize;

/// Kind of a meeting log row (`User Action` column).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Action {
    Join,
    Leave,
}

impl Action {
    /// Convert the log value → enum.
    ///
    /// `Joined before` marks someone already in the meeting when the log
    /// starts and counts as a join at its timestamp. Any other action yields
    /// `None` and the row is ignored.
    pub fn from_log_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Joined" | "Joined before" => Some(Action::Join),
            "Left" => Some(Action::Leave),
            _ => None,
        }
    }

    pub fn is_join(&self) -> bool {
        matches!(self, Action::Join)
    }
}
