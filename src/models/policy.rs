use super::window::CanonicalWindow;
use crate::errors::{AppError, AppResult};

/// Minimum share of the session a participant must attend to be marked present.
pub const DEFAULT_MIN_FRACTION: f64 = 0.8;

/// Everything the reconciliation core needs to turn events into verdicts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendancePolicy {
    pub window: CanonicalWindow,
    pub min_fraction: f64,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            window: CanonicalWindow::default(),
            min_fraction: DEFAULT_MIN_FRACTION,
        }
    }
}

impl AttendancePolicy {
    pub fn new(window: CanonicalWindow, min_fraction: f64) -> AppResult<Self> {
        if !min_fraction.is_finite() || !(0.0..=1.0).contains(&min_fraction) {
            return Err(AppError::Config(format!(
                "minimum attendance fraction must be between 0 and 1, got {min_fraction}"
            )));
        }
        Ok(Self {
            window,
            min_fraction,
        })
    }
}
