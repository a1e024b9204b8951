use crate::config::Config;
use crate::journal::ttlog;
use crate::ui::messages::warning;
use std::path::PathBuf;

/// Resolved runtime state shared by every command handler.
pub struct Context {
    pub cfg: Config,
    pub config_path: PathBuf,
    /// test mode: no config file writes, no journal
    pub test: bool,
}

impl Context {
    /// Record an operation in the journal. Failures are reported, never fatal.
    pub fn journal(&self, operation: &str, target: &str, message: &str) {
        if self.test {
            return;
        }
        if let Err(e) = ttlog(&self.cfg.journal_path(), operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
}
