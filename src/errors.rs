//! Unified application error type.
//! All modules (ingest, core, sheet, export, cli) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Daily attendance file '{0}' not found")]
    FileNotFound(String),

    #[error("The file '{path}' is not encoded in {expected}: {reason}")]
    EncodingMismatch {
        path: String,
        expected: String,
        reason: String,
    },

    // ---------------------------
    // Input schema / parsing errors
    // ---------------------------
    #[error("Missing required column '{column}' (found: {found})")]
    MissingRequiredColumn { column: String, found: String },

    #[error("Malformed timestamp '{value}' (expected M/D/YY, H:MM:SS AM/PM)")]
    MalformedTimestamp { value: String },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("'Left' event for '{participant}' at {at} precedes any 'Joined' event")]
    LeaveBeforeJoin { participant: String, at: String },

    #[error("Monthly sheet error: {0}")]
    Sheet(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
