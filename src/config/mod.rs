use crate::errors::{AppError, AppResult};
use crate::models::policy::{AttendancePolicy, DEFAULT_MIN_FRACTION};
use crate::models::window::CanonicalWindow;
use crate::utils::path::expand_tilde;
use crate::utils::{date, time};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Text encoding expected for the daily meeting log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEncoding {
    #[serde(rename = "utf-16")]
    Utf16,
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "auto")]
    Auto,
}

impl InputEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEncoding::Utf16 => "UTF-16",
            InputEncoding::Utf8 => "UTF-8",
            InputEncoding::Auto => "UTF-8/UTF-16",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_window_start")]
    pub window_start: String,
    #[serde(default = "default_window_end")]
    pub window_end: String,
    #[serde(default = "default_min_fraction")]
    pub min_attendance_fraction: f64,
    #[serde(default = "default_input_file")]
    pub input_file: String,
    /// Processing date (M/D/YYYY); today when absent
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_input_encoding")]
    pub input_encoding: InputEncoding,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub skip_malformed_rows: bool,
    #[serde(default = "default_journal_file")]
    pub journal_file: String,
}

fn default_window_start() -> String {
    "21:00".to_string()
}
fn default_window_end() -> String {
    "23:00".to_string()
}
fn default_min_fraction() -> f64 {
    DEFAULT_MIN_FRACTION
}
fn default_input_file() -> String {
    "daily_attendance.csv".to_string()
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_input_encoding() -> InputEncoding {
    InputEncoding::Utf16
}
fn default_delimiter() -> String {
    "\t".to_string()
}
fn default_journal_file() -> String {
    Config::config_dir()
        .join("rattendance.log")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_start: default_window_start(),
            window_end: default_window_end(),
            min_attendance_fraction: default_min_fraction(),
            input_file: default_input_file(),
            date: None,
            output_dir: default_output_dir(),
            input_encoding: default_input_encoding(),
            delimiter: default_delimiter(),
            skip_malformed_rows: false,
            journal_file: default_journal_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Write the configuration as YAML to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Write a default configuration file (parent directories included).
    ///
    /// In test mode nothing is written; the target path is still returned.
    pub fn init_all(path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let target = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !is_test {
            Self::default().save_to(&target)?;
        }

        Ok(target)
    }

    /// Build the attendance policy handed to the reconciliation core
    pub fn policy(&self) -> AppResult<AttendancePolicy> {
        let start = time::parse_time(&self.window_start)
            .ok_or_else(|| AppError::InvalidTime(self.window_start.clone()))?;
        let end = time::parse_time(&self.window_end)
            .ok_or_else(|| AppError::InvalidTime(self.window_end.clone()))?;

        AttendancePolicy::new(CanonicalWindow::new(start, end)?, self.min_attendance_fraction)
    }

    /// Processing date as written into the sheet header
    pub fn processing_date(&self) -> AppResult<String> {
        match &self.date {
            Some(d) => date::validate_sheet_date(d),
            None => Ok(date::format_sheet_date(date::today())),
        }
    }

    pub fn delimiter_byte(&self) -> AppResult<u8> {
        match self.delimiter.as_bytes() {
            [b] => Ok(*b),
            _ => Err(AppError::Config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }

    pub fn input_path(&self) -> PathBuf {
        expand_tilde(&self.input_file)
    }

    pub fn output_dir_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    pub fn journal_path(&self) -> PathBuf {
        expand_tilde(&self.journal_file)
    }
}
