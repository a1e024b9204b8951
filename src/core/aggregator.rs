//! Monthly attendance sheet: one row per cleaned participant name,
//! one column per processed date.

use crate::errors::{AppError, AppResult};
use crate::models::verdict::{AttendanceVerdict, Verdict};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    pub name: String,
    pub marks: HashMap<String, Verdict>,
}

impl SheetRow {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            marks: HashMap::new(),
        }
    }
}

/// Outcome of a single `append_date_column` call. Each cleaned name is
/// counted once, as added or updated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppendSummary {
    pub added_rows: usize,
    pub updated_rows: usize,
    pub skipped_unnamed: usize,
    /// the date already had a column, which has been rewritten
    pub replaced_column: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlySheet {
    dates: Vec<String>,
    rows: Vec<SheetRow>,
    index: HashMap<String, usize>,
}

impl MonthlySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a sheet from persisted columns and rows.
    pub fn from_rows(dates: Vec<String>, rows: Vec<SheetRow>) -> AppResult<Self> {
        for (i, d) in dates.iter().enumerate() {
            if dates[..i].contains(d) {
                return Err(AppError::Sheet(format!("duplicate date column '{d}'")));
            }
        }

        let mut index = HashMap::new();
        for (i, row) in rows.iter().enumerate() {
            if index.insert(row.name.clone(), i).is_some() {
                return Err(AppError::Sheet(format!("duplicate participant '{}'", row.name)));
            }
            if let Some(date) = row.marks.keys().find(|d| !dates.contains(d)) {
                return Err(AppError::Sheet(format!(
                    "participant '{}' has a mark for unknown date '{date}'",
                    row.name
                )));
            }
        }

        Ok(Self { dates, rows, index })
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn rows(&self) -> &[SheetRow] {
        &self.rows
    }

    pub fn get(&self, name: &str, date: &str) -> Option<Verdict> {
        self.index
            .get(name)
            .and_then(|&i| self.rows[i].marks.get(date).copied())
    }

    /// Number of dates `name` was marked present.
    pub fn present_count(&self, name: &str) -> usize {
        self.index.get(name).map_or(0, |&i| {
            self.rows[i]
                .marks
                .values()
                .filter(|v| v.is_present())
                .count()
        })
    }

    /// Merge a date's verdicts into the sheet.
    ///
    /// Rows are keyed by cleaned identity, so names that clean to the same
    /// string land on the same row (last verdict wins). Re-appending a date
    /// rewrites its column in place.
    pub fn append_date_column(&mut self, date: &str, verdicts: &[AttendanceVerdict]) -> AppendSummary {
        let mut summary = AppendSummary::default();

        if self.dates.iter().any(|d| d == date) {
            summary.replaced_column = true;
            for row in &mut self.rows {
                row.marks.remove(date);
            }
        } else {
            self.dates.push(date.to_string());
        }

        let mut seen = HashSet::new();

        for v in verdicts {
            let Some(name) = v.participant.as_deref() else {
                summary.skipped_unnamed += 1;
                continue;
            };
            let first_in_call = seen.insert(name);

            let slot = match self.index.get(name) {
                Some(&i) => {
                    if first_in_call {
                        summary.updated_rows += 1;
                    }
                    i
                }
                None => {
                    self.rows.push(SheetRow::new(name));
                    self.index.insert(name.to_string(), self.rows.len() - 1);
                    summary.added_rows += 1;
                    self.rows.len() - 1
                }
            };

            self.rows[slot].marks.insert(date.to_string(), v.verdict);
        }

        summary
    }
}
