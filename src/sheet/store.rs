use crate::core::aggregator::{MonthlySheet, SheetRow};
use crate::errors::{AppError, AppResult};
use crate::models::verdict::Verdict;
use csv::{ReaderBuilder, Writer};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const NAME_COLUMN: &str = "Name";

/// Load a monthly sheet previously written by [`save_sheet`].
pub fn load_sheet(path: &Path) -> AppResult<MonthlySheet> {
    if !path.is_file() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    match headers.first() {
        Some(first) if first == NAME_COLUMN => {}
        _ => {
            return Err(AppError::Sheet(format!(
                "{}: first column must be '{NAME_COLUMN}'",
                path.display()
            )));
        }
    }

    let dates: Vec<String> = headers[1..].to_vec();
    let mut rows = Vec::new();

    for record in rdr.records() {
        let record = record?;
        let name = record.get(0).unwrap_or("").trim().to_string();

        let mut marks = HashMap::new();
        for (i, date) in dates.iter().enumerate() {
            let cell = record.get(i + 1).unwrap_or("").trim();
            if cell.is_empty() {
                continue;
            }
            let verdict = Verdict::from_mark(cell).ok_or_else(|| {
                AppError::Sheet(format!(
                    "{}: invalid mark '{cell}' for '{name}' on {date}",
                    path.display()
                ))
            })?;
            marks.insert(date.clone(), verdict);
        }

        rows.push(SheetRow { name, marks });
    }

    MonthlySheet::from_rows(dates, rows)
}

/// Write `sheet` as CSV to any writer.
pub fn write_sheet<W: Write>(sheet: &MonthlySheet, out: W) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    let mut header = vec![NAME_COLUMN.to_string()];
    header.extend(sheet.dates().iter().cloned());
    wtr.write_record(&header)?;

    for row in sheet.rows() {
        let mut record = vec![row.name.clone()];
        record.extend(
            sheet
                .dates()
                .iter()
                .map(|d| row.marks.get(d).map(|v| v.mark()).unwrap_or("").to_string()),
        );
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Save `sheet` to `path`.
///
/// The content goes to a sibling temporary file first and is renamed over
/// `path` only once fully written.
pub fn save_sheet(sheet: &MonthlySheet, path: &Path) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    let tmp = temp_path(path);

    let written = fs::File::create(&tmp)
        .map_err(AppError::from)
        .and_then(|file| write_sheet(sheet, file));

    if let Err(e) = written {
        fs::remove_file(&tmp).ok();
        return Err(e);
    }

    fs::rename(&tmp, path).inspect_err(|_| {
        fs::remove_file(&tmp).ok();
    })?;

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "sheet.csv".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}
