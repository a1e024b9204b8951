// src/export/json_csv.rs

use crate::core::aggregator::MonthlySheet;
use crate::errors::AppResult;
use crate::export::model::sheet_to_export;
use crate::export::notify_export_success;
use crate::sheet::write_sheet;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(sheet: &MonthlySheet, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&sheet_to_export(sheet))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, same layout as the persisted monthly sheet.
pub(crate) fn export_csv(sheet: &MonthlySheet, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    write_sheet(sheet, File::create(path)?)?;

    notify_export_success("CSV", path);
    Ok(())
}
