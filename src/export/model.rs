// src/export/model.rs

use crate::core::aggregator::MonthlySheet;
use crate::models::verdict::Verdict;
use serde::Serialize;

/// One marked date of a row; unmarked dates are left out.
#[derive(Serialize, Clone, Debug)]
pub struct DateMarkExport {
    pub date: String,
    pub mark: Verdict,
}

/// Struttura “piatta” per export di una riga del foglio mensile.
#[derive(Serialize, Clone, Debug)]
pub struct SheetRowExport {
    pub name: String,
    /// in sheet column order
    pub marks: Vec<DateMarkExport>,
    pub present: usize,
}

pub(crate) fn sheet_to_export(sheet: &MonthlySheet) -> Vec<SheetRowExport> {
    sheet
        .rows()
        .iter()
        .map(|row| SheetRowExport {
            name: row.name.clone(),
            marks: sheet
                .dates()
                .iter()
                .filter_map(|d| {
                    row.marks.get(d).map(|v| DateMarkExport {
                        date: d.clone(),
                        mark: *v,
                    })
                })
                .collect(),
            present: sheet.present_count(&row.name),
        })
        .collect()
}

/// Header per XLSX: Name, one column per date, Present.
pub(crate) fn get_headers(sheet: &MonthlySheet) -> Vec<String> {
    let mut headers = vec![crate::sheet::NAME_COLUMN.to_string()];
    headers.extend(sheet.dates().iter().cloned());
    headers.push("Present".to_string());
    headers
}

/// Cells of every row, in header order (empty string for no mark).
pub(crate) fn sheet_to_table(sheet: &MonthlySheet) -> Vec<Vec<String>> {
    sheet
        .rows()
        .iter()
        .map(|row| {
            let mut cells = vec![row.name.clone()];
            cells.extend(
                sheet
                    .dates()
                    .iter()
                    .map(|d| row.marks.get(d).map(|v| v.mark()).unwrap_or("").to_string()),
            );
            cells.push(sheet.present_count(&row.name).to_string());
            cells
        })
        .collect()
}
