// src/export/xlsx.rs

use crate::core::aggregator::MonthlySheet;
use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, sheet_to_table};
use crate::export::notify_export_success;
use crate::models::verdict::Verdict;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const BAND_BG: [u32; 2] = [0xEAF3FB, 0xFFFFFF];
const PRESENT_BG: u32 = 0xC6EFCE;
const ABSENT_BG: u32 = 0xFFC7CE;

/// Export XLSX: styled header, banded rows, colored Y/N cells.
pub(crate) fn export_xlsx(sheet: &MonthlySheet, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Attendance").map_err(to_export_error)?;

    if sheet.rows().is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path).map_err(to_export_error)?;
        notify_export_success("XLSX (empty sheet)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers(sheet);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, h) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, h.as_str(), &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 1).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    let last_col = headers.len() - 1;

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, cells) in sheet_to_table(sheet).iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = BAND_BG[row_index % 2];

        for (col, value) in cells.iter().enumerate() {
            let kind = if col == 0 {
                CellKind::Name
            } else if col == last_col {
                CellKind::Count
            } else {
                CellKind::Mark(Verdict::from_mark(value))
            };

            write_cell(worksheet, row, col as u16, value, band, kind)?;
            col_widths[col] = col_widths[col].max(value.width());
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

enum CellKind {
    Name,
    Mark(Option<Verdict>),
    Count,
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    band: u32,
    kind: CellKind,
) -> AppResult<()> {
    let base = Format::new()
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match kind {
        CellKind::Name => {
            let fmt = base.set_background_color(Color::RGB(band));
            worksheet.write_with_format(row, col, value, &fmt)
        }
        CellKind::Mark(mark) => {
            let bg = match mark {
                Some(Verdict::Present) => PRESENT_BG,
                Some(Verdict::Absent) => ABSENT_BG,
                None => band,
            };
            let fmt = base
                .set_align(FormatAlign::Center)
                .set_background_color(Color::RGB(bg));
            worksheet.write_with_format(row, col, value, &fmt)
        }
        CellKind::Count => {
            let fmt = base
                .set_align(FormatAlign::Right)
                .set_background_color(Color::RGB(band));
            let n = value.parse::<f64>().unwrap_or(0.0);
            worksheet.write_with_format(row, col, n, &fmt)
        }
    }
    .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
