// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::sheet::load_sheet;
use crate::ui::messages::warning;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export a persisted monthly sheet.
    ///
    /// - `sheet`: CSV written by `process`
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path
    pub fn export(sheet: &Path, format: ExportFormat, file: &Path, force: bool) -> AppResult<()> {
        if !file.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {}",
                file.display()
            )));
        }

        if file == sheet {
            return Err(AppError::Export(
                "output file must differ from the source sheet".to_string(),
            ));
        }

        let data = load_sheet(sheet)?;

        if data.rows().is_empty() {
            warning(format!("No participants in {}", sheet.display()));
        }

        ensure_writable(file, force)?;

        match format {
            ExportFormat::Csv => export_csv(&data, file)?,
            ExportFormat::Json => export_json(&data, file)?,
            ExportFormat::Xlsx => export_xlsx(&data, file)?,
        }

        Ok(())
    }
}
