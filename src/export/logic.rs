// src/export/logic.rs

use crate::db::store::SheetStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SheetExport;
use crate::export::xlsx::export_xlsx;
use crate::sheet::schema;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export workbook sheets.
    ///
    /// - `format`: csv | json | xlsx
    /// - `sheet`: one sheet, or `None` for the whole workbook (csv falls
    ///   back to `Income_Raw`, a CSV file holds a single table)
    pub fn export<S: SheetStore + ?Sized>(
        store: &mut S,
        format: ExportFormat,
        file: &str,
        sheet: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let names: Vec<String> = match (sheet, format) {
            (Some(name), _) => {
                if !store.has_sheet(name)? {
                    return Err(AppError::UnknownSheet(name.to_string()));
                }
                vec![name.to_string()]
            }
            (None, ExportFormat::Csv) => vec![schema::INCOME.name.to_string()],
            (None, _) => store.sheet_names()?,
        };

        let sheets = Self::snapshot(store, &names)?;

        if sheets.iter().all(|s| s.rows.is_empty()) {
            warning("No rows found in the selected sheets.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&sheets[0], path)?,
            ExportFormat::Json => export_json(&sheets, path)?,
            ExportFormat::Xlsx => export_xlsx(&sheets, path)?,
        }

        let total = sheets.iter().map(|s| s.rows.len()).sum();
        store.log(
            "export",
            &path.to_string_lossy(),
            &format!("{} rows exported as {}", total, format.as_str()),
        )?;

        Ok(total)
    }

    pub fn snapshot<S: SheetStore + ?Sized>(store: &S, names: &[String]) -> AppResult<Vec<SheetExport>> {
        names
            .iter()
            .map(|n| Ok(SheetExport::from_rows(n, store.read_rows(n)?)))
            .collect()
    }
}
