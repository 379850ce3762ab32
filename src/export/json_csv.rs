// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{SheetExport, notify_export_success};
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed: `{ "<sheet>": [ {header: cell, ...}, ... ] }`.
pub(crate) fn export_json(sheets: &[SheetExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let doc: Map<String, Value> = sheets
        .iter()
        .map(|s| {
            let records = s.records().into_iter().map(Value::Object).collect();
            (s.name.clone(), Value::Array(records))
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&doc)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export a single sheet to CSV, header line included.
pub(crate) fn export_csv(sheet: &SheetExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting {} to CSV: {}", sheet.name, path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for line in sheet.text_table() {
        wtr.write_record(&line)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
