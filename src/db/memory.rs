//! In-memory workbook, used by tests and by callers that want a scratch
//! gateway without touching disk.

use crate::db::log::LogEntry;
use crate::db::store::SheetStore;
use crate::errors::{AppError, AppResult};
use crate::sheet::cell::Row;
use chrono::Local;

#[derive(Debug, Default)]
pub struct MemorySheetStore {
    sheets: Vec<(String, Vec<Row>)>,
    log: Vec<LogEntry>,
}

impl MemorySheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sheet(&self, name: &str) -> Option<&Vec<Row>> {
        self.sheets.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    fn sheet_mut(&mut self, name: &str) -> AppResult<&mut Vec<Row>> {
        self.sheets
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, r)| r)
            .ok_or_else(|| AppError::UnknownSheet(name.to_string()))
    }

    fn check_index(rows: &[Row], sheet: &str, index: usize) -> AppResult<()> {
        if index >= rows.len() {
            return Err(AppError::RowOutOfRange {
                sheet: sheet.to_string(),
                index,
            });
        }
        Ok(())
    }
}

impl SheetStore for MemorySheetStore {
    fn has_sheet(&self, sheet: &str) -> AppResult<bool> {
        Ok(self.sheet(sheet).is_some())
    }

    fn last_row(&self, sheet: &str) -> AppResult<usize> {
        Ok(self.sheet(sheet).map_or(0, Vec::len))
    }

    fn read_rows(&self, sheet: &str) -> AppResult<Vec<Row>> {
        Ok(self.sheet(sheet).cloned().unwrap_or_default())
    }

    fn append_row(&mut self, sheet: &str, row: Row) -> AppResult<()> {
        if self.sheet(sheet).is_none() {
            self.sheets.push((sheet.to_string(), Vec::new()));
        }
        self.sheet_mut(sheet)?.push(row);
        Ok(())
    }

    fn set_row(&mut self, sheet: &str, index: usize, row: Row) -> AppResult<()> {
        let rows = self.sheet_mut(sheet)?;
        Self::check_index(rows, sheet, index)?;
        rows[index] = row;
        Ok(())
    }

    fn delete_row(&mut self, sheet: &str, index: usize) -> AppResult<()> {
        let rows = self.sheet_mut(sheet)?;
        Self::check_index(rows, sheet, index)?;
        rows.remove(index);
        Ok(())
    }

    fn sheet_names(&self) -> AppResult<Vec<String>> {
        Ok(self.sheets.iter().map(|(n, _)| n.clone()).collect())
    }

    fn log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        let id = self.log.len() as i64 + 1;
        self.log.push(LogEntry {
            id,
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }

    fn log_entries(&self) -> AppResult<Vec<LogEntry>> {
        Ok(self.log.clone())
    }
}
