//! Table adapter: one sheet seen through its fixed schema.
//!
//! Data rows start at physical row 1; row 0 is the header, written lazily
//! by the first append. Every lookup is a linear scan.

use crate::db::store::SheetStore;
use crate::errors::AppResult;
use crate::sheet::Record;
use crate::sheet::cell::{self, Row};
use crate::sheet::schema::TableSchema;
use tracing::warn;

/// Records read from a sheet plus the number of rows that could not be
/// reconstructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

pub struct Table<'a, S: SheetStore + ?Sized> {
    store: &'a mut S,
    schema: &'static TableSchema,
}

impl<'a, S: SheetStore + ?Sized> Table<'a, S> {
    pub fn new(store: &'a mut S, schema: &'static TableSchema) -> Self {
        Self { store, schema }
    }

    /// Append one row, writing the header first when the sheet is empty.
    pub fn append(&mut self, row: Row) -> AppResult<()> {
        if self.store.last_row(self.schema.name)? == 0 {
            self.store
                .append_row(self.schema.name, self.schema.header_row())?;
        }
        self.store.append_row(self.schema.name, row)
    }

    /// Physical index of the first row (scanning forward) whose key matches.
    pub fn first_position_of(&self, key: &str) -> AppResult<Option<usize>> {
        let rows = self.store.read_rows(self.schema.name)?;
        Ok(rows
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, row)| cell::key_matches(row, key))
            .map(|(i, _)| i))
    }

    /// Physical index of the last row (scanning backward) whose key matches.
    pub fn last_position_of(&self, key: &str) -> AppResult<Option<usize>> {
        let rows = self.store.read_rows(self.schema.name)?;
        Ok(rows
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .find(|(_, row)| cell::key_matches(row, key))
            .map(|(i, _)| i))
    }

    pub fn contains_key(&self, key: &str) -> AppResult<bool> {
        Ok(self.first_position_of(key)?.is_some())
    }

    pub fn find_by_key(&self, key: &str) -> AppResult<Option<Row>> {
        let rows = self.store.read_rows(self.schema.name)?;
        Ok(rows
            .into_iter()
            .skip(1)
            .rev()
            .find(|row| cell::key_matches(row, key)))
    }

    /// Delete the last physical row carrying `key`.
    /// A missing sheet or an absent key is a no-op; returns whether a row went away.
    pub fn delete_by_key(&mut self, key: &str) -> AppResult<bool> {
        if !self.store.has_sheet(self.schema.name)? {
            return Ok(false);
        }
        match self.last_position_of(key)? {
            Some(index) => {
                self.store.delete_row(self.schema.name, index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Overwrite the first physical row carrying `key`; no-op when absent.
    pub fn overwrite_by_key(&mut self, key: &str, row: Row) -> AppResult<bool> {
        match self.first_position_of(key)? {
            Some(index) => {
                self.store.set_row(self.schema.name, index, row)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Data rows in physical order (header excluded).
    pub fn scan_all(&self) -> AppResult<Vec<Row>> {
        let mut rows = self.store.read_rows(self.schema.name)?;
        if !rows.is_empty() {
            rows.remove(0);
        }
        Ok(rows)
    }

    /// Reconstruct every data row as `R`, skipping rows that fail.
    pub fn read_records<R: Record>(&self) -> AppResult<Scan<R>> {
        let rows = self.scan_all()?;
        let mut records = Vec::with_capacity(rows.len());
        let mut skipped = 0;

        for (i, row) in rows.iter().enumerate() {
            match R::from_row(row) {
                Ok(rec) => records.push(rec),
                Err(e) => {
                    warn!(sheet = self.schema.name, row = i + 1, error = %e, "skipping unreadable row");
                    skipped += 1;
                }
            }
        }

        Ok(Scan { records, skipped })
    }

    /// Non-blank names of a name sheet, or the schema fallback list when
    /// the sheet holds none.
    pub fn names(&self) -> AppResult<Vec<String>> {
        let names: Vec<String> = self
            .scan_all()?
            .iter()
            .filter_map(|row| row.first())
            .filter(|c| !cell::is_blank(c))
            .map(cell::text)
            .collect();

        if names.is_empty() {
            return Ok(self.schema.defaults.iter().map(|s| s.to_string()).collect());
        }
        Ok(names)
    }
}
