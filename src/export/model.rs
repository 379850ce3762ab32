// src/export/model.rs

use crate::sheet::cell::{self, Row};
use serde_json::{Map, Value};

/// Snapshot of one sheet: header row plus data rows.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetExport {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl SheetExport {
    /// Split raw physical rows into header (row 0) and data.
    pub fn from_rows(name: &str, mut rows: Vec<Row>) -> Self {
        let headers = if rows.is_empty() {
            Vec::new()
        } else {
            rows.remove(0).iter().map(cell::text).collect()
        };
        Self {
            name: name.to_string(),
            headers,
            rows,
        }
    }

    /// Header of column `i`; columns beyond the header get `col_<n>`.
    pub(crate) fn header(&self, i: usize) -> String {
        self.headers
            .get(i)
            .filter(|h| !h.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("col_{}", i + 1))
    }

    /// Data rows as objects keyed by header.
    pub(crate) fn records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, c)| (self.header(i), c.clone()))
                    .collect()
            })
            .collect()
    }

    /// Header plus data rows rendered as text, every line padded to the
    /// widest row.
    pub(crate) fn text_table(&self) -> Vec<Vec<String>> {
        let width = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        let mut out = Vec::with_capacity(self.rows.len() + 1);
        out.push((0..width).map(|i| self.header(i)).collect());
        for row in &self.rows {
            out.push(
                (0..width)
                    .map(|i| row.get(i).map(cell::text).unwrap_or_default())
                    .collect(),
            );
        }
        out
    }
}
