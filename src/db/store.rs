//! Sheet-level storage primitives and their SQLite implementation.
//!
//! A `SheetStore` behaves like a spreadsheet host: named sheets made of
//! physical rows, addressed by 0-based row index (row 0 is the header).
//! Everything above this layer (table adapters, gateway) only talks to
//! the trait.

use crate::db::initialize::init_db;
use crate::db::log::{self, LogEntry};
use crate::errors::{AppError, AppResult};
use crate::sheet::cell::Row;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub trait SheetStore {
    /// True once the sheet has been created by a write.
    fn has_sheet(&self, sheet: &str) -> AppResult<bool>;

    /// Number of physical rows (header included); 0 for a missing sheet.
    fn last_row(&self, sheet: &str) -> AppResult<usize>;

    /// All physical rows in order; empty for a missing sheet.
    fn read_rows(&self, sheet: &str) -> AppResult<Vec<Row>>;

    /// Append one row, creating the sheet when needed.
    fn append_row(&mut self, sheet: &str, row: Row) -> AppResult<()>;

    /// Overwrite the row at `index`.
    fn set_row(&mut self, sheet: &str, index: usize, row: Row) -> AppResult<()>;

    /// Remove the row at `index`; later rows move up by one.
    fn delete_row(&mut self, sheet: &str, index: usize) -> AppResult<()>;

    /// Sheet names in creation order.
    fn sheet_names(&self) -> AppResult<Vec<String>>;

    /// Record one audit line.
    fn log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;

    /// Audit lines, oldest first.
    fn log_entries(&self) -> AppResult<Vec<LogEntry>>;
}

/// Workbook persisted in a SQLite file.
pub struct SqliteSheetStore {
    conn: Connection,
}

impl SqliteSheetStore {
    /// Open (or create) the database at `path` and run pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Result of `PRAGMA integrity_check` ("ok" when healthy).
    pub fn integrity_check(&self) -> AppResult<String> {
        Ok(self
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?)
    }

    pub fn vacuum(&mut self) -> AppResult<()> {
        self.conn.execute_batch("VACUUM;")?;
        Ok(())
    }

    fn ensure_sheet(&self, sheet: &str) -> AppResult<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO sheets (name, created_at) VALUES (?1, ?2)",
            params![sheet, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Primary key of the physical row at `index`.
    fn row_id_at(&self, sheet: &str, index: usize) -> AppResult<i64> {
        self.conn
            .query_row(
                "SELECT id FROM sheet_rows WHERE sheet = ?1 ORDER BY id LIMIT 1 OFFSET ?2",
                params![sheet, index as i64],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| AppError::RowOutOfRange {
                sheet: sheet.to_string(),
                index,
            })
    }
}

impl SheetStore for SqliteSheetStore {
    fn has_sheet(&self, sheet: &str) -> AppResult<bool> {
        let found: Option<i64> = self
            .conn
            .query_row("SELECT 1 FROM sheets WHERE name = ?1", [sheet], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(found.is_some())
    }

    fn last_row(&self, sheet: &str) -> AppResult<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sheet_rows WHERE sheet = ?1",
            [sheet],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn read_rows(&self, sheet: &str) -> AppResult<Vec<Row>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT cells FROM sheet_rows WHERE sheet = ?1 ORDER BY id ASC")?;

        let rows = stmt.query_map([sheet], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            let cells: Row = serde_json::from_str(&r?)?;
            out.push(cells);
        }
        Ok(out)
    }

    fn append_row(&mut self, sheet: &str, row: Row) -> AppResult<()> {
        self.ensure_sheet(sheet)?;
        let cells = serde_json::to_string(&row)?;
        self.conn.execute(
            "INSERT INTO sheet_rows (sheet, cells) VALUES (?1, ?2)",
            params![sheet, cells],
        )?;
        Ok(())
    }

    fn set_row(&mut self, sheet: &str, index: usize, row: Row) -> AppResult<()> {
        let id = self.row_id_at(sheet, index)?;
        let cells = serde_json::to_string(&row)?;
        self.conn.execute(
            "UPDATE sheet_rows SET cells = ?1 WHERE id = ?2",
            params![cells, id],
        )?;
        Ok(())
    }

    fn delete_row(&mut self, sheet: &str, index: usize) -> AppResult<()> {
        let id = self.row_id_at(sheet, index)?;
        self.conn
            .execute("DELETE FROM sheet_rows WHERE id = ?1", [id])?;
        Ok(())
    }

    fn sheet_names(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sheets ORDER BY created_at ASC, rowid ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::ttlog(&self.conn, operation, target, message)
    }

    fn log_entries(&self) -> AppResult<Vec<LogEntry>> {
        log::load_log(&self.conn)
    }
}
