//! Sheet layouts and the table adapter built on top of a `SheetStore`.

pub mod cell;
pub mod schema;
pub mod table;

pub use cell::{Row, RowError};
pub use schema::TableSchema;
pub use table::{Scan, Table};

/// A typed record stored as one fixed-width row of a sheet.
pub trait Record: Sized {
    const SCHEMA: &'static TableSchema;

    /// Value of the key column (column 0).
    fn key(&self) -> &str;

    fn to_row(&self) -> Row;

    fn from_row(row: &[serde_json::Value]) -> Result<Self, RowError>;
}
