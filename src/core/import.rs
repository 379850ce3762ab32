use crate::db::store::SheetStore;
use crate::errors::AppResult;
use crate::sheet::cell::{self, Row};
use crate::sheet::schema;
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Append the records of a CSV file to `sheet` as raw rows.
    ///
    /// Into an empty sheet every record lands, the first becoming the
    /// header. When the sheet already has rows, the first CSV record is
    /// taken as a header and dropped. Rows bound for a gateway sheet must
    /// be at least as wide as its schema; nothing is written otherwise.
    pub fn import_csv<S: SheetStore + ?Sized>(
        store: &mut S,
        sheet: &str,
        path: &Path,
    ) -> AppResult<usize> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let skip_header = store.last_row(sheet)? > 0;
        let width = schema::by_name(sheet).map_or(0, |s| s.width());

        let mut rows: Vec<Row> = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            if i == 0 && skip_header {
                continue;
            }
            let row: Row = record.iter().map(cell::from_raw).collect();
            cell::require_width(&row, width)?;
            rows.push(row);
        }

        let imported = rows.len();
        for row in rows {
            store.append_row(sheet, row)?;
        }

        store.log(
            "import",
            sheet,
            &format!("{imported} rows imported from {}", path.display()),
        )?;
        Ok(imported)
    }
}
