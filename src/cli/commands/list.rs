use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::{SheetStore, SqliteSheetStore};
use crate::errors::{AppError, AppResult};
use crate::export::SheetExport;
use crate::utils::table::Table;

/// Print every physical row of a sheet, header first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { sheet } = cmd {
        let store = SqliteSheetStore::open(&cfg.database)?;

        if !store.has_sheet(sheet)? {
            return Err(AppError::UnknownSheet(sheet.clone()));
        }

        let snapshot = SheetExport::from_rows(sheet, store.read_rows(sheet)?);
        let mut lines = snapshot.text_table().into_iter();

        let mut table = Table::with_headers(lines.next().unwrap_or_default());
        for line in lines {
            table.add_row(line);
        }

        println!("📄 {} ({} rows)\n", sheet, snapshot.rows.len());
        print!("{}", table.render());
    }
    Ok(())
}
