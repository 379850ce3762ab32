use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::store::SqliteSheetStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { sheet, file } = cmd {
        let mut store = SqliteSheetStore::open(&cfg.database)?;
        let n = ImportLogic::import_csv(&mut store, sheet, Path::new(file))?;
        success(format!("{n} rows imported into {sheet}"));
    }
    Ok(())
}
