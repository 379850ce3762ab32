use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::SqliteSheetStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        sheet,
        force,
    } = cmd
    {
        let mut store = SqliteSheetStore::open(&cfg.database)?;
        ExportLogic::export(&mut store, *format, file, sheet.as_deref(), *force)?;
    }
    Ok(())
}
