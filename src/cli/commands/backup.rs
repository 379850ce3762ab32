use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::store::SqliteSheetStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let mut store = SqliteSheetStore::open(&cfg.database)?;
        BackupLogic::backup(&mut store, &cfg.database, file, *compress, *force)?;
    }

    Ok(())
}
