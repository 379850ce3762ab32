use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Gateway;
use crate::db::store::SqliteSheetStore;
use crate::errors::{AppError, AppResult};
use crate::server;
use std::sync::{Arc, Mutex};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        let addr = bind.clone().unwrap_or_else(|| cfg.bind.clone());

        let store = SqliteSheetStore::open(&cfg.database)?;
        let gateway = Arc::new(Mutex::new(Gateway::new(store, cfg.income_update)));

        println!("🌐 Serving {} on http://{}", cfg.database, addr);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::Server(e.to_string()))?;

        runtime.block_on(server::serve(&addr, gateway))?;
    }
    Ok(())
}
