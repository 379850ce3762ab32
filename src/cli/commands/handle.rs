use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Gateway;
use crate::db::store::SqliteSheetStore;
use crate::errors::AppResult;
use crate::ui::messages::set_quiet;
use std::io::Read;

/// Run one request through the gateway and print the response envelope.
///
/// Gateway failures are reported inside the envelope; the command itself
/// only fails when the database cannot be opened or stdin cannot be read.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Handle { request } = cmd {
        set_quiet(true);

        let body = match request.as_deref() {
            Some(body) if body != "-" => body.to_string(),
            _ => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let store = SqliteSheetStore::open(&cfg.database)?;
        let mut gateway = Gateway::new(store, cfg.income_update);
        let response = gateway.handle_body(&body);

        println!("{}", response.to_json());
    }
    Ok(())
}
