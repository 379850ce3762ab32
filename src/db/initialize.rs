use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// Connection settings, then every pending migration.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.pragma_update(None, "foreign_keys", true)?;
    // `serve` and one-shot `handle` runs may share the same file.
    conn.busy_timeout(Duration::from_secs(5))?;
    run_pending_migrations(conn)?;
    Ok(())
}
