use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::legacy::LegacyLogic;
use crate::db::stats;
use crate::db::store::SqliteSheetStore;
use crate::errors::AppResult;
use ansi_term::Colour::{Cyan, Green, Red};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        info,
        check,
        vacuum,
        convert_legacy,
    } = cmd
    else {
        return Ok(());
    };

    let mut store = SqliteSheetStore::open(&cfg.database)?;

    // Conversion first so that --info reports the converted sheets.
    if *convert_legacy {
        println!("{}", Cyan.paint("▶ Converting legacy sheets…"));
        let report = LegacyLogic::convert(&mut store)?;

        if report.entries.is_empty() {
            println!("  no legacy sheets found");
        }
        for (sheet, converted, skipped) in &report.entries {
            println!("  {sheet:<14} {converted} converted, {skipped} skipped");
        }
        println!("{}\n", Green.paint("✔ Conversion completed."));
    }

    if *info {
        stats::print_db_info(&store, &cfg.database)?;
    }

    if *check {
        println!("{}", Cyan.paint("▶ Running integrity check…"));
        let integrity = store.integrity_check()?;

        if integrity == "ok" {
            println!("{}\n", Green.paint("✔ Integrity check passed."));
        } else {
            println!("{} {}\n", Red.paint("✘ Integrity check failed:"), integrity);
        }
    }

    if *vacuum {
        println!("{}", Cyan.paint("▶ Running VACUUM…"));
        store.vacuum()?;
        println!("{}\n", Green.paint("✔ Vacuum completed."));
    }

    Ok(())
}
