use crate::db::store::SheetStore;
use crate::errors::AppResult;
use crate::sheet::schema;
use ansi_term::Colour::{Cyan, Fixed, Green, Yellow};
use std::fs;

/// Print file size, per-sheet data row counts and log size.
pub fn print_db_info<S: SheetStore + ?Sized>(store: &S, db_path: &str) -> AppResult<()> {
    let grey = Fixed(8);
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    println!("{} {}", Cyan.paint("• File:"), Yellow.paint(db_path));
    println!(
        "{} {:.2} MB",
        Cyan.paint("• Size:"),
        (file_size as f64) / (1024.0 * 1024.0)
    );

    println!("{}", Cyan.paint("• Sheets:"));
    let existing = store.sheet_names()?;

    for s in schema::ALL {
        if !existing.iter().any(|n| n == s.name) {
            println!("    {:<14} {}", s.name, grey.paint("not created"));
            continue;
        }
        // header row excluded
        let rows = store.last_row(s.name)?.saturating_sub(1);
        let count = rows.to_string();
        let painted = if rows == 0 {
            grey.paint(count)
        } else {
            Green.paint(count)
        };
        println!("    {:<14} {} rows", s.name, painted);
    }

    for other in existing.iter().filter(|n| schema::by_name(n).is_none()) {
        println!(
            "    {:<14} {} physical rows {}",
            other,
            store.last_row(other)?,
            grey.paint("(not a gateway sheet)")
        );
    }

    println!(
        "{} {}",
        Cyan.paint("• Log entries:"),
        store.log_entries()?.len()
    );
    println!();
    Ok(())
}
