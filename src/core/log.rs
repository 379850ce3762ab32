use crate::db::log::LogEntry;
use crate::db::store::SheetStore;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// ANSI colour of an operation in the printed log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" | "convert_legacy" => Colour::Purple,
        "backup" | "import" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Render one entry: `id: date | op (target) => message`, the op/target
/// column cut to 60 visible characters.
fn render_entry(re: &Regex, e: &LogEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
    let color = color_for_operation(&e.operation);

    let op_target = if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    };

    let visible = if op_target.chars().count() > 60 {
        let mut s: String = op_target.chars().take(57).collect();
        s.push_str("...");
        s
    } else {
        op_target
    };

    // Only the operation word is coloured.
    let colored = match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    };

    let padding = " ".repeat(op_w.saturating_sub(strip_ansi(re, &colored).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        e.id,
        e.date,
        colored,
        padding,
        e.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log<S: SheetStore + ?Sized>(store: &S) -> AppResult<()> {
        let entries = store.log_entries()?;

        println!("📜 Internal log:\n");

        if entries.is_empty() {
            println!("(empty)");
            return Ok(());
        }

        let re = Regex::new(r"\x1B\[[0-9;]*[mK]")
            .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.chars().count() + 3)
            .max()
            .unwrap_or(10)
            .min(60);

        for e in &entries {
            println!("{}", render_entry(&re, e, id_w, date_w, op_w));
        }

        Ok(())
    }
}
