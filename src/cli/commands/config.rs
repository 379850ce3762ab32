use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

fn platform_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str, cfg_file: &std::path::Path) -> bool {
    matches!(Command::new(editor).arg(cfg_file).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand: print the effective settings or open
/// the file in an editor.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        let origin = if path.exists() {
            path.display().to_string()
        } else {
            "built-in defaults".to_string()
        };
        println!("📄 Effective configuration ({origin}):\n");
        print!("{}", serde_yaml::to_string(cfg)?);
    }

    if *edit_config {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `init` first",
                path.display()
            )));
        }

        let fallback = platform_editor();
        let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

        if open_in(&chosen, &path) {
            success(format!("Configuration file edited using '{chosen}'"));
        } else if chosen != fallback && open_in(&fallback, &path) {
            warning(format!("Editor '{chosen}' not available, used '{fallback}'"));
        } else {
            return Err(AppError::Config(format!(
                "could not open {} with '{chosen}'",
                path.display()
            )));
        }
    }

    Ok(())
}
