use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for income-ledger
#[derive(Parser)]
#[command(
    name = "income-ledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Income, payments, penalties and staff lists in a SQLite workbook, served over one JSON POST endpoint",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (statistics, integrity, legacy conversion)
    Db {
        #[arg(long = "info", help = "Show per-sheet statistics")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(
            long = "convert-legacy",
            help = "Copy first-generation sheets (Доходы, Штрафы, ...) into the current layout"
        )]
        convert_legacy: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Run the HTTP gateway
    Serve {
        #[arg(long, value_name = "ADDR", help = "Bind address (default from config)")]
        bind: Option<String>,
    },

    /// Run one request body through the gateway and print the response
    Handle {
        /// JSON request `{action, data}`; read from stdin when absent or `-`
        request: Option<String>,
    },

    /// Print the raw rows of a sheet
    List {
        /// Sheet name, e.g. Income_Raw, Advances_Raw, Operators
        sheet: String,
    },

    /// Export workbook data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "SHEET", help = "Export a single sheet")]
        sheet: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Append the rows of a CSV file to a sheet
    Import {
        #[arg(long, value_name = "SHEET")]
        sheet: String,

        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
