use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for VeroTrade
/// Personal trading journal backed by SQLite
#[derive(Parser)]
#[command(
    name = "verotrade",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal trading journal: log trades, trade durations and P&L statistics using SQLite",
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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

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

    /// Manage the database (migrations, integrity checks, time cleanup)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(
            long = "normalize",
            help = "Rewrite stored entry/exit times as HH:MM and blank invalid ones"
        )]
        normalize: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Compute a trade duration from two HH:MM times (rolls over midnight)
    Duration {
        /// Entry time (HH:MM)
        #[arg(allow_hyphen_values = true)]
        entry: Option<String>,

        /// Exit time (HH:MM)
        #[arg(allow_hyphen_values = true)]
        exit: Option<String>,
    },

    /// Add a trade, or edit one with --edit ID
    Add {
        /// Trade date (YYYY-MM-DD); optional with --edit
        date: Option<String>,

        /// Ticker symbol; optional with --edit
        symbol: Option<String>,

        #[arg(long = "side", help = "long|short (aliases: l, buy, s, sell)")]
        side: Option<String>,

        #[arg(long = "qty", help = "Quantity (> 0)")]
        qty: Option<String>,

        #[arg(long = "entry", help = "Entry price (> 0)")]
        entry: Option<String>,

        #[arg(long = "exit", help = "Exit price; empty string reopens the trade")]
        exit: Option<String>,

        #[arg(long = "in", help = "Entry time (HH:MM); empty string clears it")]
        time_in: Option<String>,

        #[arg(long = "out", help = "Exit time (HH:MM); empty string clears it")]
        time_out: Option<String>,

        #[arg(
            long = "emotion",
            help = "Comma separated emotion tags (e.g. fomo,greedy); empty string clears them"
        )]
        emotion: Option<String>,

        #[arg(long = "notes", help = "Free text notes")]
        notes: Option<String>,

        #[arg(long = "edit", value_name = "ID", help = "Edit the trade with this id")]
        edit: Option<i64>,
    },

    /// Delete a trade by id
    Del {
        /// Trade id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List trades with computed duration and P&L
    List {
        #[arg(
            long,
            short,
            help = "Filter by YYYY, YYYY-MM, YYYY-MM-DD, a start:end range, or 'all'"
        )]
        period: Option<String>,

        #[arg(long, help = "Only this symbol")]
        symbol: Option<String>,

        #[arg(long = "open", help = "Only trades without an exit price")]
        open: bool,
    },

    /// P&L statistics over closed trades
    Stats {
        #[arg(
            long,
            short,
            help = "Filter by YYYY, YYYY-MM, YYYY-MM-DD, a start:end range, or 'all'"
        )]
        period: Option<String>,

        #[arg(long, help = "Only this symbol")]
        symbol: Option<String>,

        #[arg(long = "by-emotion", help = "Add a per-emotion breakdown")]
        by_emotion: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Write a .zip archive instead of a plain copy")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup without asking")]
        force: bool,
    },

    /// Export trades with computed duration and P&L
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by YYYY, YYYY-MM, YYYY-MM-DD, a start:end range, or 'all'"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
