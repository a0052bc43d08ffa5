use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_trade;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        // Unknown ids fail before any prompt.
        let target = load_trade(&pool.conn, *id)?;
        let prompt = format!(
            "Delete trade #{} ({} {})? This action is irreversible.",
            target.id,
            target.date_str(),
            target.symbol
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let trade = DeleteLogic::apply(&mut pool, *id)?;

        success(format!(
            "Trade #{} ({} {}) has been deleted.",
            trade.id,
            trade.date_str(),
            trade.symbol
        ));
    }

    Ok(())
}
