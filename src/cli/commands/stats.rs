use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{TradeFilter, load_trades};
use crate::errors::AppResult;
use crate::utils::date::resolve_period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        period,
        symbol,
        by_emotion,
    } = cmd
    {
        let filter = TradeFilter {
            bounds: resolve_period(period.as_deref())?,
            symbol: symbol.clone(),
            open_only: false,
        };

        let mut pool = DbPool::open(&cfg.database)?;
        let trades = load_trades(&mut pool, &filter)?;

        if trades.is_empty() {
            println!("No trades found.");
            return Ok(());
        }

        StatsLogic::print(&trades, &cfg.currency, *by_emotion, cfg.separator());
    }
    Ok(())
}
