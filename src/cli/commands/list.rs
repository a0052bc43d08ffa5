use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{TradeFilter, load_trades};
use crate::errors::AppResult;
use crate::models::trade::Trade;
use crate::utils::date::resolve_period;
use crate::utils::formatting::{format_duration, format_money, format_number};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        symbol,
        open,
    } = cmd
    {
        let filter = TradeFilter {
            bounds: resolve_period(period.as_deref())?,
            symbol: symbol.clone(),
            open_only: *open,
        };

        let mut pool = DbPool::open(&cfg.database)?;
        let trades = load_trades(&mut pool, &filter)?;

        if trades.is_empty() {
            println!("No trades found.");
            return Ok(());
        }

        print!("{}", render_trades(&trades, cfg.separator()));
        println!("{} trade(s)", trades.len());
    }
    Ok(())
}

/// Trades as a table; duration and P&L are computed for display only.
pub fn render_trades(trades: &[Trade], separator: char) -> String {
    let mut table = Table::new(
        vec![
            Column::right("ID"),
            Column::left("DATE"),
            Column::left("SYMBOL"),
            Column::left("SIDE"),
            Column::right("QTY"),
            Column::right("ENTRY"),
            Column::right("EXIT"),
            Column::left("IN"),
            Column::left("OUT"),
            Column::right("DURATION"),
            Column::right("P&L"),
            Column::left("EMOTIONS"),
        ],
        separator,
    );

    for t in trades {
        table.add_row(vec![
            t.id.to_string(),
            t.date_str(),
            t.symbol.clone(),
            t.side.as_str().to_string(),
            format_number(t.quantity),
            format_number(t.entry_price),
            t.exit_price.map(format_number).unwrap_or_else(|| "--".into()),
            t.entry_time.map(|x| x.to_string()).unwrap_or_default(),
            t.exit_time.map(|x| x.to_string()).unwrap_or_default(),
            format_duration(t.duration()),
            t.pnl()
                .map(|p| format_money(p, ""))
                .unwrap_or_else(|| "--".into()),
            t.emotions_str(),
        ]);
    }

    table.render()
}
