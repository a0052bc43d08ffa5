use crate::core::calculator::pnl::{PnlStats, by_emotion};
use crate::models::trade::Trade;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, color_for_pnl};
use crate::utils::formatting::{
    format_duration, format_money, format_percent, format_ratio,
};
use crate::utils::table::{Column, Table};

pub struct StatsLogic;

impl StatsLogic {
    pub fn print(trades: &[Trade], currency: &str, with_emotions: bool, separator: char) {
        let s = PnlStats::compute(trades);

        header("P&L summary");
        row("Trades", format!("{} ({} open)", s.total_trades, s.open_trades));
        row(
            "Closed",
            format!(
                "{}  won {} / lost {} / even {}",
                s.closed_trades, s.wins, s.losses, s.breakeven
            ),
        );
        row("Win rate", format_percent(s.win_rate));
        row(
            "Total P&L",
            format!(
                "{}{}{}",
                color_for_pnl(s.total_pnl),
                format_money(s.total_pnl, currency),
                RESET
            ),
        );
        row("Average win", format_money(s.avg_win, currency));
        row("Average loss", format_money(-s.avg_loss, currency));
        row("Largest win", format_money(s.largest_win, currency));
        row("Largest loss", format_money(-s.largest_loss, currency));
        row("Profit factor", format_ratio(s.profit_factor));
        row("Avg duration", format_duration(s.avg_duration));

        if with_emotions {
            println!();
            header("By emotion");

            let breakdown = by_emotion(trades);
            if breakdown.is_empty() {
                println!("No tagged closed trades.");
                return;
            }

            let mut table = Table::new(
                vec![
                    Column::left("EMOTION"),
                    Column::right("TRADES"),
                    Column::right("WIN RATE"),
                    Column::right("P&L"),
                ],
                separator,
            );
            for (emotion, es) in &breakdown {
                table.add_row(vec![
                    emotion.as_str().to_string(),
                    es.trades.to_string(),
                    format_percent(es.win_rate()),
                    format_money(es.total_pnl, currency),
                ]);
            }
            print!("{}", table.render());
        }
    }
}

fn row(label: &str, value: String) {
    println!("{}{:<14}{} {}", CYAN, label, RESET, value);
}
