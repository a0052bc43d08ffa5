use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, TradeFields};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::emotion::Emotion;
use crate::models::side::Side;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::format_duration;
use crate::utils::time::parse_optional_time;

fn parse_number(field: &'static str, s: &str) -> AppResult<f64> {
    s.trim().parse::<f64>().map_err(|_| AppError::InvalidNumber {
        field,
        value: s.to_string(),
    })
}

fn parse_side(s: &str) -> AppResult<Side> {
    Side::from_code(s).ok_or_else(|| AppError::InvalidSide(s.to_string()))
}

/// Add a trade, or update the given fields of an existing one.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        symbol,
        side,
        qty,
        entry,
        exit,
        time_in,
        time_out,
        emotion,
        notes,
        edit,
    } = cmd
    {
        //
        // 1. Parse every given field
        //
        let fields = TradeFields {
            date: date
                .as_ref()
                .map(|d| date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone())))
                .transpose()?,
            symbol: symbol.clone(),
            side: side.as_deref().map(parse_side).transpose()?,
            quantity: qty
                .as_deref()
                .map(|q| parse_number("quantity", q))
                .transpose()?,
            entry_price: entry
                .as_deref()
                .map(|p| parse_number("entry price", p))
                .transpose()?,
            exit_price: match exit.as_deref() {
                None => None,
                Some(p) if p.trim().is_empty() => Some(None),
                Some(p) => Some(Some(parse_number("exit price", p)?)),
            },
            entry_time: parse_optional_time(time_in.as_ref())?,
            exit_time: parse_optional_time(time_out.as_ref())?,
            emotions: emotion.as_deref().map(Emotion::parse_list).transpose()?,
            notes: notes.clone(),
        };

        //
        // 2. Open DB and execute logic
        //
        let mut pool = DbPool::open(&cfg.database)?;

        let trade = match edit {
            Some(id) => {
                let t = AddLogic::edit(&mut pool, *id, fields)?;
                success(format!("Trade #{} updated.", t.id));
                t
            }
            None => {
                if fields.date.is_none() || fields.symbol.is_none() {
                    return Err(AppError::Other(
                        "add requires DATE and SYMBOL (or --edit ID)".into(),
                    ));
                }
                let default_side = parse_side(&cfg.default_side)?;
                let t = AddLogic::create(&mut pool, fields, default_side)?;
                success(format!("Trade #{} added.", t.id));
                t
            }
        };

        let duration = format_duration(trade.duration());
        if !duration.is_empty() {
            println!("Duration: {}", duration);
        }
    }

    Ok(())
}
