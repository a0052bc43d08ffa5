use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::emotion::Emotion;
use crate::models::side::Side;
use crate::models::time_of_day::TimeOfDay;
use crate::models::trade::Trade;
use crate::utils::date::DateBounds;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, ToSql, params};

/// Optional filters shared by `list`, `stats` and `export`.
#[derive(Debug, Clone, Default)]
pub struct TradeFilter {
    pub bounds: Option<DateBounds>,
    pub symbol: Option<String>,
    pub open_only: bool,
}

const TRADE_COLUMNS: &str = "id, date, symbol, side, quantity, entry_price, exit_price, \
                             entry_time, exit_time, emotions, notes, created_at";

pub fn map_row(row: &Row) -> Result<Trade> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let side_str: String = row.get("side")?;
    let side = Side::from_db_str(&side_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            Type::Text,
            Box::new(AppError::InvalidSide(side_str.clone())),
        )
    })?;

    // Stored times that no longer parse behave like missing ones.
    let entry_time: String = row.get("entry_time")?;
    let exit_time: String = row.get("exit_time")?;

    let emotions_str: String = row.get("emotions")?;
    let emotions = emotions_str
        .split(',')
        .filter_map(Emotion::from_code)
        .collect();

    Ok(Trade {
        id: row.get("id")?,
        date,
        symbol: row.get("symbol")?,
        side,
        quantity: row.get("quantity")?,
        entry_price: row.get("entry_price")?,
        exit_price: row.get("exit_price")?,
        entry_time: TimeOfDay::parse(&entry_time),
        exit_time: TimeOfDay::parse(&exit_time),
        emotions,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

fn time_to_db(t: Option<TimeOfDay>) -> String {
    t.map(|t| t.to_string()).unwrap_or_default()
}

/// Insert a trade and return its new id.
pub fn insert_trade(conn: &Connection, t: &Trade) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO trades (date, symbol, side, quantity, entry_price, exit_price,
                             entry_time, exit_time, emotions, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            t.date_str(),
            t.symbol,
            t.side.as_str(),
            t.quantity,
            t.entry_price,
            t.exit_price,
            time_to_db(t.entry_time),
            time_to_db(t.exit_time),
            t.emotions_str(),
            t.notes,
            t.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_trade(conn: &Connection, t: &Trade) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE trades
         SET date = ?1, symbol = ?2, side = ?3, quantity = ?4, entry_price = ?5,
             exit_price = ?6, entry_time = ?7, exit_time = ?8, emotions = ?9, notes = ?10
         WHERE id = ?11",
        params![
            t.date_str(),
            t.symbol,
            t.side.as_str(),
            t.quantity,
            t.entry_price,
            t.exit_price,
            time_to_db(t.entry_time),
            time_to_db(t.exit_time),
            t.emotions_str(),
            t.notes,
            t.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::TradeNotFound(t.id));
    }
    Ok(())
}

pub fn load_trade(conn: &Connection, id: i64) -> AppResult<Trade> {
    let sql = format!("SELECT {TRADE_COLUMNS} FROM trades WHERE id = ?1");
    conn.query_row(&sql, [id], map_row)
        .optional()?
        .ok_or(AppError::TradeNotFound(id))
}

pub fn load_trades(pool: &mut DbPool, filter: &TradeFilter) -> AppResult<Vec<Trade>> {
    let mut sql = format!("SELECT {TRADE_COLUMNS} FROM trades WHERE 1 = 1");
    let mut args: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some((from, to)) = filter.bounds {
        sql.push_str(" AND date BETWEEN ? AND ?");
        args.push(Box::new(from.format("%Y-%m-%d").to_string()));
        args.push(Box::new(to.format("%Y-%m-%d").to_string()));
    }

    if let Some(symbol) = &filter.symbol {
        sql.push_str(" AND symbol = ?");
        args.push(Box::new(symbol.trim().to_uppercase()));
    }

    if filter.open_only {
        sql.push_str(" AND exit_price IS NULL");
    }

    sql.push_str(" ORDER BY date ASC, entry_time ASC, id ASC");

    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map(
        rusqlite::params_from_iter(args.iter().map(|a| a.as_ref())),
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_trade(conn: &Connection, id: i64) -> AppResult<()> {
    let removed = conn.execute("DELETE FROM trades WHERE id = ?1", [id])?;
    if removed == 0 {
        return Err(AppError::TradeNotFound(id));
    }
    Ok(())
}
