use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_trade, load_trade, update_trade};
use crate::errors::{AppError, AppResult};
use crate::models::emotion::Emotion;
use crate::models::side::Side;
use crate::models::time_of_day::TimeOfDay;
use crate::models::trade::Trade;
use chrono::NaiveDate;

/// Fields supplied by the user. `None` means "not given"; for the
/// clearable fields `Some(None)` means "remove the stored value".
#[derive(Debug, Clone, Default)]
pub struct TradeFields {
    pub date: Option<NaiveDate>,
    pub symbol: Option<String>,
    pub side: Option<Side>,
    pub quantity: Option<f64>,
    pub entry_price: Option<f64>,
    pub exit_price: Option<Option<f64>>,
    pub entry_time: Option<Option<TimeOfDay>>,
    pub exit_time: Option<Option<TimeOfDay>>,
    pub emotions: Option<Vec<Emotion>>,
    pub notes: Option<String>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Store a new trade. Date, symbol, quantity and entry price are required;
    /// the side falls back to `default_side`.
    pub fn create(pool: &mut DbPool, fields: TradeFields, default_side: Side) -> AppResult<Trade> {
        let date = fields
            .date
            .ok_or_else(|| AppError::InvalidDate("missing trade date".into()))?;
        let symbol = fields
            .symbol
            .clone()
            .ok_or_else(|| AppError::Other("missing symbol".into()))?;
        let quantity = fields.quantity.ok_or(AppError::InvalidNumber {
            field: "quantity",
            value: String::new(),
        })?;
        let entry_price = fields.entry_price.ok_or(AppError::InvalidNumber {
            field: "entry price",
            value: String::new(),
        })?;

        let mut trade = Trade::new(
            date,
            &symbol,
            fields.side.unwrap_or(default_side),
            quantity,
            entry_price,
        );
        apply_fields(&mut trade, fields);
        validate(&trade)?;

        // Trade row and audit row are written together or not at all.
        let tx = pool.conn.unchecked_transaction()?;
        trade.id = insert_trade(&tx, &trade)?;

        ttlog(
            &tx,
            "add",
            &format!("trade #{}", trade.id),
            &describe(&trade),
        )?;
        tx.commit()?;

        Ok(trade)
    }

    /// Update only the given fields of trade `id`.
    pub fn edit(pool: &mut DbPool, id: i64, fields: TradeFields) -> AppResult<Trade> {
        let mut trade = load_trade(&pool.conn, id)?;
        apply_fields(&mut trade, fields);
        validate(&trade)?;

        let tx = pool.conn.unchecked_transaction()?;
        update_trade(&tx, &trade)?;

        ttlog(
            &tx,
            "edit",
            &format!("trade #{}", trade.id),
            &describe(&trade),
        )?;
        tx.commit()?;

        Ok(trade)
    }
}

fn apply_fields(trade: &mut Trade, fields: TradeFields) {
    if let Some(d) = fields.date {
        trade.date = d;
    }
    if let Some(s) = fields.symbol {
        trade.symbol = s.trim().to_uppercase();
    }
    if let Some(side) = fields.side {
        trade.side = side;
    }
    if let Some(q) = fields.quantity {
        trade.quantity = q;
    }
    if let Some(p) = fields.entry_price {
        trade.entry_price = p;
    }
    if let Some(p) = fields.exit_price {
        trade.exit_price = p;
    }
    if let Some(t) = fields.entry_time {
        trade.entry_time = t;
    }
    if let Some(t) = fields.exit_time {
        trade.exit_time = t;
    }
    if let Some(e) = fields.emotions {
        trade.emotions = e;
    }
    if let Some(n) = fields.notes {
        trade.notes = n;
    }
}

fn validate(trade: &Trade) -> AppResult<()> {
    if trade.symbol.is_empty() {
        return Err(AppError::Other("symbol must not be empty".into()));
    }
    check_positive("quantity", trade.quantity)?;
    check_positive("entry price", trade.entry_price)?;
    if let Some(exit) = trade.exit_price {
        check_positive("exit price", exit)?;
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidNumber {
            field,
            value: value.to_string(),
        })
    }
}

fn describe(t: &Trade) -> String {
    format!(
        "{} {} {} {} @ {}",
        t.date_str(),
        t.side.as_str(),
        t.quantity,
        t.symbol,
        t.entry_price
    )
}
