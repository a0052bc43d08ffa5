use super::{emotion::Emotion, side::Side, time_of_day::TimeOfDay};
use crate::core::calculator::duration::{self, DurationResult};
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Trade {
    pub id: i64,
    pub date: NaiveDate,               // ⇔ trades.date (TEXT "YYYY-MM-DD")
    pub symbol: String,                // ⇔ trades.symbol (upper case)
    pub side: Side,                    // ⇔ trades.side ('long' | 'short')
    pub quantity: f64,                 // ⇔ trades.quantity
    pub entry_price: f64,              // ⇔ trades.entry_price
    pub exit_price: Option<f64>,       // ⇔ trades.exit_price (NULL = open)
    pub entry_time: Option<TimeOfDay>, // ⇔ trades.entry_time (TEXT "HH:MM" or '')
    pub exit_time: Option<TimeOfDay>,  // ⇔ trades.exit_time (TEXT "HH:MM" or '')
    pub emotions: Vec<Emotion>,        // ⇔ trades.emotions (comma separated)
    pub notes: String,
    pub created_at: String, // ⇔ trades.created_at (TEXT, ISO8601)
}

impl Trade {
    /// Build a trade entered from the CLI. `id = 0` until it is stored.
    pub fn new(
        date: NaiveDate,
        symbol: &str,
        side: Side,
        quantity: f64,
        entry_price: f64,
    ) -> Self {
        Self {
            id: 0,
            date,
            symbol: symbol.trim().to_uppercase(),
            side,
            quantity,
            entry_price,
            exit_price: None,
            entry_time: None,
            exit_time: None,
            emotions: Vec::new(),
            notes: String::new(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_open(&self) -> bool {
        self.exit_price.is_none()
    }

    /// Always derived from the two stored times, never stored itself.
    pub fn duration(&self) -> DurationResult {
        duration::resolve(self.entry_time, self.exit_time)
    }

    /// Realised P&L, `None` while the trade is open.
    pub fn pnl(&self) -> Option<f64> {
        self.exit_price
            .map(|exit| (exit - self.entry_price) * self.quantity * self.side.sign())
    }

    pub fn emotions_str(&self) -> String {
        Emotion::list_to_db_str(&self.emotions)
    }
}
