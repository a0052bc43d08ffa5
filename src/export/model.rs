use crate::models::trade::Trade;
use crate::utils::formatting::format_duration;
use serde::Serialize;

/// Flat row written by the CSV and JSON exporters.
///
/// `duration` and `pnl` are computed at export time; the journal stores
/// neither of them.
#[derive(Serialize, Clone, Debug)]
pub struct TradeExport {
    pub id: i64,
    pub date: String,
    pub symbol: String,
    pub side: String,
    pub quantity: f64,
    pub entry_price: f64,
    pub exit_price: Option<f64>,
    pub entry_time: String,
    pub exit_time: String,
    pub duration: String,
    pub duration_minutes: Option<u32>,
    pub pnl: Option<f64>,
    pub emotions: String,
    pub notes: String,
}

impl From<&Trade> for TradeExport {
    fn from(t: &Trade) -> Self {
        let duration = t.duration();
        Self {
            id: t.id,
            date: t.date_str(),
            symbol: t.symbol.clone(),
            side: t.side.as_str().to_string(),
            quantity: t.quantity,
            entry_price: t.entry_price,
            exit_price: t.exit_price,
            entry_time: t.entry_time.map(|x| x.to_string()).unwrap_or_default(),
            exit_time: t.exit_time.map(|x| x.to_string()).unwrap_or_default(),
            duration: format_duration(duration),
            duration_minutes: duration.minutes(),
            pnl: t.pnl().map(|p| (p * 100.0).round() / 100.0),
            emotions: t.emotions_str(),
            notes: t.notes.clone(),
        }
    }
}
