use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_trade, load_trade};
use crate::errors::AppResult;
use crate::models::trade::Trade;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove trade `id`, returning what was deleted.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<Trade> {
        let trade = load_trade(&pool.conn, id)?;
        let tx = pool.conn.unchecked_transaction()?;
        delete_trade(&tx, id)?;

        ttlog(
            &tx,
            "del",
            &format!("trade #{}", id),
            &format!("{} {} {}", trade.date_str(), trade.symbol, trade.side.as_str()),
        )?;
        tx.commit()?;

        Ok(trade)
    }
}
