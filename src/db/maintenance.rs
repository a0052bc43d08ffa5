use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::models::time_of_day::TimeOfDay;
use rusqlite::{Connection, params};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Rows whose time text was rewritten into zero-padded HH:MM.
    pub rewritten: usize,
    /// Rows whose time text could not be parsed and was blanked.
    pub cleared: usize,
}

fn canonical(raw: &str) -> String {
    TimeOfDay::parse(raw)
        .map(|t| t.to_string())
        .unwrap_or_default()
}

/// Rewrite stored entry/exit times into their canonical form.
///
/// `9:5` becomes `09:05`; values the parser rejects become `''`, which the
/// duration logic already treats as a missing time.
pub fn normalize_times(conn: &Connection) -> AppResult<NormalizeReport> {
    let rows: Vec<(i64, String, String)> = {
        let mut stmt = conn.prepare("SELECT id, entry_time, exit_time FROM trades")?;
        let mapped = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;
        let mut out = Vec::new();
        for r in mapped {
            out.push(r?);
        }
        out
    };

    let mut report = NormalizeReport::default();
    let tx = conn.unchecked_transaction()?;

    for (id, entry, exit) in rows {
        let new_entry = canonical(&entry);
        let new_exit = canonical(&exit);

        if new_entry == entry && new_exit == exit {
            continue;
        }

        let blanked = (new_entry.is_empty() && !entry.is_empty())
            || (new_exit.is_empty() && !exit.is_empty());
        if blanked {
            report.cleared += 1;
        } else {
            report.rewritten += 1;
        }

        tx.execute(
            "UPDATE trades SET entry_time = ?1, exit_time = ?2 WHERE id = ?3",
            params![new_entry, new_exit, id],
        )?;
    }

    if report.rewritten + report.cleared > 0 {
        ttlog(
            &tx,
            "normalize",
            "trades",
            &format!(
                "{} time(s) rewritten, {} cleared",
                report.rewritten, report.cleared
            ),
        )?;
    }

    tx.commit()?;
    Ok(report)
}
