use crate::db::pool::DbPool;
use crate::db::queries::{TradeFilter, load_trades};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TradeExport;
use crate::ui::messages::warning;
use crate::utils::date::resolve_period;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export trades in `range` (`None`/`all` = everything) to `file`.
    ///
    /// `file` must be absolute. Returns the number of exported trades.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let filter = TradeFilter {
            bounds: resolve_period(range)?,
            ..Default::default()
        };
        let trades = load_trades(pool, &filter)?;

        if trades.is_empty() {
            warning("No trades found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let rows: Vec<TradeExport> = trades.iter().map(TradeExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
