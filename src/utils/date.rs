use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub type DateBounds = (NaiveDate, NaiveDate);

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Resolve a `--period` / `--range` value into inclusive date bounds.
///
/// Supported:
/// - YYYY, YYYY-MM, YYYY-MM-DD
/// - start:end in the same shape (YYYY:YYYY, YYYY-MM:YYYY-MM, ...)
/// - `all` or no value → no filtering (`None`)
pub fn resolve_period(period: Option<&str>) -> AppResult<Option<DateBounds>> {
    let Some(p) = period.map(str::trim) else {
        return Ok(None);
    };

    if p.is_empty() || p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if let Some((start, end)) = p.split_once(':') {
        let (start, end) = (start.trim(), end.trim());
        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "{p}: start and end must have the same format"
            )));
        }
        let (from, _) = period_bounds(start)?;
        let (_, to) = period_bounds(end)?;
        if from > to {
            return Err(AppError::InvalidDate(format!("{p}: start is after end")));
        }
        return Ok(Some((from, to)));
    }

    period_bounds(p).map(Some)
}

fn period_bounds(p: &str) -> AppResult<DateBounds> {
    let invalid = || AppError::InvalidDate(format!("Invalid period: {}", p));

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let from = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let to = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((from, to))
        }
        // YYYY-MM
        7 => {
            let from = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            Ok((from, last_day_of_month(from).ok_or_else(invalid)?))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn last_day_of_month(d: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}
