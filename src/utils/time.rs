//! Time utilities: parsing HH:MM given explicitly on the command line.

use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::TimeOfDay;

/// `None` → field not given; `Some("")` → clear the stored time;
/// anything else must be a valid HH:MM.
pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<Option<TimeOfDay>>> {
    match input {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(Some(None)),
        Some(s) => {
            let t = TimeOfDay::parse(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
            Ok(Some(Some(t)))
        }
    }
}
