//! Trade duration from an entry and an exit time-of-day.
//!
//! Only times of day are known, so an exit earlier than the entry means the
//! trade closed the following day. Equal times are a zero-length trade.

use crate::models::time_of_day::{MINUTES_PER_DAY, TimeOfDay};
use crate::utils::formatting::format_duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationResult {
    /// One or both times are missing: nothing to show.
    #[default]
    Empty,
    Minutes(u32),
}

impl DurationResult {
    pub fn minutes(&self) -> Option<u32> {
        match self {
            DurationResult::Empty => None,
            DurationResult::Minutes(m) => Some(*m),
        }
    }
}

pub fn resolve(entry: Option<TimeOfDay>, exit: Option<TimeOfDay>) -> DurationResult {
    let (Some(entry), Some(exit)) = (entry, exit) else {
        return DurationResult::Empty;
    };

    let entry_min = entry.minutes();
    let exit_min = exit.minutes();

    if exit_min == entry_min {
        DurationResult::Minutes(0)
    } else if exit_min > entry_min {
        DurationResult::Minutes(exit_min - entry_min)
    } else {
        // rollover past midnight
        DurationResult::Minutes(MINUTES_PER_DAY - entry_min + exit_min)
    }
}

/// Parse, resolve and format in one step, as a form field would.
pub fn trade_duration(entry: &str, exit: &str) -> String {
    format_duration(resolve(TimeOfDay::parse(entry), TimeOfDay::parse(exit)))
}
