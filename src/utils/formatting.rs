//! Formatting utilities used for CLI and export outputs.

use crate::core::calculator::duration::DurationResult;

/// Render a duration as `"45min"` or `"1h 10min"`.
/// Hours always come with a minutes part, so 60 minutes is `"1h 0min"`.
pub fn format_duration(d: DurationResult) -> String {
    match d {
        DurationResult::Empty => String::new(),
        DurationResult::Minutes(m) if m < 60 => format!("{}min", m),
        DurationResult::Minutes(m) => format!("{}h {}min", m / 60, m % 60),
    }
}

/// Signed money amount with two decimals, e.g. `+125.50 USD`.
/// Anything that rounds to zero cents (including `-0.0`) prints unsigned.
pub fn format_money(value: f64, currency: &str) -> String {
    let cents = (value * 100.0).round() / 100.0;
    let value = if cents == 0.0 { 0.0 } else { cents };
    let sign = if value > 0.0 { "+" } else { "" };
    if currency.is_empty() {
        format!("{}{:.2}", sign, value)
    } else {
        format!("{}{:.2} {}", sign, value, currency)
    }
}

/// Price/quantity without trailing zeros (`100`, `12.5`, `0.0025`).
pub fn format_number(value: f64) -> String {
    let s = format!("{:.6}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

pub fn format_ratio(value: f64) -> String {
    if value.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.2}", value)
    }
}
