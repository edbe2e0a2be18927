//! Pay calculator: pure derivation of display strings and the monetary
//! split from (date, time-in, time-out).
//!
//! Derived values are computed once here and frozen into the saved entry;
//! nothing downstream recomputes them.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::TimesheetEntry;
use crate::utils::{date, time};
use chrono::NaiveTime;

/// Sentinel display for a date that did not parse. The save still goes
/// through; rendering and aggregation tolerate the placeholder.
pub const UNKNOWN_DATE: &str = "Unknown date";

/// Rate constants applied at save time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayRates {
    pub hourly_rate: f64,
    pub cpf_deduction: f64,
    pub cpf_employer: f64,
}

impl From<&Config> for PayRates {
    fn from(cfg: &Config) -> Self {
        Self {
            hourly_rate: cfg.hourly_rate,
            cpf_deduction: cfg.cpf_deduction,
            cpf_employer: cfg.cpf_employer,
        }
    }
}

/// Everything `compute_shift` derives for one shift.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftFigures {
    pub display_date: String,
    pub weekday: String,
    pub hours_text: String,
    pub hours_decimal: f64,
    pub gross: f64,
    pub net: f64,
    pub cpf: f64,
}

/// Round a monetary amount to 2 decimal places. Applied once, at this
/// boundary; no further rounding downstream.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Display date ("15 Mar 2024") and full weekday name for a raw date
/// string, falling back to the placeholder when it does not parse.
pub fn format_display_date(raw_date: &str) -> (String, String) {
    match date::parse_date(raw_date) {
        Some(d) => (
            d.format("%d %b %Y").to_string(),
            d.format("%A").to_string(),
        ),
        None => (UNKNOWN_DATE.to_string(), String::new()),
    }
}

/// Derive the full set of display and pay figures for one shift.
///
/// A `time_out` earlier than `time_in` is rejected: same-day shifts are the
/// only supported kind, and a negative duration would silently propagate to
/// negative pay. Equal times are allowed and yield a zero shift.
pub fn compute_shift(
    rates: &PayRates,
    raw_date: &str,
    time_in: NaiveTime,
    time_out: NaiveTime,
) -> AppResult<ShiftFigures> {
    let duration = time::minutes_between(time_in, time_out);
    if duration < 0 {
        return Err(AppError::InvalidShift(format!(
            "time-out {} is earlier than time-in {}; shifts must end on the same day",
            time_out.format("%H:%M"),
            time_in.format("%H:%M"),
        )));
    }

    let hours = duration / 60;
    let minutes = duration % 60;
    let hours_decimal = hours as f64 + minutes as f64 / 60.0;

    // net and cpf are taken from the unrounded gross, then each amount is
    // rounded exactly once
    let gross = hours_decimal * rates.hourly_rate;
    let net = gross * (1.0 - rates.cpf_deduction);
    let cpf = gross * rates.cpf_employer;

    let (display_date, weekday) = format_display_date(raw_date);

    Ok(ShiftFigures {
        display_date,
        weekday,
        hours_text: format!("{}hrs {}mins", hours, minutes),
        hours_decimal,
        gross: round2(gross),
        net: round2(net),
        cpf: round2(cpf),
    })
}

/// Assemble a complete entry from raw form inputs. Both `add` and `edit`
/// come through here, so every derived field is always regenerated from the
/// current (date, time-in, time-out).
pub fn build_entry(
    id: u64,
    rates: &PayRates,
    raw_date: &str,
    branch: &str,
    time_in: &str,
    time_out: &str,
) -> AppResult<TimesheetEntry> {
    let t_in = time::parse_required_time(time_in)?;
    let t_out = time::parse_required_time(time_out)?;

    let figures = compute_shift(rates, raw_date, t_in, t_out)?;

    Ok(TimesheetEntry {
        id,
        raw_date: raw_date.to_string(),
        display_date: figures.display_date,
        weekday: figures.weekday,
        branch: branch.to_string(),
        time_in: t_in.format("%H:%M").to_string(),
        time_out: t_out.format("%H:%M").to_string(),
        hours: figures.hours_text,
        gross: format!("{:.2}", figures.gross),
        net: format!("{:.2}", figures.net),
        cpf: format!("{:.2}", figures.cpf),
    })
}
