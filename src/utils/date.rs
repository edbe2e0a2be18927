use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Inclusive date range used to filter entries by period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }
}

/// Parse a single period token into its inclusive bounds:
/// `YYYY-MM-DD` (one day), `YYYY-MM` (one month), `YYYY` (one year).
pub fn period_bounds(p: &str) -> Result<DateRange, String> {
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(DateRange { start: d, end: d });
    }

    if let Ok(first) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok(DateRange {
            start: first,
            end: last_day_of_month(first.year(), first.month()),
        });
    }

    if let Ok(year) = p.parse::<i32>()
        && let Some(start) = NaiveDate::from_ymd_opt(year, 1, 1)
        && let Some(end) = NaiveDate::from_ymd_opt(year, 12, 31)
    {
        return Ok(DateRange { start, end });
    }

    Err(format!("Invalid period: {}", p))
}

/// Resolve an optional `--period` argument: a single token or `START:END`.
/// None means no filtering.
pub fn resolve_period(period: Option<&str>) -> AppResult<Option<DateRange>> {
    let Some(p) = period else {
        return Ok(None);
    };

    if p.contains(':') {
        let parts: Vec<&str> = p.split(':').collect();
        if parts.len() != 2 {
            return Err(AppError::InvalidPeriod(p.to_string()));
        }
        let s = period_bounds(parts[0]).map_err(AppError::InvalidPeriod)?;
        let e = period_bounds(parts[1]).map_err(AppError::InvalidPeriod)?;
        return Ok(Some(DateRange {
            start: s.start,
            end: e.end,
        }));
    }

    period_bounds(p).map(Some).map_err(AppError::InvalidPeriod)
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // month is always valid here, coming from a parsed date
    first_next
        .and_then(|d| d.pred_opt())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 1).unwrap())
}
