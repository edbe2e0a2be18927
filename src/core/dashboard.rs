//! Dashboard aggregator: running totals over the entry collection.
//!
//! The persisted entry keeps the worked time only as its "Xhrs Ymins" text,
//! so the decimal hour count is re-derived by reverse-parsing that string
//! on every aggregation instead of trusting a cached number.

use crate::models::{TimesheetEntry, Totals};
use crate::utils::date::DateRange;
use regex::Regex;
use std::sync::OnceLock;

fn hours_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)hrs (\d+)mins$").unwrap())
}

/// Reverse-parse the stored hours text back into decimal hours.
/// Placeholder or mangled text yields None and contributes nothing.
pub fn parse_hours_text(text: &str) -> Option<f64> {
    let caps = hours_re().captures(text.trim())?;
    let hours: f64 = caps[1].parse().ok()?;
    let minutes: f64 = caps[2].parse().ok()?;
    Some(hours + minutes / 60.0)
}

fn parse_amount(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Sum hours and the three pay figures across the given entries.
/// An empty collection yields all-zero totals; an entry with an unparseable
/// field contributes zero for that field rather than breaking the total.
pub fn aggregate<'a, I>(entries: I) -> Totals
where
    I: IntoIterator<Item = &'a TimesheetEntry>,
{
    let mut totals = Totals::default();

    for e in entries {
        totals.hours += parse_hours_text(&e.hours).unwrap_or(0.0);
        totals.gross += parse_amount(&e.gross);
        totals.net += parse_amount(&e.net);
        totals.cpf += parse_amount(&e.cpf);
    }

    totals
}

/// Restrict entries to a period before aggregating. Entries whose raw date
/// does not parse never match a filter.
pub fn filter_by_period<'a>(
    entries: &'a [TimesheetEntry],
    range: Option<&DateRange>,
) -> Vec<&'a TimesheetEntry> {
    entries
        .iter()
        .filter(|e| match range {
            None => true,
            Some(r) => crate::utils::date::parse_date(&e.raw_date)
                .map(|d| r.contains(d))
                .unwrap_or(false),
        })
        .collect()
}
