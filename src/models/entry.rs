use crate::utils::date;
use serde::{Deserialize, Serialize};

/// One recorded work shift with its derived pay figures.
///
/// Everything except `id`, `raw_date`, `branch`, `time_in` and `time_out` is
/// derived by the pay calculator at save time and frozen into the record:
/// later changes to the rate constants or formatting do not rewrite history.
/// The decimal hour count is deliberately NOT retained; the dashboard
/// re-parses it from the `hours` text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetEntry {
    /// Stable identifier assigned at creation, never reused within a bucket.
    pub id: u64,
    /// Source date input, "YYYY-MM-DD".
    pub raw_date: String,
    /// Display form, e.g. "15 Mar 2024", or "Unknown date".
    pub display_date: String,
    /// Full weekday name, empty when the date did not parse.
    pub weekday: String,
    pub branch: String,
    /// "HH:MM"
    pub time_in: String,
    /// "HH:MM", same day, never earlier than `time_in`.
    pub time_out: String,
    /// "Xhrs Ymins"
    pub hours: String,
    /// Monetary amounts, fixed to 2 decimal places at creation time.
    pub gross: String,
    pub net: String,
    pub cpf: String,
}

impl TimesheetEntry {
    /// Calendar-month label for grouping, derived fresh from `raw_date`.
    /// Entries whose date does not parse group under "Unknown".
    pub fn month_label(&self) -> String {
        match date::parse_date(&self.raw_date) {
            Some(d) => d.format("%b %Y").to_string(),
            None => "Unknown".to_string(),
        }
    }
}
