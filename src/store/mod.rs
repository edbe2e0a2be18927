pub mod bucket;
pub mod entries;
pub mod notes;

/// Stable bucket keys; the file on disk is `<key>.json` in the data dir.
pub const ENTRIES_BUCKET: &str = "timesheet_entries";
pub const NOTES_BUCKET: &str = "timesheet_notes";
