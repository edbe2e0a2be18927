//! Entry store: owns the ordered timesheet collection and its persistence.
//!
//! Order is insertion order; edits replace in place, removal shifts later
//! positions down by one. Every mutation persists the full collection
//! through the bucket before returning, so its result is durable even if
//! the process dies right after.

use crate::errors::{AppError, AppResult};
use crate::models::TimesheetEntry;
use crate::store::{ENTRIES_BUCKET, bucket::Bucket};
use std::path::Path;

pub struct EntryStore {
    bucket: Bucket,
    entries: Vec<TimesheetEntry>,
}

impl EntryStore {
    /// Load the collection from the bucket, failing open to empty.
    pub fn open(data_dir: &Path) -> Self {
        let bucket = Bucket::new(data_dir, ENTRIES_BUCKET);
        let entries = bucket.load();
        Self { bucket, entries }
    }

    pub fn list(&self) -> &[TimesheetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Next stable id: one past the largest ever assigned in the bucket.
    pub fn next_id(&self) -> u64 {
        self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    /// Resolve a stable id to its current position. Positions go stale
    /// after any removal; resolve again rather than holding one.
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn get(&self, position: usize) -> Option<&TimesheetEntry> {
        self.entries.get(position)
    }

    pub fn add(&mut self, entry: TimesheetEntry) -> AppResult<()> {
        self.entries.push(entry);
        self.persist()
    }

    pub fn update(&mut self, position: usize, entry: TimesheetEntry) -> AppResult<()> {
        if position >= self.entries.len() {
            return Err(AppError::OutOfRange(position));
        }
        self.entries[position] = entry;
        self.persist()
    }

    pub fn remove(&mut self, position: usize) -> AppResult<TimesheetEntry> {
        if position >= self.entries.len() {
            return Err(AppError::OutOfRange(position));
        }
        let removed = self.entries.remove(position);
        self.persist()?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> AppResult<()> {
        self.entries.clear();
        self.persist()
    }

    /// Group the whole collection by calendar month for display.
    /// Computed fresh on every call.
    pub fn by_month(&self) -> Vec<(String, Vec<&TimesheetEntry>)> {
        group_by_month(&self.entries)
    }

    fn persist(&self) -> AppResult<()> {
        self.bucket.save(&self.entries)
    }
}

/// Group entries by calendar month derived from their raw date, preserving
/// insertion order within and across groups. Also used by the listing on a
/// period-filtered subset.
pub fn group_by_month<'a, I>(entries: I) -> Vec<(String, Vec<&'a TimesheetEntry>)>
where
    I: IntoIterator<Item = &'a TimesheetEntry>,
{
    let mut groups: Vec<(String, Vec<&'a TimesheetEntry>)> = Vec::new();

    for e in entries {
        let label = e.month_label();
        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, items)) => items.push(e),
            None => groups.push((label, vec![e])),
        }
    }

    groups
}
