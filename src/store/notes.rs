//! Note store: same shape as the entry store, minus derived fields and
//! month grouping. Notes never cross-reference the timesheet collection.

use crate::errors::{AppError, AppResult};
use crate::models::Note;
use crate::store::{NOTES_BUCKET, bucket::Bucket};
use std::path::Path;

pub struct NoteStore {
    bucket: Bucket,
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn open(data_dir: &Path) -> Self {
        let bucket = Bucket::new(data_dir, NOTES_BUCKET);
        let notes = bucket.load();
        Self { bucket, notes }
    }

    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.notes.iter().map(|n| n.id).max().unwrap_or(0) + 1
    }

    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    pub fn get(&self, position: usize) -> Option<&Note> {
        self.notes.get(position)
    }

    pub fn add(&mut self, note: Note) -> AppResult<()> {
        self.notes.push(note);
        self.persist()
    }

    pub fn update(&mut self, position: usize, note: Note) -> AppResult<()> {
        if position >= self.notes.len() {
            return Err(AppError::OutOfRange(position));
        }
        self.notes[position] = note;
        self.persist()
    }

    pub fn remove(&mut self, position: usize) -> AppResult<Note> {
        if position >= self.notes.len() {
            return Err(AppError::OutOfRange(position));
        }
        let removed = self.notes.remove(position);
        self.persist()?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> AppResult<()> {
        self.notes.clear();
        self.persist()
    }

    fn persist(&self) -> AppResult<()> {
        self.bucket.save(&self.notes)
    }
}
