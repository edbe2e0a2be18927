pub mod entry;
pub mod note;
pub mod totals;

pub use entry::TimesheetEntry;
pub use note::Note;
pub use totals::Totals;
