use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{Note, TimesheetEntry};
use crate::store::{ENTRIES_BUCKET, NOTES_BUCKET, bucket::Bucket};

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the bucket directory with both buckets persisted empty
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing shiftbook…");

    let data_dir = Config::init_all(cli.data_dir.clone(), cli.test)?;

    println!("📄 Config file : {}", Config::config_file().display());

    // Persist both collections empty so the buckets exist from the start.
    // Loading fails open anyway; this just makes the files visible.
    let entries = Bucket::new(&data_dir, ENTRIES_BUCKET);
    if !entries.path().exists() {
        entries.save::<TimesheetEntry>(&[])?;
    }
    let notes = Bucket::new(&data_dir, NOTES_BUCKET);
    if !notes.path().exists() {
        notes.save::<Note>(&[])?;
    }

    println!("🗄️  Buckets    : {} / {}", ENTRIES_BUCKET, NOTES_BUCKET);
    println!("🎉 shiftbook initialization completed!");
    Ok(())
}
