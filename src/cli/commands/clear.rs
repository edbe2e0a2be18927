use crate::cli::commands::totals;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::entries::EntryStore;
use crate::ui::messages::{confirm, info, success};

/// Delete every shift, behind a confirmation prompt. An empty collection
/// stays a collection; only this command empties it, and declining leaves
/// everything untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut store = EntryStore::open(&cfg.data_dir_path());

        if store.is_empty() {
            info("No entries to clear.");
            return Ok(());
        }

        let prompt = format!(
            "Delete ALL {} entries? This action is irreversible.",
            store.len()
        );

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        store.clear()?;
        success("All entries have been deleted.");

        totals::print_refreshed(store.list(), cfg);
    }

    Ok(())
}
