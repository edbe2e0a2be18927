use crate::cli::commands::totals;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::entries::EntryStore;
use crate::ui::messages::{confirm, info, success};

/// Delete one shift by id, behind a confirmation prompt.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = EntryStore::open(&cfg.data_dir_path());

        let position = store
            .position_of(*id)
            .ok_or(AppError::EntryNotFound(*id))?;
        let entry = store
            .get(position)
            .cloned()
            .ok_or(AppError::OutOfRange(position))?;

        let prompt = format!(
            "Delete shift #{} ({}, {})? This action is irreversible.",
            entry.id, entry.display_date, entry.branch
        );

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = store.remove(position)?;
        success(format!(
            "Deleted shift #{} ({}).",
            removed.id, removed.display_date
        ));

        totals::print_refreshed(store.list(), cfg);
    }

    Ok(())
}
