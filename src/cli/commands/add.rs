use crate::cli::commands::totals;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pay::{self, PayRates};
use crate::errors::AppResult;
use crate::store::entries::EntryStore;
use crate::ui::messages::success;

/// Record a work shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        branch,
        time_in,
        time_out,
    } = cmd
    {
        let mut store = EntryStore::open(&cfg.data_dir_path());
        let rates = PayRates::from(cfg);

        // The date is passed through raw: an unparseable one degrades to
        // the placeholder display instead of rejecting the save.
        let entry = pay::build_entry(store.next_id(), &rates, date, branch, time_in, time_out)?;
        let summary = format!(
            "Added shift #{} on {} at {} ({} – {}, {}).",
            entry.id, entry.display_date, entry.branch, entry.time_in, entry.time_out, entry.hours,
        );

        store.add(entry)?;
        success(summary);

        totals::print_refreshed(store.list(), cfg);
    }

    Ok(())
}
