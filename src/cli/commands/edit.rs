use crate::cli::commands::totals;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pay::{self, PayRates};
use crate::errors::{AppError, AppResult};
use crate::store::entries::EntryStore;
use crate::ui::messages::success;

/// Edit a recorded shift. Unspecified fields keep their stored raw values;
/// every derived field is regenerated from the merged inputs.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        branch,
        time_in,
        time_out,
    } = cmd
    {
        let mut store = EntryStore::open(&cfg.data_dir_path());

        let position = store
            .position_of(*id)
            .ok_or(AppError::EntryNotFound(*id))?;
        let existing = store
            .get(position)
            .cloned()
            .ok_or(AppError::OutOfRange(position))?;

        let raw_date = date.as_deref().unwrap_or(&existing.raw_date);
        let branch = branch.as_deref().unwrap_or(&existing.branch);
        let time_in = time_in.as_deref().unwrap_or(&existing.time_in);
        let time_out = time_out.as_deref().unwrap_or(&existing.time_out);

        let rates = PayRates::from(cfg);
        let rebuilt = pay::build_entry(existing.id, &rates, raw_date, branch, time_in, time_out)?;
        let summary = format!(
            "Updated shift #{}: {} {} – {} ({}).",
            rebuilt.id, rebuilt.display_date, rebuilt.time_in, rebuilt.time_out, rebuilt.hours,
        );

        store.update(position, rebuilt)?;
        success(summary);

        totals::print_refreshed(store.list(), cfg);
    }

    Ok(())
}
