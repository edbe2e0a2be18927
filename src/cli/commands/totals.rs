use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard;
use crate::errors::AppResult;
use crate::models::{TimesheetEntry, Totals};
use crate::store::entries::EntryStore;
use crate::utils::date;
use ansi_term::Colour;

/// Handle the `totals` command: the dashboard block, optionally restricted
/// to a period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Totals { period } = cmd {
        let store = EntryStore::open(&cfg.data_dir_path());
        let range = date::resolve_period(period.as_deref())?;

        let subset = dashboard::filter_by_period(store.list(), range.as_ref());
        let totals = dashboard::aggregate(subset.iter().copied());

        match &range {
            Some(r) => println!("Dashboard ({} → {})", r.start, r.end),
            None => println!("Dashboard"),
        }
        print_block(&totals, cfg);
    }
    Ok(())
}

/// Recompute and print the dashboard for the full collection. Every
/// mutating command calls this, so the running totals track each change.
pub fn print_refreshed(entries: &[TimesheetEntry], cfg: &Config) {
    let totals = dashboard::aggregate(entries);
    println!();
    println!("Dashboard");
    print_block(&totals, cfg);
}

fn print_block(totals: &Totals, cfg: &Config) {
    let sym = &cfg.currency_symbol;
    println!(
        "  Total hours  : {}",
        Colour::Cyan.paint(format!("{:.2}", totals.hours))
    );
    println!(
        "  Gross pay    : {}",
        Colour::Green.paint(format!("{}{:.2}", sym, totals.gross))
    );
    println!(
        "  Net pay      : {}",
        Colour::Green.paint(format!("{}{:.2}", sym, totals.net))
    );
    println!(
        "  Employer CPF : {}",
        Colour::Yellow.paint(format!("{}{:.2}", sym, totals.cpf))
    );
}
