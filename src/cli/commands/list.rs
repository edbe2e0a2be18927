use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard;
use crate::errors::AppResult;
use crate::models::TimesheetEntry;
use crate::store::entries::{self, EntryStore};
use crate::utils::colors::colorize_placeholder;
use crate::utils::date;
use crate::utils::formatting::{bold, money};
use crate::utils::table::{Column, Table};

/// List recorded shifts as cards (default), grouped by month, or as a
/// compact summary table. Always ends with the dashboard totals for the
/// listed subset.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        by_month,
        summary,
    } = cmd
    {
        let store = EntryStore::open(&cfg.data_dir_path());
        let range = date::resolve_period(period.as_deref())?;
        let visible = dashboard::filter_by_period(store.list(), range.as_ref());

        if visible.is_empty() {
            println!("No entries yet.");
            return Ok(());
        }

        if *summary {
            print_summary_table(&visible);
        } else if *by_month {
            // grouping is derived fresh from raw_date on every listing
            for (label, group) in entries::group_by_month(visible.iter().copied()) {
                println!("── {} ──", bold(&label));
                for e in group {
                    print_card(e, cfg);
                }
            }
        } else {
            for e in visible.iter().copied() {
                print_card(e, cfg);
            }
        }

        println!();
        println!("{} entries", visible.len());
        let agg = dashboard::aggregate(visible.iter().copied());
        println!(
            "Totals: {:.2} hrs | gross {s}{:.2} | net {s}{:.2} | CPF {s}{:.2}",
            agg.hours,
            agg.gross,
            agg.net,
            agg.cpf,
            s = cfg.currency_symbol,
        );
    }
    Ok(())
}

fn print_card(e: &TimesheetEntry, cfg: &Config) {
    let sym = &cfg.currency_symbol;
    println!();
    println!(
        "#{}  {} ({})",
        e.id,
        bold(&colorize_placeholder(&e.display_date)),
        e.weekday
    );
    println!("    Branch: {}", e.branch);
    println!("    Time:   {} – {}  ({})", e.time_in, e.time_out, e.hours);
    println!(
        "    Gross: {} | Net: {} | CPF: {}",
        money(sym, &e.gross),
        money(sym, &e.net),
        money(sym, &e.cpf)
    );
}

fn print_summary_table(entries: &[&TimesheetEntry]) {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("Date", 12),
        Column::new("Day", 9),
        Column::new("Branch", 16),
        Column::new("In", 5),
        Column::new("Out", 5),
        Column::new("Hours", 12),
        Column::new("Gross", 8),
        Column::new("Net", 8),
        Column::new("CPF", 8),
    ]);

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.display_date.clone(),
            e.weekday.clone(),
            e.branch.clone(),
            e.time_in.clone(),
            e.time_out.clone(),
            e.hours.clone(),
            e.gross.clone(),
            e.net.clone(),
            e.cpf.clone(),
        ]);
    }

    print!("{}", table.render());
}
