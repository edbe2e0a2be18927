use crate::cli::parser::{Commands, NoteCommands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Note;
use crate::store::notes::NoteStore;
use crate::ui::messages::{confirm, info, success};
use crate::utils::formatting::bold;

/// Handle the `note` subcommands: the notes collection with the same
/// create/read/update/delete shape as the timesheet, minus derived fields.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Note { action } = cmd else {
        return Ok(());
    };

    let mut store = NoteStore::open(&cfg.data_dir_path());

    match action {
        NoteCommands::Add { content, title } => {
            let note = Note::new(store.next_id(), title.clone(), content.clone());
            let id = note.id;
            store.add(note)?;
            success(format!("Added note #{}.", id));
        }

        NoteCommands::List => {
            if store.is_empty() {
                println!("No notes yet.");
                return Ok(());
            }
            for n in store.list() {
                print_card(n);
            }
            println!();
            println!("{} notes", store.len());
        }

        NoteCommands::Edit { id, content, title } => {
            let position = store.position_of(*id).ok_or(AppError::NoteNotFound(*id))?;
            let existing = store
                .get(position)
                .cloned()
                .ok_or(AppError::OutOfRange(position))?;

            let new_content = content.clone().unwrap_or(existing.content);
            let new_title = match title {
                // an explicit empty string removes the title
                Some(t) if t.is_empty() => None,
                Some(t) => Some(t.clone()),
                None => existing.title,
            };

            // rebuilding refreshes the timestamp, matching add semantics
            let rebuilt = Note::new(existing.id, new_title, new_content);
            store.update(position, rebuilt)?;
            success(format!("Updated note #{}.", id));
        }

        NoteCommands::Del { id, yes } => {
            let position = store.position_of(*id).ok_or(AppError::NoteNotFound(*id))?;

            let prompt = format!("Delete note #{}? This action is irreversible.", id);
            if !*yes && !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            store.remove(position)?;
            success(format!("Deleted note #{}.", id));
        }

        NoteCommands::Clear { yes } => {
            if store.is_empty() {
                info("No notes to clear.");
                return Ok(());
            }

            let prompt = format!(
                "Delete ALL {} notes? This action is irreversible.",
                store.len()
            );
            if !*yes && !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            store.clear()?;
            success("All notes have been deleted.");
        }
    }

    Ok(())
}

fn print_card(n: &Note) {
    println!();
    match &n.title {
        Some(t) => println!("#{}  {}", n.id, bold(t)),
        None => println!("#{}", n.id),
    }
    for line in textwrap::wrap(&n.content, 72) {
        println!("    {}", line);
    }
    println!("    — {}", n.created_at);
}
