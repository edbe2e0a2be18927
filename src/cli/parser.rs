use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftbook
/// CLI application to track work shifts and keep notes
#[derive(Parser)]
#[command(
    name = "shiftbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timesheet CLI: log shifts, derive the gross/net/CPF pay split, keep notes",
    long_about = None
)]
pub struct Cli {
    /// Override the bucket directory (useful for tests or custom locations)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and empty buckets
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a work shift
    Add {
        /// Date of the shift (YYYY-MM-DD)
        date: String,

        /// Branch worked at (free text)
        branch: String,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        time_in: String,

        /// Clock-out time (HH:MM), same day
        #[arg(long = "out", help = "Clock-out time (HH:MM), same day")]
        time_out: String,
    },

    /// Edit a recorded shift; derived figures are regenerated
    Edit {
        /// Id of the shift to edit (see `list`)
        id: u64,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "New branch")]
        branch: Option<String>,

        #[arg(long = "in", help = "New clock-in time (HH:MM)")]
        time_in: Option<String>,

        #[arg(long = "out", help = "New clock-out time (HH:MM)")]
        time_out: Option<String>,
    },

    /// Delete one shift by id
    Del {
        /// Id of the shift to delete
        id: u64,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Delete all shifts
    Clear {
        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List recorded shifts
    List {
        #[arg(
            long,
            short,
            help = "Filter by year, month, day or a START:END range"
        )]
        period: Option<String>,

        #[arg(long = "by-month", help = "Group the listing by calendar month")]
        by_month: bool,

        #[arg(long, help = "Compact fixed-width table instead of cards")]
        summary: bool,
    },

    /// Show the dashboard totals (hours, gross, net, employer CPF)
    Totals {
        #[arg(
            long,
            short,
            help = "Restrict totals to a year, month, day or START:END range"
        )]
        period: Option<String>,
    },

    /// Manage free-text notes
    Note {
        #[command(subcommand)]
        action: NoteCommands,
    },
}

#[derive(Subcommand)]
pub enum NoteCommands {
    /// Add a note
    Add {
        /// Note body
        content: String,

        #[arg(long, help = "Optional note title")]
        title: Option<String>,
    },

    /// List notes
    List,

    /// Edit a note by id
    Edit {
        /// Id of the note to edit
        id: u64,

        /// New body (keeps the old one when omitted)
        content: Option<String>,

        #[arg(long, help = "New title (pass an empty string to remove it)")]
        title: Option<String>,
    },

    /// Delete one note by id
    Del {
        /// Id of the note to delete
        id: u64,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Delete all notes
    Clear {
        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
