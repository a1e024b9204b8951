use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn meeting join/leave logs into a monthly attendance sheet",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple classes)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Process a daily meeting log and write the monthly sheet
    Process {
        /// Daily attendance log (defaults to `input_file` from the configuration)
        #[arg(long, short = 'f', value_name = "FILE")]
        file: Option<String>,

        /// Date of the session, M/D/YYYY (defaults to `date` from the configuration, then today)
        #[arg(long, short = 'd', value_name = "DATE")]
        date: Option<String>,

        /// Existing monthly sheet to extend with the new date column
        #[arg(long, value_name = "SHEET")]
        sheet: Option<String>,

        /// Directory for the generated sheet (defaults to `output_dir`)
        #[arg(long = "out-dir", value_name = "DIR")]
        out_dir: Option<String>,

        /// Session start (HH:MM)
        #[arg(long = "window-start", value_name = "HH:MM")]
        window_start: Option<String>,

        /// Session end (HH:MM)
        #[arg(long = "window-end", value_name = "HH:MM")]
        window_end: Option<String>,

        /// Minimum attended share of the session, between 0 and 1
        #[arg(long = "min-fraction", value_name = "FRACTION")]
        min_fraction: Option<f64>,

        /// Skip rows with an unparseable timestamp instead of aborting
        #[arg(long = "skip-malformed")]
        skip_malformed: bool,

        /// Print per-participant durations
        #[arg(long)]
        details: bool,

        /// Overwrite the output file without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Show a monthly sheet
    Show {
        /// Monthly sheet (CSV) to display
        #[arg(long, value_name = "SHEET")]
        sheet: String,
    },

    /// Export a monthly sheet in various formats
    Export {
        /// Monthly sheet (CSV) to export
        #[arg(long, value_name = "SHEET")]
        sheet: String,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal operation journal
    Log {
        /// Print entries of the journal
        #[arg(long = "print", help = "Print entries of the internal journal")]
        print: bool,
    },
}
