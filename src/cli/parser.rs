use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ojtlog
/// CLI logbook for OJT/internship work shifts
#[derive(Parser)]
#[command(
    name = "ojtlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "An OJT logbook CLI: record daily shifts, apply the grace window, export weekly reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the user id every record is scoped to
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or overwrite the attendance settings (scheduled time-in and grace window)
    Settings {
        #[arg(
            long = "time-in",
            value_name = "HH:MM",
            requires = "grace",
            help = "Scheduled time-in"
        )]
        time_in: Option<String>,

        #[arg(
            long = "grace",
            value_name = "MINUTES",
            requires = "time_in",
            help = "Grace window in minutes"
        )]
        grace: Option<u32>,
    },

    /// Show or overwrite the report profile
    Profile {
        #[arg(long = "company")]
        company: Option<String>,

        #[arg(long = "last-name")]
        last_name: Option<String>,

        #[arg(long = "first-name")]
        first_name: Option<String>,

        #[arg(long = "middle-initial")]
        middle_initial: Option<String>,

        #[arg(long = "program")]
        program: Option<String>,

        #[arg(long = "section")]
        section: Option<String>,

        #[arg(long = "assigned-task")]
        assigned_task: Option<String>,
    },

    /// Add a logbook entry
    Add {
        /// Date of the shift (YYYY-MM-DD)
        date: String,

        #[arg(long = "week", help = "Week of month (1-5); derived from the date if omitted")]
        week: Option<u8>,

        #[arg(long = "in", value_name = "HH:MM", help = "Start time")]
        start: String,

        #[arg(long = "out", value_name = "HH:MM", help = "End time")]
        end: String,

        #[arg(long = "desc", help = "Work (task) description")]
        desc: String,

        #[arg(long = "lunch", value_name = "HOURS", help = "Lunch break duration in hours")]
        lunch: Option<f64>,

        #[arg(long = "learnings", help = "What you learned during the shift")]
        learnings: Option<String>,

        #[arg(long = "issues", help = "Problems met during the shift")]
        issues: Option<String>,
    },

    /// Preview the hours of a shift without saving it
    Preview {
        #[arg(long = "in", value_name = "HH:MM")]
        start: Option<String>,

        #[arg(long = "out", value_name = "HH:MM")]
        end: Option<String>,

        #[arg(long = "lunch", value_name = "HOURS")]
        lunch: Option<f64>,
    },

    /// Edit an existing entry (unspecified fields keep their value)
    Edit {
        /// Entry id (see `list`)
        id: i64,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "week")]
        week: Option<u8>,

        #[arg(long = "in", value_name = "HH:MM")]
        start: Option<String>,

        #[arg(long = "out", value_name = "HH:MM")]
        end: Option<String>,

        #[arg(long = "desc")]
        desc: Option<String>,

        #[arg(long = "learnings")]
        learnings: Option<String>,

        #[arg(long = "issues")]
        issues: Option<String>,
    },

    /// Delete an entry by id
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List logbook entries, newest first
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, short, help = "Search in dates, descriptions, learnings and issues")]
        search: Option<String>,

        #[arg(long, help = "Show learnings and issues under each entry")]
        details: bool,
    },

    /// Show total hours and recent entries
    Summary {
        #[arg(long, default_value_t = 5, help = "Number of recent entries to show")]
        recent: usize,
    },

    /// Clock in / clock out attendance
    Clock {
        #[command(subcommand)]
        action: ClockAction,
    },

    /// Export the logbook as a weekly report
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum ClockAction {
    /// Record a time-in (defaults to now)
    In {
        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "at", value_name = "HH:MM")]
        at: Option<String>,
    },

    /// Close the open record (defaults to now)
    Out {
        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "at", value_name = "HH:MM")]
        at: Option<String>,
    },

    /// List attendance records
    List,
}
