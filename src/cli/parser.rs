use clap::{Parser, Subcommand};

/// Command-line interface definition for clockon
/// Track work and break time per activity in a plain-text journal
#[derive(Parser)]
#[command(
    name = "clockon",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small time tracker: log work and breaks per activity, report days, weeks and years",
    long_about = None
)]
pub struct Cli {
    /// Override the journal path (useful for tests or a second journal)
    #[arg(global = true, long = "log")]
    pub log: Option<String>,

    /// Use an alternative configuration file
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Pretend the current time is this RFC3339 instant
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the journal directory
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Add a new activity
    Add {
        /// Activity name (a single line of text)
        name: String,
    },

    /// Make an existing activity the current one
    Select {
        name: String,
    },

    /// Delete an activity (its history stays in the journal until `shrink`)
    Del {
        name: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Log a finished work interval
    Work {
        name: String,

        /// Length of the interval, e.g. 25m, 1h30m
        #[arg(long = "for", value_name = "DURATION")]
        dur: String,

        /// When the interval ended: RFC3339 or HH:MM today (default: now)
        #[arg(long = "end", value_name = "TIME")]
        end: Option<String>,
    },

    /// Log a finished break
    #[command(name = "break")]
    Break {
        name: String,

        /// Length of the break, e.g. 5m
        #[arg(long = "for", value_name = "DURATION")]
        dur: String,

        /// When the break ended: RFC3339 or HH:MM today (default: now)
        #[arg(long = "end", value_name = "TIME")]
        end: Option<String>,
    },

    /// Show activities and today's tally
    Status,

    /// Weekly report for an activity
    Week {
        /// Activity (default: the current one)
        name: Option<String>,

        #[arg(long = "week", value_name = "YYYY-Www", help = "ISO week, e.g. 2024-W03")]
        week: Option<String>,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Yearly report for an activity
    Year {
        /// Activity (default: the current one)
        name: Option<String>,

        #[arg(long = "year", value_name = "YYYY")]
        year: Option<i32>,

        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Compact the journal to one work and one break entry per activity and day
    Shrink {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print every journal entry
    Log,
}
