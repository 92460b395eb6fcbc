use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Roster file read when neither `--file` nor `ROSTER_FILE` is given.
pub const DEFAULT_ROSTER_FILE: &str = "cohort_data.txt";

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Query a pipe-delimited house and cohort roster.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Roster file to read
    #[arg(short, long, env = "ROSTER_FILE", default_value = DEFAULT_ROSTER_FILE)]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every non-empty house label
    Houses,

    /// List students in a cohort, sorted by name
    Students {
        /// Cohort label, or "All" for every non-instructor, non-ghost row
        #[arg(short, long, default_value = crate::data::filter::ALL_COHORTS)]
        cohort: String,
    },

    /// Show the seven rosters: houses, ghosts, instructors
    Rosters,

    /// Dump every row as (name, house, advisor, cohort)
    Rows,

    /// Look up the cohort of a person
    Cohort {
        /// Full name, e.g. "Harry Potter"
        name: String,
    },

    /// List last names shared by more than one row
    Duplicates,

    /// List people sharing house and cohort with a student
    Housemates {
        /// Full name, e.g. "Hermione Granger"
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    Text,
    /// Pretty-printed JSON
    Json,
}

impl Config {
    /// Default log filter for `env_logger` when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
