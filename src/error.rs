use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading a roster file or answering a query.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to open roster file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: failed to read line")]
    Read {
        path: PathBuf,
        line: u64,
        #[source]
        source: std::io::Error,
    },

    /// A line did not split into exactly five `|`-separated fields.
    #[error("{path}:{line}: expected 5 fields, found {fields}")]
    MalformedLine {
        path: PathBuf,
        line: u64,
        fields: usize,
    },

    #[error("{0} is not a member of any house")]
    PersonNotFound(String),

    #[error("{0} has no cohort")]
    MissingCohort(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
