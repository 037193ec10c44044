//! CLI error type

use std::path::PathBuf;

/// Errors that stop a run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid delimited text.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The settings file could not be parsed.
    #[error("Invalid settings file {path}: {source}")]
    Settings {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying parse error.
        source: toml::de::Error,
    },

    /// The delimiter is not a single ASCII character.
    #[error("Invalid delimiter {0:?}: must be a single ASCII character")]
    InvalidDelimiter(char),

    /// A column reference matched neither a header nor a 1-based index.
    #[error("Unknown column {0:?}")]
    UnknownColumn(String),

    /// The input has no header row.
    #[error("Input has no header row")]
    MissingHeader,

    /// The logger could not be installed.
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
