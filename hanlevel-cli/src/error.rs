//! Error handling for the CLI application

use std::fmt;

/// Failures the CLI reports itself, as opposed to I/O errors carried with
/// context through `anyhow`
#[derive(Debug)]
pub enum CliError {
    /// No file matched the given patterns
    NoInputFiles(String),
    /// Glob pattern could not be parsed
    InvalidPattern(String),
    /// Configuration file or flag combination is unusable
    ConfigError(String),
    /// The engine rejected the vocabulary or settings
    ProcessingError(String),
    /// Annotated file lacks the level column being filtered on
    MissingColumn(String),
    /// File has no header row
    EmptyInput,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles(patterns) => write!(f, "No input files match: {patterns}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Classification failed: {msg}"),
            CliError::MissingColumn(column) => write!(f, "No \"{column}\" column in header"),
            CliError::EmptyInput => f.write_str("Input file has no header row"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<hanlevel_engine::EngineError> for CliError {
    fn from(err: hanlevel_engine::EngineError) -> Self {
        CliError::ProcessingError(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
