use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("invalid log level {0:?} (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}
