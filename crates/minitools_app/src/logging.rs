//! `--log-level` handling for the `minitools` binary.

use log::LevelFilter;

use crate::CliError;

/// Parses a `--log-level` value, case-insensitively.
pub fn parse_level(raw: &str) -> Result<LevelFilter, CliError> {
    raw.trim()
        .parse::<LevelFilter>()
        .map_err(|_| CliError::InvalidLogLevel(raw.to_string()))
}

/// Installs the stderr logger. A second call is ignored.
pub fn initialize(level: LevelFilter) {
    if !tools_logging::init_stderr(level) {
        tools_logging::tool_debug!("logger already installed, keeping it");
    }
}
