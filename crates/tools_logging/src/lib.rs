#![deny(missing_docs)]
//! Stderr logging for the minitools binaries and their tests.
//!
//! Command output owns stdout, so every logger installed here writes to
//! stderr. The `tool_debug!` and `tool_trace!` macros resolve `log` through
//! this crate, callers do not need their own `log` dependency.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

#[doc(hidden)]
pub use log;

/// Logs a debug-level message through the re-exported `log` facade.
#[macro_export]
macro_rules! tool_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs a trace-level message through the re-exported `log` facade.
#[macro_export]
macro_rules! tool_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Installs a stderr logger at `level` with RFC 3339 timestamps.
///
/// Returns `false` when a global logger was already installed; the existing
/// logger is kept.
pub fn init_stderr(level: LevelFilter) -> bool {
    TermLogger::init(level, stderr_config(), TerminalMode::Stderr, ColorChoice::Auto).is_ok()
}

/// Installs a debug logger for tests, or does nothing if one is set.
pub fn initialize_for_tests() {
    let _ = init_stderr(LevelFilter::Debug);
}

fn stderr_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

#[cfg(test)]
mod tests {
    use super::{init_stderr, initialize_for_tests};
    use log::LevelFilter;

    #[test]
    fn second_install_is_refused() {
        initialize_for_tests();
        assert!(!init_stderr(LevelFilter::Trace));
        tool_debug!("still logging through the first logger");
    }
}
