//! Minitools CLI: argument parsing, dispatch and logger bootstrap.
mod cli;
mod error;
pub mod logging;
mod run;

pub use cli::{Args, Command};
pub use error::CliError;
pub use run::execute;
