//! dash-cli library
//!
//! Command definitions, the command runner and the logger, exported so the
//! binary and the integration tests share them.

pub mod cli;
pub mod comment_commands;
pub mod commands;
pub(crate) mod error;
pub mod logger;
pub mod profile_commands;
pub(crate) mod runner;
pub mod theme_commands;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliErrorResult};
pub use runner::execute;
