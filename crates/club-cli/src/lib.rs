//! club-cli library
//!
//! Exposes the command runner so it can be exercised without a terminal.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliErrorResult};

#[cfg(test)]
mod tests;
