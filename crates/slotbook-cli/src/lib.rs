//! CLI: argument parsing, configuration, booking orchestration, output rendering
//!
//! This crate provides the `slotbook` command-line interface.

pub mod booker;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;

pub use booker::Booker;
pub use cli::Cli;
pub use error::{CliError, CliResult};
