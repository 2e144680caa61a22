//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// slotbook - Book free-text requests into your calendar
#[derive(Debug, Parser)]
#[command(name = "slotbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "SLOTBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Output outcomes and the agenda as JSON
    #[arg(long)]
    pub json: bool,

    /// Reject colliding requests without searching for an alternative slot
    #[arg(long)]
    pub no_suggest: bool,

    /// Uniform slot duration in minutes
    #[arg(long)]
    pub slot_minutes: Option<i64>,

    /// Extraction model identifier override
    #[arg(long)]
    pub model: Option<String>,

    /// Chat-completions base URL override
    #[arg(long)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Schedule one or more free-text requests, then print the agenda
    Add {
        /// Request texts, processed in order
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Dump,
    /// Print the configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_flags() {
        let cli = Cli::parse_from([
            "slotbook",
            "--no-suggest",
            "--slot-minutes",
            "30",
            "add",
            "Dinner with Emma on 2025-09-20 20:00",
        ]);

        assert!(cli.no_suggest);
        assert_eq!(cli.slot_minutes, Some(30));
        match cli.command {
            Command::Add { text } => assert_eq!(text.len(), 1),
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn add_requires_text() {
        assert!(Cli::try_parse_from(["slotbook", "add"]).is_err());
    }

    #[test]
    fn parses_config_subcommands() {
        let cli = Cli::parse_from(["slotbook", "config", "path"]);
        assert!(matches!(
            cli.command,
            Command::Config {
                action: ConfigAction::Path
            }
        ));
    }
}
