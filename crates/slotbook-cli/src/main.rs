//! slotbook CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use slotbook_cli::booker::Booker;
use slotbook_cli::cli::{Cli, Command, ConfigAction};
use slotbook_cli::config::AppConfig;
use slotbook_cli::error::{CliError, CliResult};
use slotbook_cli::render;
use slotbook_core::Scheduler;
use slotbook_extract::OpenAiExtractor;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Run the command
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path).map_err(CliError::Config)?
    } else {
        AppConfig::load().unwrap_or_default()
    };

    match cli.command {
        Command::Add { ref text } => add(&cli, &config, text).await,
        Command::Config { action } => match action {
            ConfigAction::Dump => {
                let dumped = toml::to_string_pretty(&config)
                    .map_err(|e| CliError::Config(format!("failed to serialize config: {}", e)))?;
                print!("{}", dumped);
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", AppConfig::default_path().display());
                Ok(())
            }
        },
    }
}

async fn add(cli: &Cli, config: &AppConfig, requests: &[String]) -> CliResult<()> {
    // Gateway configuration: file settings first, CLI flags override.
    let mut extractor_config = config.llm.to_extractor_config();
    if let Some(ref base_url) = cli.base_url {
        extractor_config = extractor_config.with_base_url(base_url);
    }
    if let Some(ref model) = cli.model {
        extractor_config = extractor_config.with_model(model);
    }
    let extractor = OpenAiExtractor::new(extractor_config)?;

    let slot_minutes = cli.slot_minutes.unwrap_or(config.scheduler.slot_minutes);
    let scheduler =
        Scheduler::new().with_slot_duration(chrono::Duration::minutes(slot_minutes));
    let mut booker = Booker::new(Box::new(extractor), scheduler);

    let allow_plan = config.scheduler.suggest && !cli.no_suggest;

    let mut outcomes = Vec::with_capacity(requests.len());
    for request in requests {
        let outcome = booker.schedule(request, allow_plan).await;
        if !cli.json {
            println!("{}", render::outcome_line(&outcome));
        }
        outcomes.push(outcome);
    }

    if cli.json {
        let payload = serde_json::json!({
            "outcomes": outcomes,
            "agenda": booker.agenda(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("outcome serialization")
        );
    } else {
        println!();
        for line in render::agenda_lines(&booker.agenda(), &config.display.empty_text) {
            println!("{}", line);
        }
    }

    Ok(())
}
