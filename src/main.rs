//! medconsult - AI medical consultation assistant
//!
//! This is the main entry point for the medconsult binary. It forwards a
//! user's question, prefixed with the chosen specialist's fixed system
//! instruction, to a chat-completion endpoint and prints the reply.

mod cli;
mod client;
mod config;
mod console;
mod consultation;
mod error;
mod logging;
mod specialist;
mod version;

use std::io::Read;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Commands, ConfigSubcommand, SpecialistSubcommand};
use crate::client::{OpenAiClient, SharedClient};
use crate::config::AppConfig;
use crate::consultation::Consultant;
use crate::error::{Error, Result};
use crate::specialist::{list_specialists, Specialist};

fn main() {
    // Pick up OPENAI_API_KEY from a local .env file, if present
    dotenv::dotenv().ok();

    if let Err(e) = run() {
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments first (before logging, so we know verbosity)
    let cli = Cli::parse();

    // Commands that don't need configuration use minimal logging
    match &cli.command {
        Commands::Version => {
            version::print_version();
            return Ok(());
        }
        Commands::Config { subcommand } => {
            logging::init_simple(tracing::Level::WARN)?;
            return handle_config_command(subcommand.clone());
        }
        Commands::Specialist { subcommand } => {
            logging::init_simple(tracing::Level::WARN)?;
            return handle_specialist_command(subcommand.clone());
        }
        _ => {}
    }

    // Load configuration for ask/console/check
    let config_path = match &cli.command {
        Commands::Ask { config, .. } | Commands::Console { config } | Commands::Check { config } => {
            config.clone()
        }
        _ => None,
    };
    let config = AppConfig::load(config_path.as_deref())?;

    // Initialize logging with config settings.
    // The guards must be kept alive for the lifetime of the program.
    let _log_guards = logging::init_logging(&config.logging, cli.verbose, cli.quiet)?;

    let build = version::build_info();
    debug!(
        version = %build.full_version(),
        base_url = %config.api.base_url,
        "Starting medconsult"
    );

    // One blocking call per user action: a current-thread runtime is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Internal(format!("Failed to create async runtime: {}", e)))?;

    let client: SharedClient = Arc::new(OpenAiClient::new(
        config.api.base_url.clone(),
        config.api.api_key.clone(),
    ));

    match cli.command {
        Commands::Ask {
            specialist,
            question,
            ..
        } => {
            let specialist: Specialist = specialist.parse()?;
            let question = match question {
                Some(q) => q,
                None => read_question_from_stdin()?,
            };

            let consultant = Consultant::new(client);
            let reply = runtime.block_on(consultant.consult(specialist, &question))?;
            println!("{}", reply);
        }
        Commands::Console { .. } => {
            let consultant = Consultant::new(client);
            runtime.block_on(console::run_console(&consultant))?;
        }
        Commands::Check { .. } => {
            run_check(&runtime, &client, &config)?;
        }
        Commands::Version | Commands::Config { .. } | Commands::Specialist { .. } => {
            // Already handled above
            unreachable!();
        }
    }

    Ok(())
}

/// Read the question from stdin when it was not passed as an argument
fn read_question_from_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Check connectivity to the chat-completion endpoint
fn run_check(
    runtime: &tokio::runtime::Runtime,
    client: &SharedClient,
    config: &AppConfig,
) -> Result<()> {
    let health = runtime.block_on(client.health_check())?;

    if health.operational {
        println!("Endpoint is reachable: {}", config.api.base_url);
        Ok(())
    } else {
        Err(Error::remote_call(
            health
                .error
                .unwrap_or_else(|| "endpoint not operational".to_string()),
        ))
    }
}

/// Handle specialist subcommands
fn handle_specialist_command(subcommand: SpecialistSubcommand) -> Result<()> {
    match subcommand {
        SpecialistSubcommand::List => {
            println!("Available specialists:");
            println!();
            for listing in list_specialists() {
                println!(
                    "  {:<14} {}  {}",
                    listing.slug, listing.label, listing.description
                );
            }
        }
        SpecialistSubcommand::Show { specialist } => {
            let specialist: Specialist = specialist.parse()?;
            println!("{} ({})", specialist.label(), specialist.slug());
            println!();
            println!("{}", specialist.instruction());
        }
    }

    Ok(())
}

/// Handle configuration subcommands
fn handle_config_command(subcommand: ConfigSubcommand) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show { config } => {
            let cfg = AppConfig::load(config.as_deref())?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            config::init_config(path.as_deref(), force)?;
        }
        ConfigSubcommand::Validate { config } => {
            AppConfig::load(config.as_deref())?;
            println!("Configuration is valid.");
        }
    }

    Ok(())
}
