//! CLI argument parsing using clap v4
//!
//! Defines the command-line interface for medconsult.

use clap::{Parser, Subcommand};

/// medconsult - AI medical consultation assistant
///
/// Sends your question, prefixed with the chosen specialist's system
/// instruction, to a chat-completion endpoint and prints the reply.
#[derive(Parser, Debug)]
#[command(name = "medconsult")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a single question and print the reply
    Ask {
        /// Specialist to consult: surgeon, internist, pediatrician,
        /// orthopedist (Japanese labels also accepted)
        #[arg(short, long, env = "MEDCONSULT_SPECIALIST")]
        specialist: String,

        /// The question. Read from stdin when omitted.
        question: Option<String>,

        /// Path to configuration file
        #[arg(short, long, env = "MEDCONSULT_CONFIG")]
        config: Option<String>,
    },

    /// Start the interactive consultation console
    Console {
        /// Path to configuration file
        #[arg(short, long, env = "MEDCONSULT_CONFIG")]
        config: Option<String>,
    },

    /// Check connectivity to the chat-completion endpoint
    Check {
        /// Path to configuration file
        #[arg(short, long, env = "MEDCONSULT_CONFIG")]
        config: Option<String>,
    },

    /// Specialist table
    Specialist {
        #[command(subcommand)]
        subcommand: SpecialistSubcommand,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Display version and build information
    Version,
}

/// Specialist subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SpecialistSubcommand {
    /// List the four specialists
    List,

    /// Show a specialist's system instruction
    Show {
        /// Specialist: surgeon, internist, pediatrician, orthopedist
        specialist: String,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the current configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}
