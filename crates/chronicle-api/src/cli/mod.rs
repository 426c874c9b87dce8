//! CLI command definitions for the `chronicle` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod generate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use chronicle_infra::config::DEFAULT_CONFIG_FILE;
use chronicle_types::generation::Category;

/// Generate stories, character backstories and world lore with a remote model.
#[derive(Parser)]
#[command(name = "chronicle", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, env = "CHRONICLE_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on [default: from config, else 5000].
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to [default: from config, else 0.0.0.0].
        #[arg(long)]
        host: Option<String>,
    },

    /// Print the prompt a request body would produce, without calling the model.
    Prompt {
        /// storyline, backstory or lore.
        category: Category,

        /// JSON request body file (reads stdin when omitted).
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Generate content for a request body and print the JSON result.
    Generate {
        /// storyline, backstory or lore.
        category: Category,

        /// JSON request body file (reads stdin when omitted).
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
