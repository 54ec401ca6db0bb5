//! colorpage-cli - Convert photos into printable coloring pages
//!
//! Command-line front end for a coloring-page conversion server.

mod commands;
mod config;
mod output;
mod view;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colorpage_client::{ConvertClient, Outcome};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::output::OutputContext;

#[derive(Parser)]
#[command(name = "colorpage-cli")]
#[command(author, version, about = "Coloring page conversion CLI")]
#[command(propagate_version = true)]
struct Cli {
    /// Server URL
    #[arg(
        short,
        long,
        env = "COLORPAGE_SERVER",
        default_value = "http://localhost:5000"
    )]
    server: String,

    /// Configuration file path
    #[arg(short, long, env = "COLORPAGE_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Minimal output (for scripting)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image and save the returned coloring page
    Convert {
        /// Image file to convert
        image: PathBuf,

        /// Directory the coloring page is written to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    // Load config file
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load().unwrap_or_default()
    };

    // Merge CLI args with config
    let merged = config.merge_with_args(Some(&cli.server), cli.no_color);

    // Create output context
    let ctx = OutputContext::new(merged.no_color, cli.quiet);

    // Execute command
    match &cli.command {
        Commands::Convert { image, output } => {
            let client = create_client(&merged.server)?;
            let output_dir = output
                .clone()
                .or_else(|| merged.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));

            let outcome = commands::convert(&client, image, &output_dir, &ctx).await;

            Ok(match outcome {
                Outcome::Converted => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            })
        }
    }
}

/// Create a conversion client for the given server URL
fn create_client(server: &str) -> Result<ConvertClient> {
    ConvertClient::new(server).context("Failed to create conversion client")
}
