//! Folio CLI - XML-content portfolio site generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "XML-content portfolio site generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new site in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Build the static site
    Build {
        /// Output directory (defaults to config or "_site")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip CSS minification
        #[arg(long)]
        no_minify: bool,
    },

    /// Serve a built site plus the style-check API
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory to serve (defaults to the build output)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Build, serve, and rebuild on content changes
    Dev {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes).await?;
        }
        Commands::Build { output, no_minify } => {
            commands::build::run(&cli.config, output, no_minify).await?;
        }
        Commands::Serve { port, dir } => {
            commands::serve::run(&cli.config, port, dir).await?;
        }
        Commands::Dev { port, no_open } => {
            commands::dev::run(&cli.config, port, !no_open).await?;
        }
    }

    Ok(())
}
