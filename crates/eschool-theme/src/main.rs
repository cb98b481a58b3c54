//! eschool-theme CLI - check, resolve and export the eSchool theme configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eschool_theme_config::Format;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod watcher;

#[derive(Parser)]
#[command(name = "eschool-theme")]
#[command(about = "Check, resolve and export the eSchool theme configuration")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the theme config file (.toml, .json, .yaml)
    #[arg(short, long, default_value = "theme.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default eSchool theme config
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,

        /// Output format (defaults to the config file extension)
        #[arg(short, long)]
        format: Option<Format>,
    },

    /// Load and validate the config, reporting every problem
    Check,

    /// Print the color for a palette group and shade
    Resolve {
        /// Palette group, e.g. "primary" or "teacher"
        group: String,

        /// Shade key, e.g. "600"
        shade: String,

        /// Print a var() reference instead of the color value
        #[arg(long)]
        var: bool,

        /// Custom property prefix used with --var
        #[arg(long, default_value = "color")]
        prefix: String,
    },

    /// Render the palette as CSS custom properties
    Css {
        /// Custom property prefix
        #[arg(short, long, default_value = "color")]
        prefix: String,

        /// Minify output
        #[arg(long)]
        minify: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List project files matched by the content patterns
    Scan {
        /// Project root (defaults to the config file's directory)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Re-check the config whenever it changes
    Watch,
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

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes, format } => {
            commands::init::run(&cli.config, format, yes).await?;
        }
        Commands::Check => {
            commands::check::run(&cli.config).await?;
        }
        Commands::Resolve {
            group,
            shade,
            var,
            prefix,
        } => {
            let prefix = var.then_some(prefix);
            commands::resolve::run(&cli.config, &group, &shade, prefix.as_deref()).await?;
        }
        Commands::Css {
            prefix,
            minify,
            output,
        } => {
            commands::css::run(&cli.config, prefix, minify, output).await?;
        }
        Commands::Scan { root } => {
            commands::scan::run(&cli.config, root).await?;
        }
        Commands::Watch => {
            commands::watch::run(&cli.config).await?;
        }
    }

    Ok(())
}
