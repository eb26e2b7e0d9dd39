mod commands;
mod config_manager;
mod error;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{info, error};
use anyhow::Result;

use crate::commands::*;
use crate::config_manager::ConfigManager;
use crate::error::{CliError, display_error_with_help};
use crate::input::InputArgs;
use crate::output::OutputFormat;
use unistyle_types::Transform;

#[derive(Parser)]
#[command(name = "unistyle")]
#[command(about = "Convert text to styled Unicode variants and back")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Profile name to use
    #[arg(short, long, global = true)]
    profile: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a style to the input
    Style {
        /// Style key (see `unistyle styles`); falls back to the configured default
        #[arg(short, long)]
        style: Option<String>,

        #[command(flatten)]
        source: InputArgs,
    },

    /// Convert styled text back to plain text
    Plain {
        #[command(flatten)]
        source: InputArgs,
    },

    /// Plain text, upper-cased
    Upper {
        #[command(flatten)]
        source: InputArgs,
    },

    /// Plain text, lower-cased
    Lower {
        #[command(flatten)]
        source: InputArgs,
    },

    /// Plain text with the case of every letter flipped
    Toggle {
        #[command(flatten)]
        source: InputArgs,
    },

    /// Convert between half-width and full-width forms
    Width {
        /// Target width
        #[arg(value_enum)]
        direction: WidthDirection,

        #[command(flatten)]
        source: InputArgs,
    },

    /// Append a dakuten mark to every character
    Dakuten {
        /// Use the half-width mark (U+FF9E) instead of the combining one
        #[arg(long)]
        halfwidth: bool,

        #[command(flatten)]
        source: InputArgs,
    },

    /// List available styles
    Styles {
        /// Only show one category
        #[arg(long)]
        category: Option<String>,
    },

    /// Apply every style to the input
    Preview {
        /// Hide styles that leave the input unchanged
        #[arg(long)]
        changed_only: bool,

        #[command(flatten)]
        source: InputArgs,
    },

    /// Write the active style catalog as JSON
    Export {
        /// Destination file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Manage configuration profiles
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum WidthDirection {
    Full,
    Half,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// List available profiles
    List,

    /// Show profile configuration
    Show {
        /// Profile name
        profile: String,
    },

    /// Create new profile
    Create {
        /// Profile name
        profile: String,

        /// Copy from existing profile
        #[arg(long)]
        from: Option<String>,
    },

    /// Delete profile
    Delete {
        /// Profile name
        profile: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    info!("unistyle v{} starting", env!("CARGO_PKG_VERSION"));

    let config_manager = ConfigManager::new(cli.config.clone())?;
    let ctx = CommandContext {
        config_manager: &config_manager,
        profile: cli.profile.as_deref(),
        format: cli.output,
    };

    let result = match cli.command {
        Commands::Style { style, source } => style_command(style, source, &ctx).await,
        Commands::Plain { source } => transform_command(Transform::Plain, source, &ctx).await,
        Commands::Upper { source } => transform_command(Transform::Upper, source, &ctx).await,
        Commands::Lower { source } => transform_command(Transform::Lower, source, &ctx).await,
        Commands::Toggle { source } => transform_command(Transform::Toggle, source, &ctx).await,
        Commands::Width { direction, source } => {
            let transform = match direction {
                WidthDirection::Full => Transform::FullWidth,
                WidthDirection::Half => Transform::HalfWidth,
            };
            transform_command(transform, source, &ctx).await
        }
        Commands::Dakuten { halfwidth, source } => {
            let transform = if halfwidth {
                Transform::HalfwidthDakuten
            } else {
                Transform::CombiningDakuten
            };
            transform_command(transform, source, &ctx).await
        }
        Commands::Styles { category } => styles_command(category, &ctx).await,
        Commands::Preview { changed_only, source } => preview_command(changed_only, source, &ctx).await,
        Commands::Export { file } => export_command(file, &ctx).await,
        Commands::Config { action } => config_command(action, &config_manager).await,
    };

    match result {
        Ok(_) => {
            info!("Command completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            let code = match e.downcast_ref::<CliError>() {
                Some(cli_error) => {
                    display_error_with_help(cli_error);
                    cli_error.error_code()
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    1
                }
            };
            std::process::exit(code);
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(format!(
                        "unistyle_cli={level},unistyle_registry={level},unistyle_converter={level}",
                        level = log_level
                    ))
                })
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}
