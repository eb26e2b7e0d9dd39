use std::path::PathBuf;
use anyhow::Result;
use serde::Serialize;
use tracing::info;

use unistyle_registry::{format_character_set, save_catalog};
use crate::commands::{build_engine, CommandContext};
use crate::error::CliError;
use crate::output::{print_json, OutputFormat};

#[derive(Debug, Serialize)]
struct StyleSummary<'a> {
    key: &'a str,
    name: &'a str,
    category: &'a str,
    sample: String,
}

pub async fn styles_command(category: Option<String>, ctx: &CommandContext<'_>) -> Result<()> {
    let config = ctx.load_config()?;
    let engine = build_engine(&config)?;
    let registry = engine.registry();

    let categories: Vec<_> = registry
        .categories()
        .into_iter()
        .filter(|c| category.as_deref().map_or(true, |wanted| c.name == wanted))
        .collect();

    if let Some(wanted) = &category {
        if categories.is_empty() {
            return Err(CliError::invalid_args(format!("unknown category '{}'", wanted)).into());
        }
    }

    info!("Listing {} categories", categories.len());

    match ctx.format {
        OutputFormat::Json => {
            let summaries: Vec<StyleSummary> = categories
                .iter()
                .flat_map(|c| c.styles.iter())
                .map(|style| StyleSummary {
                    key: style.key(),
                    name: style.name(),
                    category: style.category(),
                    sample: format_character_set(style.map()),
                })
                .collect();
            print_json(&summaries)?;
        }
        OutputFormat::Minimal => {
            for style in categories.iter().flat_map(|c| c.styles.iter()) {
                println!("{}", style.key());
            }
        }
        OutputFormat::Pretty => {
            for category in &categories {
                println!("📚 {}", category.name);
                for style in &category.styles {
                    println!("  {:<18} {}", style.key(), style.name());
                    let sample = format_character_set(style.map());
                    if !sample.is_empty() {
                        println!("  {:<18} {}", "", sample);
                    }
                }
                println!();
            }
        }
    }

    Ok(())
}

pub async fn export_command(file: Option<PathBuf>, ctx: &CommandContext<'_>) -> Result<()> {
    let config = ctx.load_config()?;
    let engine = build_engine(&config)?;
    let catalog = engine.registry().to_catalog();

    match file {
        Some(path) => {
            save_catalog(&path, &catalog).map_err(CliError::from)?;
            info!("Exported {} styles to {}", catalog.styles.len(), path.display());
            if ctx.format != OutputFormat::Minimal {
                println!("💾 Exported {} styles to {}", catalog.styles.len(), path.display());
            }
        }
        None => print_json(&catalog)?,
    }

    Ok(())
}
