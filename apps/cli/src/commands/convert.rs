use anyhow::Result;
use tracing::info;

use unistyle_types::{StyleError, Transform};
use crate::commands::{build_engine, CommandContext};
use crate::error::CliError;
use crate::input::InputArgs;
use crate::output::ConversionReport;

pub async fn style_command(
    style: Option<String>,
    source: InputArgs,
    ctx: &CommandContext<'_>,
) -> Result<()> {
    let config = ctx.load_config()?;
    let key = style
        .or_else(|| config.default_style.clone())
        .ok_or_else(|| CliError::invalid_args("no style given and no default_style configured"))?;

    let engine = build_engine(&config)?;
    let style = engine
        .registry()
        .get(&key)
        .ok_or_else(|| CliError::from(StyleError::unknown_style(&key)))?;

    info!("Applying style: {}", key);

    let input = source.read().await?;
    let output = engine.apply_map(&input, style.map());
    let label = format!("{} ({})", style.name(), style.category());

    println!("{}", ConversionReport::new(&label, input, output).render(ctx.format)?);
    Ok(())
}

pub async fn transform_command(
    transform: Transform,
    source: InputArgs,
    ctx: &CommandContext<'_>,
) -> Result<()> {
    let config = ctx.load_config()?;
    let engine = build_engine(&config)?;

    info!("Running transform: {}", transform.name());

    let input = source.read().await?;
    let output = engine.transform(&input, transform);

    println!("{}", ConversionReport::new(transform.name(), input, output).render(ctx.format)?);
    Ok(())
}
