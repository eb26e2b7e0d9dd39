use anyhow::Result;
use tracing::info;

use unistyle_converter::StylePreview;
use crate::commands::{build_engine, CommandContext};
use crate::input::InputArgs;
use crate::output::{print_json, OutputFormat};

pub async fn preview_command(
    changed_only: bool,
    source: InputArgs,
    ctx: &CommandContext<'_>,
) -> Result<()> {
    let config = ctx.load_config()?;
    let engine = build_engine(&config)?;
    let input = source.read().await?;

    let previews: Vec<StylePreview> = engine
        .preview_all(&input)
        .into_iter()
        .filter(|p| !changed_only || p.changed)
        .collect();

    info!("Previewing {} styles", previews.len());

    match ctx.format {
        OutputFormat::Json => print_json(&previews)?,
        OutputFormat::Minimal => {
            for preview in &previews {
                println!("{}", preview.output);
            }
        }
        OutputFormat::Pretty => print_grouped(&previews),
    }

    Ok(())
}

fn print_grouped(previews: &[StylePreview]) {
    let mut current: Option<&str> = None;
    for preview in previews {
        if current != Some(preview.category.as_str()) {
            if current.is_some() {
                println!();
            }
            println!("📚 {}", preview.category);
            current = Some(preview.category.as_str());
        }
        let marker = if preview.changed { " " } else { "·" };
        println!("{} {:<18} {}", marker, preview.name, preview.output);
    }
}
