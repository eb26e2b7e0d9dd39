use clap::ValueEnum;
use serde::Serialize;
use anyhow::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Header line plus the converted text
    Pretty,
    /// One JSON document
    Json,
    /// The converted text only
    Minimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub operation: String,
    pub input: String,
    pub output: String,
}

impl ConversionReport {
    pub fn new(operation: &str, input: String, output: String) -> Self {
        Self {
            operation: operation.to_string(),
            input,
            output,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let rendered = match format {
            OutputFormat::Json => serde_json::to_string_pretty(self)?,
            OutputFormat::Minimal => self.output.clone(),
            OutputFormat::Pretty => format!("✨ {}\n{}", self.operation, self.output),
        };
        Ok(rendered)
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
