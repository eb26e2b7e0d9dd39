pub mod convert;
pub mod styles;
pub mod preview;
pub mod config;

pub use convert::*;
pub use styles::*;
pub use preview::*;
pub use config::*;

use std::sync::Arc;
use anyhow::Result;
use tracing::debug;

use unistyle_converter::ConversionEngine;
use unistyle_registry::StyleRegistry;
use unistyle_types::{Config, StyleError};
use crate::config_manager::ConfigManager;
use crate::error::CliError;
use crate::output::OutputFormat;

pub struct CommandContext<'a> {
    pub config_manager: &'a ConfigManager,
    pub profile: Option<&'a str>,
    pub format: OutputFormat,
}

impl CommandContext<'_> {
    pub fn load_config(&self) -> Result<Config> {
        self.config_manager.load_config(self.profile)
    }
}

/// Builds the registry described by `config` and wraps it in an engine.
pub fn build_engine(config: &Config) -> Result<ConversionEngine> {
    let mut builder = StyleRegistry::builder();
    if config.include_builtin {
        builder = builder.with_builtin();
    }
    for path in &config.catalogs {
        builder = builder
            .with_catalog_file(path)
            .map_err(|e| CliError::config(format!("catalog {}: {}", path.display(), e)))?;
    }

    let registry = builder.build();
    if registry.is_empty() {
        return Err(CliError::from(StyleError::config(
            "no styles available; enable include_builtin or add catalogs",
        ))
        .into());
    }
    debug!("Registry loaded with {} styles", registry.len());

    Ok(ConversionEngine::new(Arc::new(registry), config.normalization.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_build_engine_from_default_config() {
        let engine = build_engine(&Config::default()).unwrap();
        assert!(engine.registry().get("bold").is_some());
    }

    #[test]
    fn test_build_engine_with_catalog_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"styles":[{"key":"caps","name":"Caps","category":"Custom","from":"ab","to":"ᴀʙ"}]}"#,
        )
        .unwrap();

        let config = Config {
            include_builtin: false,
            catalogs: vec![path],
            ..Config::default()
        };
        let engine = build_engine(&config).unwrap();
        assert_eq!(engine.registry().len(), 1);
        assert_eq!(engine.apply_style("abc", "caps").unwrap(), "ᴀʙc");
    }

    #[test]
    fn test_build_engine_missing_catalog() {
        let config = Config {
            catalogs: vec![PathBuf::from("/nonexistent/catalog.json")],
            ..Config::default()
        };
        let err = build_engine(&config).unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::Config { .. })));
    }

    #[test]
    fn test_build_engine_without_styles() {
        let config = Config {
            include_builtin: false,
            ..Config::default()
        };
        let err = build_engine(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Core(StyleError::Config { .. }))
        ));
    }
}
