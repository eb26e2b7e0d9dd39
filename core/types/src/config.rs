use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::options::NormalizationOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub include_builtin: bool,
    pub catalogs: Vec<PathBuf>,
    pub default_style: Option<String>,
    pub normalization: NormalizationOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_builtin: true,
            catalogs: vec![],
            default_style: Some("bold".to_string()),
            normalization: NormalizationOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"catalogs":["extra.json"]}"#).unwrap();
        assert!(config.include_builtin);
        assert_eq!(config.catalogs, vec![PathBuf::from("extra.json")]);
        assert_eq!(config.default_style.as_deref(), Some("bold"));
        assert_eq!(config.normalization, NormalizationOptions::default());
    }
}
