use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationOptions {
    /// NFKC before every transform.
    pub normalize_unicode: bool,
    /// Drop combining marks left over after plain-text reconstruction.
    pub strip_detached_marks: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            strip_detached_marks: true,
        }
    }
}

/// Transforms that do not take a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    Plain,
    FullWidth,
    HalfWidth,
    CombiningDakuten,
    HalfwidthDakuten,
    Upper,
    Lower,
    Toggle,
}

impl Transform {
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Plain => "plain",
            Transform::FullWidth => "full_width",
            Transform::HalfWidth => "half_width",
            Transform::CombiningDakuten => "combining_dakuten",
            Transform::HalfwidthDakuten => "halfwidth_dakuten",
            Transform::Upper => "upper",
            Transform::Lower => "lower",
            Transform::Toggle => "toggle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = NormalizationOptions::default();
        assert!(options.normalize_unicode);
        assert!(options.strip_detached_marks);
    }

    #[test]
    fn test_transform_serde_name_matches() {
        let json = serde_json::to_string(&Transform::HalfwidthDakuten).unwrap();
        assert_eq!(json, format!("\"{}\"", Transform::HalfwidthDakuten.name()));
    }
}
