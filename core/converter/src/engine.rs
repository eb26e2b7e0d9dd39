use std::sync::Arc;
use serde::Serialize;
use tracing::debug;
use unistyle_registry::{CharacterMap, StyleRegistry};
use unistyle_types::{NormalizationOptions, StyleError, Transform};
use crate::case::{lower_case, toggle_case, upper_case};
use crate::dakuten::{append_mark, COMBINING_DAKUTEN, HALFWIDTH_DAKUTEN};
use crate::normalizer::TextNormalizer;
use crate::width::{to_full_width, to_half_width};

/// Output of one style applied to a preview input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylePreview {
    pub key: String,
    pub name: String,
    pub category: String,
    pub output: String,
    pub changed: bool,
}

/// Stateless text conversion over an explicitly supplied registry.
///
/// Every method is a total function of its input; the engine holds no
/// mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct ConversionEngine {
    registry: Arc<StyleRegistry>,
    normalizer: TextNormalizer,
}

impl ConversionEngine {
    pub fn new(registry: Arc<StyleRegistry>, options: NormalizationOptions) -> Self {
        debug!(
            "Conversion engine ready: {} styles, normalization {:?}",
            registry.len(),
            options
        );
        Self {
            registry,
            normalizer: TextNormalizer::new(options),
        }
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Substitutes each scalar value through `map`, keeping unmapped ones.
    pub fn apply_map(&self, input: &str, map: &CharacterMap) -> String {
        let normalized = self.normalizer.normalize(input);
        let mut result = String::with_capacity(normalized.len() * 4);
        for c in normalized.chars() {
            match map.get(c) {
                Some(styled) => result.push_str(styled),
                None => result.push(c),
            }
        }
        result
    }

    pub fn apply_style(&self, input: &str, key: &str) -> Result<String, StyleError> {
        let style = self.registry.require(key)?;
        Ok(self.apply_map(input, style.map()))
    }

    /// Undoes every registered style.
    ///
    /// Inverse maps run in a fixed order, largest first, each as a single
    /// leftmost-longest pass over the running result. No backtracking.
    ///
    /// The passes run over the raw input first: NFKC folds some styled forms
    /// (⒜, 🄐, ⑴) into ASCII sequences that no inverse key can claim. When
    /// normalization changes the restored text the passes run once more.
    pub fn to_plain_text(&self, input: &str) -> String {
        let restored = self.run_inverse_passes(input.to_string());
        let normalized = self.normalizer.normalize(&restored);
        let restored = if normalized == restored {
            restored
        } else {
            self.run_inverse_passes(normalized)
        };
        self.normalizer.strip_detached_marks(&restored)
    }

    fn run_inverse_passes(&self, text: String) -> String {
        self.registry
            .inverse_passes()
            .fold(text, |text, inverse| inverse.apply(&text))
    }

    pub fn full_width(&self, input: &str) -> String {
        to_full_width(&self.normalizer.normalize(input))
    }

    pub fn half_width(&self, input: &str) -> String {
        to_half_width(&self.normalizer.normalize(input))
    }

    pub fn add_combining_dakuten_to_all(&self, input: &str) -> String {
        append_mark(&self.normalizer.normalize(input), COMBINING_DAKUTEN)
    }

    pub fn add_halfwidth_dakuten_to_all(&self, input: &str) -> String {
        append_mark(&self.normalizer.normalize(input), HALFWIDTH_DAKUTEN)
    }

    pub fn to_upper_case(&self, input: &str) -> String {
        upper_case(&self.to_plain_text(input))
    }

    pub fn to_lower_case(&self, input: &str) -> String {
        lower_case(&self.to_plain_text(input))
    }

    pub fn toggle_case(&self, input: &str) -> String {
        toggle_case(&self.to_plain_text(input))
    }

    pub fn transform(&self, input: &str, transform: Transform) -> String {
        match transform {
            Transform::Plain => self.to_plain_text(input),
            Transform::FullWidth => self.full_width(input),
            Transform::HalfWidth => self.half_width(input),
            Transform::CombiningDakuten => self.add_combining_dakuten_to_all(input),
            Transform::HalfwidthDakuten => self.add_halfwidth_dakuten_to_all(input),
            Transform::Upper => self.to_upper_case(input),
            Transform::Lower => self.to_lower_case(input),
            Transform::Toggle => self.toggle_case(input),
        }
    }

    /// Every registered style applied to `input`, in catalog order.
    ///
    /// `changed` compares against the normalized input, so a style that maps
    /// nothing is unchanged even when normalization rewrote the text.
    pub fn preview_all(&self, input: &str) -> Vec<StylePreview> {
        let baseline = self.normalizer.normalize(input);
        self.registry
            .styles()
            .iter()
            .map(|style| {
                let output = self.apply_map(&baseline, style.map());
                StylePreview {
                    key: style.key().to_string(),
                    name: style.name().to_string(),
                    category: style.category().to_string(),
                    changed: output != baseline,
                    output,
                }
            })
            .collect()
    }
}
