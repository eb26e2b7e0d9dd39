use unicode_normalization::{is_nfkc, UnicodeNormalization};
use unistyle_types::NormalizationOptions;

#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    options: NormalizationOptions,
}

impl TextNormalizer {
    pub fn new(options: NormalizationOptions) -> Self {
        Self { options }
    }

    /// NFKC, unless disabled in the options.
    pub fn normalize(&self, text: &str) -> String {
        if self.options.normalize_unicode && !is_nfkc(text) {
            text.nfkc().collect()
        } else {
            text.to_string()
        }
    }

    /// Recomposes `text` and removes combining marks that did not compose
    /// with their base.
    ///
    /// A mark with a precomposed partner (ガ = カ + U+3099, é = e + U+0301)
    /// survives inside the composed character; only detached marks are
    /// dropped, and only when `strip_detached_marks` is set.
    pub fn strip_detached_marks(&self, text: &str) -> String {
        let recomposed = self.normalize(text);
        if !self.options.strip_detached_marks {
            return recomposed;
        }
        recomposed.chars().filter(|&c| !is_detached_mark(c)).collect()
    }
}

/// Mark ranges removed by plain-text reconstruction.
pub fn is_detached_mark(c: char) -> bool {
    matches!(c as u32,
        0x0300..=0x036F | // Combining Diacritical Marks
        0x1AB0..=0x1AFF | // Combining Diacritical Marks Extended
        0x1DC0..=0x1DFF | // Combining Diacritical Marks Supplement
        0x20D0..=0x20FF | // Combining Diacritical Marks for Symbols
        0xFE20..=0xFE2F | // Combining Half Marks
        0x3099..=0x309A | // 結合用濁点・半濁点
        0xFF9E..=0xFF9F   // 半角濁点・半濁点
    )
}
