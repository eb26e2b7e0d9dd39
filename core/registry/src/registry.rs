use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};
use unistyle_types::{CatalogFile, StyleDefinition, StyleError};
use crate::builtin::builtin_styles;
use crate::catalog::load_catalog;
use crate::inverse_map::InverseMap;
use crate::style::Style;

/// Immutable, ordered set of styles.
///
/// Built once and shared; every lookup after construction is read-only.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: Vec<Style>,
    index: HashMap<String, usize>,
    pass_order: Vec<usize>,
}

/// Styles grouped under one category label, in catalog order.
#[derive(Debug, Clone)]
pub struct Category<'a> {
    pub name: &'a str,
    pub styles: Vec<&'a Style>,
}

impl StyleRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn builtin() -> Self {
        RegistryBuilder::new().with_builtin().build()
    }

    pub fn get(&self, key: &str) -> Option<&Style> {
        self.index.get(key).map(|&i| &self.styles[i])
    }

    pub fn require(&self, key: &str) -> Result<&Style, StyleError> {
        self.get(key).ok_or_else(|| StyleError::unknown_style(key))
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn categories(&self) -> Vec<Category<'_>> {
        let mut categories: Vec<Category<'_>> = Vec::new();
        for style in &self.styles {
            match categories.iter_mut().find(|c| c.name == style.category()) {
                Some(category) => category.styles.push(style),
                None => categories.push(Category {
                    name: style.category(),
                    styles: vec![style],
                }),
            }
        }
        categories
    }

    /// Inverse maps in reconstruction order: largest first, catalog order on
    /// ties.
    pub fn inverse_passes(&self) -> impl Iterator<Item = &InverseMap> + '_ {
        self.pass_order.iter().map(move |&i| self.styles[i].inverse())
    }

    pub fn to_catalog(&self) -> CatalogFile {
        CatalogFile {
            styles: self.styles.iter().map(Style::to_definition).collect(),
        }
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    styles: Vec<Style>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin(mut self) -> Self {
        for style in builtin_styles() {
            self.push(style);
        }
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.push(style);
        self
    }

    pub fn with_definitions(mut self, definitions: &[StyleDefinition]) -> Self {
        for definition in definitions {
            self.push(Style::from_definition(definition));
        }
        self
    }

    pub fn with_catalog_file(self, path: &Path) -> Result<Self, StyleError> {
        let catalog = load_catalog(path)?;
        Ok(self.with_definitions(&catalog.styles))
    }

    // 同じキーは後勝ち、位置は最初のものを維持
    fn push(&mut self, style: Style) {
        match self.styles.iter_mut().find(|s| s.key() == style.key()) {
            Some(existing) => {
                warn!("Style '{}' redefined, replacing earlier definition", style.key());
                *existing = style;
            }
            None => self.styles.push(style),
        }
    }

    pub fn build(self) -> StyleRegistry {
        let styles = self.styles;
        let index = styles
            .iter()
            .enumerate()
            .map(|(i, style)| (style.key().to_string(), i))
            .collect();

        // forward map size; sort_by_key is stable, so equal sizes keep catalog order
        let mut pass_order: Vec<usize> = (0..styles.len())
            .filter(|&i| !styles[i].inverse().is_empty())
            .collect();
        pass_order.sort_by_key(|&i| std::cmp::Reverse(styles[i].map().len()));

        debug!(
            "Style registry built: {} styles, {} inverse passes",
            styles.len(),
            pass_order.len()
        );

        StyleRegistry {
            styles,
            index,
            pass_order,
        }
    }
}
