use std::fs;
use std::path::Path;
use tracing::{debug, info};
use unistyle_types::{CatalogFile, StyleError};
use crate::character_map::CharacterMap;

pub fn load_catalog(path: &Path) -> Result<CatalogFile, StyleError> {
    debug!("Loading style catalog from: {}", path.display());

    let content = fs::read_to_string(path)?;
    let catalog: CatalogFile = serde_json::from_str(&content)
        .map_err(|e| StyleError::catalog(path.to_path_buf(), e.to_string()))?;

    for style in &catalog.styles {
        if style.key.trim().is_empty() {
            return Err(StyleError::catalog(path.to_path_buf(), "style with empty key"));
        }
    }

    info!("Loaded {} styles from {}", catalog.styles.len(), path.display());
    Ok(catalog)
}

pub fn save_catalog(path: &Path, catalog: &CatalogFile) -> Result<(), StyleError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    debug!("Catalog saved to: {}", path.display());
    Ok(())
}

/// Styled forms of `A-Z`, `a-z` and `0-9`, one group each, joined by a space.
/// Empty groups are omitted.
pub fn format_character_set(map: &CharacterMap) -> String {
    let group = |first: char, last: char| -> String {
        (first..=last).filter_map(|c| map.get(c)).collect()
    };

    [group('A', 'Z'), group('a', 'z'), group('0', '9')]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
