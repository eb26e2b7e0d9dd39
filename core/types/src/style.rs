use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Serialized form of a single style.
///
/// `from`/`to` are zipped positionally by Unicode scalar value; `map` holds
/// explicit canonical → styled entries and overrides the zipped pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDefinition {
    pub key: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub map: BTreeMap<String, String>,
}

impl StyleDefinition {
    pub fn new(key: &str, name: &str, category: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            from: None,
            to: None,
            map: BTreeMap::new(),
        }
    }

    pub fn with_strings(mut self, from: &str, to: &str) -> Self {
        self.from = Some(from.to_string());
        self.to = Some(to.to_string());
        self
    }

    pub fn with_entry(mut self, canonical: char, styled: &str) -> Self {
        self.map.insert(canonical.to_string(), styled.to_string());
        self
    }
}

/// On-disk catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub styles: Vec<StyleDefinition>,
}
