use unistyle_types::StyleDefinition;
use crate::character_map::CharacterMap;
use crate::inverse_map::InverseMap;

/// A named style with its forward map and the derived inverse.
#[derive(Debug, Clone)]
pub struct Style {
    key: String,
    name: String,
    category: String,
    map: CharacterMap,
    inverse: InverseMap,
}

impl Style {
    pub fn new(key: &str, name: &str, category: &str, map: CharacterMap) -> Self {
        let inverse = InverseMap::from_map(&map);
        Self {
            key: key.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            map,
            inverse,
        }
    }

    pub fn from_definition(definition: &StyleDefinition) -> Self {
        Self::new(
            &definition.key,
            &definition.name,
            &definition.category,
            CharacterMap::from_definition(definition),
        )
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn map(&self) -> &CharacterMap {
        &self.map
    }

    pub fn inverse(&self) -> &InverseMap {
        &self.inverse
    }

    /// Serializable form, with the map written out as explicit entries.
    pub fn to_definition(&self) -> StyleDefinition {
        self.map.iter().fold(
            StyleDefinition::new(&self.key, &self.name, &self.category),
            |def, (canonical, styled)| def.with_entry(canonical, styled),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builds_inverse() {
        let style = Style::new("bold", "Bold", "Serif", CharacterMap::zip("AB", "𝐀𝐁"));
        assert_eq!(style.key(), "bold");
        assert_eq!(style.map().len(), 2);
        assert_eq!(style.inverse().get("𝐁"), Some('B'));
    }

    #[test]
    fn test_definition_round_trip_keeps_entries() {
        let style = Style::new("caps", "Caps", "Small", CharacterMap::zip("ab", "ᴀʙ"));
        let rebuilt = Style::from_definition(&style.to_definition());
        assert_eq!(rebuilt.map(), style.map());
        assert_eq!(rebuilt.category(), "Small");
    }
}
