use std::collections::HashMap;
use tracing::warn;
use unistyle_types::StyleDefinition;

/// Canonical character → styled string, in insertion order.
///
/// Empty styled values are never stored; a missing entry means identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterMap {
    entries: HashMap<char, String>,
    order: Vec<char>,
}

impl CharacterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when `styled` is empty and nothing was stored.
    /// Re-inserting a key replaces the value and keeps its position.
    pub fn insert(&mut self, canonical: char, styled: &str) -> bool {
        if styled.is_empty() {
            return false;
        }
        if self.entries.insert(canonical, styled.to_string()).is_none() {
            self.order.push(canonical);
        }
        true
    }

    /// Positional pairing of two strings by scalar value. Excess on either
    /// side is ignored.
    pub fn zip(from: &str, to: &str) -> Self {
        let mut map = Self::new();
        for (canonical, styled) in from.chars().zip(to.chars()) {
            let mut buf = [0u8; 4];
            map.insert(canonical, styled.encode_utf8(&mut buf));
        }
        map
    }

    /// Offset-based mapping for contiguous alphabets such as the
    /// mathematical alphanumeric blocks.
    pub fn insert_range(&mut self, first: char, last: char, styled_first: u32) {
        for canonical in first..=last {
            let offset = canonical as u32 - first as u32;
            if let Some(styled) = char::from_u32(styled_first + offset) {
                let mut buf = [0u8; 4];
                self.insert(canonical, styled.encode_utf8(&mut buf));
            }
        }
    }

    pub fn from_definition(definition: &StyleDefinition) -> Self {
        let mut map = match (&definition.from, &definition.to) {
            (Some(from), Some(to)) => {
                let (from_len, to_len) = (from.chars().count(), to.chars().count());
                if from_len != to_len {
                    warn!(
                        "Style '{}': from/to lengths differ ({} vs {}), truncating to {}",
                        definition.key,
                        from_len,
                        to_len,
                        from_len.min(to_len)
                    );
                }
                Self::zip(from, to)
            }
            (Some(_), None) | (None, Some(_)) => {
                warn!("Style '{}': only one of from/to given, ignoring both", definition.key);
                Self::new()
            }
            (None, None) => Self::new(),
        };

        for (canonical, styled) in &definition.map {
            let mut chars = canonical.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    if !map.insert(c, styled) {
                        warn!("Style '{}': empty mapping for '{}' skipped", definition.key, c);
                    }
                }
                _ => warn!(
                    "Style '{}': key '{}' is not a single character, skipped",
                    definition.key, canonical
                ),
            }
        }

        map
    }

    pub fn get(&self, canonical: char) -> Option<&str> {
        self.entries.get(&canonical).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.order
            .iter()
            .filter_map(move |c| self.entries.get(c).map(|s| (*c, s.as_str())))
    }
}

impl<S: AsRef<str>> FromIterator<(char, S)> for CharacterMap {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (canonical, styled) in iter {
            map.insert(canonical, styled.as_ref());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_truncates_to_shorter() {
        let map = CharacterMap::zip("ABCD", "𝐀𝐁");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get('A'), Some("𝐀"));
        assert_eq!(map.get('B'), Some("𝐁"));
        assert_eq!(map.get('C'), None);
    }

    #[test]
    fn test_zip_counts_scalars_not_code_units() {
        // 𝟏 is outside the BMP
        let map = CharacterMap::zip("12", "𝟏𝟐");
        assert_eq!(map.get('1'), Some("𝟏"));
        assert_eq!(map.get('2'), Some("𝟐"));
    }

    #[test]
    fn test_empty_value_is_not_stored() {
        let mut map = CharacterMap::new();
        assert!(!map.insert('a', ""));
        assert!(map.is_empty());
        assert_eq!(map.get('a'), None);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = CharacterMap::new();
        map.insert('a', "x");
        map.insert('b', "y");
        map.insert('a', "z");
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, vec![('a', "z"), ('b', "y")]);
    }

    #[test]
    fn test_insert_range() {
        let mut map = CharacterMap::new();
        map.insert_range('A', 'Z', 0x1D400);
        assert_eq!(map.len(), 26);
        assert_eq!(map.get('A'), Some("𝐀"));
        assert_eq!(map.get('Z'), Some("𝐙"));
    }

    #[test]
    fn test_from_definition_map_overrides_zip() {
        let def = StyleDefinition::new("t", "T", "Test")
            .with_strings("ab", "xy")
            .with_entry('a', "ᴀ");
        let map = CharacterMap::from_definition(&def);
        assert_eq!(map.get('a'), Some("ᴀ"));
        assert_eq!(map.get('b'), Some("y"));
    }

    #[test]
    fn test_from_definition_skips_bad_keys() {
        let mut def = StyleDefinition::new("t", "T", "Test");
        def.map.insert("ab".to_string(), "x".to_string());
        def.map.insert("c".to_string(), String::new());
        let map = CharacterMap::from_definition(&def);
        assert!(map.is_empty());
    }

    #[test]
    fn test_multi_scalar_value() {
        let map: CharacterMap = vec![('ガ', "ｶﾞ")].into_iter().collect();
        assert_eq!(map.get('ガ'), Some("ｶﾞ"));
    }
}
