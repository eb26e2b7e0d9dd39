use std::collections::{HashMap, HashSet};
use aho_corasick::{AhoCorasick, MatchKind};
use tracing::warn;
use unicode_normalization::UnicodeNormalization;
use crate::character_map::CharacterMap;

/// Styled string → canonical character for one style.
///
/// Keys are the styled string and its NFKC form. A key equal to the canonical
/// character, or made only of ASCII, is never stored: replacing it would
/// rewrite ordinary text. When two canonical characters share a styled form the
/// first one in map order wins.
#[derive(Debug, Clone)]
pub struct InverseMap {
    patterns: Vec<String>,
    replacements: Vec<String>,
    lookup: HashMap<String, char>,
    max_key_chars: usize,
    searcher: Option<AhoCorasick>,
}

impl InverseMap {
    pub fn from_map(map: &CharacterMap) -> Self {
        let mut patterns = Vec::new();
        let mut replacements = Vec::new();
        let mut lookup = HashMap::new();
        let mut seen = HashSet::new();

        for (canonical, styled) in map.iter() {
            let canonical_str = canonical.to_string();
            let normalized: String = styled.nfkc().collect();
            for key in [styled.to_string(), normalized] {
                if key.is_empty() || key == canonical_str || key.is_ascii() {
                    continue;
                }
                if !seen.insert(key.clone()) {
                    continue;
                }
                lookup.insert(key.clone(), canonical);
                patterns.push(key);
                replacements.push(canonical_str.clone());
            }
        }

        let max_key_chars = patterns.iter().map(|p| p.chars().count()).max().unwrap_or(0);

        let searcher = if patterns.is_empty() {
            None
        } else {
            match AhoCorasick::builder()
                .match_kind(MatchKind::LeftmostLongest)
                .build(&patterns)
            {
                Ok(searcher) => Some(searcher),
                Err(e) => {
                    warn!("Failed to build inverse automaton, using scalar lookup: {}", e);
                    None
                }
            }
        };

        Self {
            patterns,
            replacements,
            lookup,
            max_key_chars,
            searcher,
        }
    }

    /// Number of distinct styled keys.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, styled: &str) -> Option<char> {
        self.lookup.get(styled).copied()
    }

    /// Replaces every styled key in `text`, leftmost-longest, in one pass.
    pub fn apply(&self, text: &str) -> String {
        if self.is_empty() || text.is_empty() {
            return text.to_string();
        }
        match &self.searcher {
            Some(searcher) => searcher.replace_all(text, self.replacements.as_slice()),
            None => self.apply_by_lookup(text),
        }
    }

    fn apply_by_lookup(&self, text: &str) -> String {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut result = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            let start = chars[i].0;
            let mut matched = None;
            let longest = self.max_key_chars.min(chars.len() - i);
            for width in (1..=longest).rev() {
                let end = chars.get(i + width).map(|(pos, _)| *pos).unwrap_or(text.len());
                if let Some(canonical) = self.lookup.get(&text[start..end]) {
                    matched = Some((width, *canonical));
                    break;
                }
            }
            match matched {
                Some((width, canonical)) => {
                    result.push(canonical);
                    i += width;
                }
                None => {
                    result.push(chars[i].1);
                    i += 1;
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_of_bold() {
        let map = CharacterMap::zip("Hi", "𝐇𝐢");
        let inverse = InverseMap::from_map(&map);
        assert_eq!(inverse.get("𝐇"), Some('H'));
        assert_eq!(inverse.apply("𝐇𝐢 there"), "Hi there");
    }

    #[test]
    fn test_ascii_keys_are_dropped() {
        // 𝐇 normalizes to H; "H" → 'H' would be a no-op and "(a)" would
        // rewrite plain parentheses
        let map: CharacterMap = vec![('H', "𝐇"), ('a', "⒜")].into_iter().collect();
        let inverse = InverseMap::from_map(&map);
        assert_eq!(inverse.get("H"), None);
        assert_eq!(inverse.get("(a)"), None);
        assert_eq!(inverse.get("⒜"), Some('a'));
        assert_eq!(inverse.apply("(a) ⒜"), "(a) a");
    }

    #[test]
    fn test_first_canonical_wins_on_collision() {
        let map: CharacterMap = vec![('A', "ᴀ"), ('a', "ᴀ")].into_iter().collect();
        let inverse = InverseMap::from_map(&map);
        assert_eq!(inverse.len(), 1);
        assert_eq!(inverse.get("ᴀ"), Some('A'));
    }

    #[test]
    fn test_longest_key_wins() {
        let map: CharacterMap = vec![('カ', "ｶ"), ('ガ', "ｶﾞ")].into_iter().collect();
        let inverse = InverseMap::from_map(&map);
        assert_eq!(inverse.apply("ｶﾞｶ"), "ガカ");
    }

    #[test]
    fn test_lookup_fallback_matches_automaton() {
        let map: CharacterMap = vec![('カ', "ｶ"), ('ガ', "ｶﾞ"), ('x', "ˣ")].into_iter().collect();
        let inverse = InverseMap::from_map(&map);
        let input = "ｶﾞｶ ˣ ｶ";
        assert_eq!(inverse.apply_by_lookup(input), inverse.apply(input));
    }

    #[test]
    fn test_empty_map_is_identity() {
        let inverse = InverseMap::from_map(&CharacterMap::new());
        assert!(inverse.is_empty());
        assert_eq!(inverse.apply("abc"), "abc");
    }
}
