//! Simple one-to-one case mapping.
//!
//! A character whose case mapping expands to more than one scalar (ß → SS,
//! ŉ → ʼN) is left unchanged, so every transform keeps the character count.

fn single<I: Iterator<Item = char>>(mut mapped: I, original: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => c,
        _ => original,
    }
}

pub fn simple_upper(c: char) -> char {
    single(c.to_uppercase(), c)
}

pub fn simple_lower(c: char) -> char {
    single(c.to_lowercase(), c)
}

/// Lowers an uppercase character, uppers a lowercase one, keeps the rest.
pub fn simple_toggle(c: char) -> char {
    let lower = simple_lower(c);
    if lower != c {
        return lower;
    }
    simple_upper(c)
}

pub fn upper_case(text: &str) -> String {
    text.chars().map(simple_upper).collect()
}

pub fn lower_case(text: &str) -> String {
    text.chars().map(simple_lower).collect()
}

pub fn toggle_case(text: &str) -> String {
    text.chars().map(simple_toggle).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_case() {
        assert_eq!(toggle_case("Hello World 123"), "hELLO wORLD 123");
        assert_eq!(toggle_case("Hello\nWorld"), "hELLO\nwORLD");
    }

    #[test]
    fn test_upper_lower() {
        assert_eq!(upper_case("hello\nworld"), "HELLO\nWORLD");
        assert_eq!(lower_case("HELLO"), "hello");
    }

    #[test]
    fn test_expanding_mappings_are_skipped() {
        assert_eq!(upper_case("straße"), "STRAßE");
        assert_eq!(simple_toggle('ß'), 'ß');
    }

    #[test]
    fn test_no_locale_special_casing() {
        assert_eq!(lower_case("I"), "i");
        assert_eq!(upper_case("i"), "I");
    }

    #[test]
    fn test_uncased_characters_unchanged() {
        assert_eq!(toggle_case("123 !? カナ"), "123 !? カナ");
    }
}
