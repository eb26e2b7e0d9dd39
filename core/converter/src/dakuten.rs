pub const COMBINING_DAKUTEN: char = '\u{3099}';
pub const HALFWIDTH_DAKUTEN: char = '\u{FF9E}';

// 改行・空白には付けない
fn takes_mark(c: char) -> bool {
    !matches!(c, ' ' | '\n' | '\r')
}

/// Appends `mark` after every scalar value except spaces and line breaks.
pub fn append_mark(text: &str, mark: char) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        result.push(c);
        if takes_mark(c) {
            result.push(mark);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_combining_dakuten() {
        assert_eq!(append_mark("ABC", COMBINING_DAKUTEN), "A\u{3099}B\u{3099}C\u{3099}");
    }

    #[test]
    fn test_append_skips_space_and_newline() {
        assert_eq!(
            append_mark("AB CD\nE", HALFWIDTH_DAKUTEN),
            "A\u{FF9E}B\u{FF9E} C\u{FF9E}D\u{FF9E}\nE\u{FF9E}"
        );
        assert_eq!(append_mark("a\r\nb", COMBINING_DAKUTEN), "a\u{3099}\r\nb\u{3099}");
    }

    #[test]
    fn test_append_treats_astral_char_as_one() {
        assert_eq!(append_mark("𝐀", COMBINING_DAKUTEN), "𝐀\u{3099}");
    }

    #[test]
    fn test_append_empty() {
        assert_eq!(append_mark("", COMBINING_DAKUTEN), "");
    }
}
