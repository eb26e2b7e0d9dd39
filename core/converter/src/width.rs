use std::collections::HashMap;
use std::sync::OnceLock;

const HALF_GRAPHICAL_BEGIN: u32 = '!' as u32;
const HALF_GRAPHICAL_END: u32 = '~' as u32;
const FULL_GRAPHICAL_BEGIN: u32 = '！' as u32;
const FULL_GRAPHICAL_END: u32 = '～' as u32;
const HALF_FULL_GRAPHICAL_DIFF: u32 = 0xFEE0;
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// 全角 → 半角. Entries outside the uniform ASCII offset.
const KANA_WIDTH: &[(char, &str)] = &[
    ('。', "｡"), ('「', "｢"), ('」', "｣"), ('、', "､"), ('・', "･"),
    ('ヲ', "ｦ"), ('ァ', "ｧ"), ('ィ', "ｨ"), ('ゥ', "ｩ"), ('ェ', "ｪ"), ('ォ', "ｫ"),
    ('ャ', "ｬ"), ('ュ', "ｭ"), ('ョ', "ｮ"), ('ッ', "ｯ"), ('ー', "ｰ"),
    ('ア', "ｱ"), ('イ', "ｲ"), ('ウ', "ｳ"), ('エ', "ｴ"), ('オ', "ｵ"),
    ('カ', "ｶ"), ('キ', "ｷ"), ('ク', "ｸ"), ('ケ', "ｹ"), ('コ', "ｺ"),
    ('サ', "ｻ"), ('シ', "ｼ"), ('ス', "ｽ"), ('セ', "ｾ"), ('ソ', "ｿ"),
    ('タ', "ﾀ"), ('チ', "ﾁ"), ('ツ', "ﾂ"), ('テ', "ﾃ"), ('ト', "ﾄ"),
    ('ナ', "ﾅ"), ('ニ', "ﾆ"), ('ヌ', "ﾇ"), ('ネ', "ﾈ"), ('ノ', "ﾉ"),
    ('ハ', "ﾊ"), ('ヒ', "ﾋ"), ('フ', "ﾌ"), ('ヘ', "ﾍ"), ('ホ', "ﾎ"),
    ('マ', "ﾏ"), ('ミ', "ﾐ"), ('ム', "ﾑ"), ('メ', "ﾒ"), ('モ', "ﾓ"),
    ('ヤ', "ﾔ"), ('ユ', "ﾕ"), ('ヨ', "ﾖ"),
    ('ラ', "ﾗ"), ('リ', "ﾘ"), ('ル', "ﾙ"), ('レ', "ﾚ"), ('ロ', "ﾛ"),
    ('ワ', "ﾜ"), ('ン', "ﾝ"), ('゛', "ﾞ"), ('゜', "ﾟ"),
    ('ガ', "ｶﾞ"), ('ギ', "ｷﾞ"), ('グ', "ｸﾞ"), ('ゲ', "ｹﾞ"), ('ゴ', "ｺﾞ"),
    ('ザ', "ｻﾞ"), ('ジ', "ｼﾞ"), ('ズ', "ｽﾞ"), ('ゼ', "ｾﾞ"), ('ゾ', "ｿﾞ"),
    ('ダ', "ﾀﾞ"), ('ヂ', "ﾁﾞ"), ('ヅ', "ﾂﾞ"), ('デ', "ﾃﾞ"), ('ド', "ﾄﾞ"),
    ('バ', "ﾊﾞ"), ('ビ', "ﾋﾞ"), ('ブ', "ﾌﾞ"), ('ベ', "ﾍﾞ"), ('ボ', "ﾎﾞ"),
    ('パ', "ﾊﾟ"), ('ピ', "ﾋﾟ"), ('プ', "ﾌﾟ"), ('ペ', "ﾍﾟ"), ('ポ', "ﾎﾟ"),
    ('ヴ', "ｳﾞ"), ('ヷ', "ﾜﾞ"), ('ヺ', "ｦﾞ"),
];

fn half_to_full_kana() -> &'static HashMap<&'static str, char> {
    static TABLE: OnceLock<HashMap<&'static str, char>> = OnceLock::new();
    TABLE.get_or_init(|| KANA_WIDTH.iter().map(|&(full, half)| (half, full)).collect())
}

fn full_to_half_kana(c: char) -> Option<&'static str> {
    KANA_WIDTH.iter().find(|(full, _)| *full == c).map(|(_, half)| *half)
}

fn is_sound_mark(c: char) -> bool {
    matches!(c, 'ﾞ' | 'ﾟ')
}

/// ASCII → full-width, half-width kana → full-width kana.
///
/// Expects already-normalized input; a half-width kana followed by a
/// half-width sound mark becomes one voiced character.
pub fn to_full_width(text: &str) -> String {
    let table = half_to_full_kana();
    let mut result = String::with_capacity(text.len() * 3);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(&mark) = chars.peek() {
            if is_sound_mark(mark) {
                let pair: String = [c, mark].iter().collect();
                if let Some(&full) = table.get(pair.as_str()) {
                    result.push(full);
                    chars.next();
                    continue;
                }
            }
        }

        match c as u32 {
            code @ HALF_GRAPHICAL_BEGIN..=HALF_GRAPHICAL_END => {
                result.push(char::from_u32(code + HALF_FULL_GRAPHICAL_DIFF).unwrap_or(c));
            }
            _ if c == ' ' => result.push(IDEOGRAPHIC_SPACE),
            _ => {
                let mut buf = [0u8; 4];
                match table.get(&*c.encode_utf8(&mut buf)) {
                    Some(&full) => result.push(full),
                    None => result.push(c),
                }
            }
        }
    }

    result
}

/// Full-width ASCII → ASCII, full-width kana → half-width kana.
pub fn to_half_width(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c as u32 {
            code @ FULL_GRAPHICAL_BEGIN..=FULL_GRAPHICAL_END => {
                result.push(char::from_u32(code - HALF_FULL_GRAPHICAL_DIFF).unwrap_or(c));
            }
            _ if c == IDEOGRAPHIC_SPACE => result.push(' '),
            _ => match full_to_half_kana(c) {
                Some(half) => result.push_str(half),
                None => result.push(c),
            },
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_full_width_ascii() {
        assert_eq!(to_full_width("ABC123"), "ＡＢＣ１２３");
        assert_eq!(to_full_width("a b!~"), "ａ\u{3000}ｂ！～");
    }

    #[test]
    fn test_to_half_width_ascii() {
        assert_eq!(to_half_width("ＡＢＣ１２３"), "ABC123");
        assert_eq!(to_half_width("ａ\u{3000}ｂ"), "a b");
    }

    #[test]
    fn test_kana_width() {
        assert_eq!(to_half_width("カタカナ"), "ｶﾀｶﾅ");
        assert_eq!(to_half_width("ガギグ"), "ｶﾞｷﾞｸﾞ");
        assert_eq!(to_half_width("パ。"), "ﾊﾟ｡");
        assert_eq!(to_full_width("ｶﾞｶ"), "ガカ");
        assert_eq!(to_full_width("ﾊﾟ｢ｱ｣"), "パ「ア」");
    }

    #[test]
    fn test_unmapped_pass_through() {
        assert_eq!(to_full_width("é漢"), "é漢");
        assert_eq!(to_half_width("é漢ひらがな"), "é漢ひらがな");
        assert_eq!(to_full_width(""), "");
        assert_eq!(to_half_width(""), "");
    }

    #[test]
    fn test_kana_table_has_unique_halves() {
        let table = half_to_full_kana();
        assert_eq!(table.len(), KANA_WIDTH.len());
    }
}
