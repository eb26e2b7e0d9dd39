//! Styles shipped with the registry.
//!
//! Mathematical alphanumeric styles are computed from block offsets; the
//! letters Unicode encoded earlier in Letterlike Symbols are patched in from
//! the `*_HOLES` tables. The remaining styles are written as positional
//! `from`/`to` strings.

use crate::character_map::CharacterMap;
use crate::style::Style;

struct MathAlphabet {
    key: &'static str,
    name: &'static str,
    category: &'static str,
    upper: u32,
    lower: u32,
    digits: Option<u32>,
    holes: &'static [(char, char)],
}

const ITALIC_HOLES: &[(char, char)] = &[('h', '\u{210E}')];

const SCRIPT_HOLES: &[(char, char)] = &[
    ('B', '\u{212C}'),
    ('E', '\u{2130}'),
    ('F', '\u{2131}'),
    ('H', '\u{210B}'),
    ('I', '\u{2110}'),
    ('L', '\u{2112}'),
    ('M', '\u{2133}'),
    ('R', '\u{211B}'),
    ('e', '\u{212F}'),
    ('g', '\u{210A}'),
    ('o', '\u{2134}'),
];

const FRAKTUR_HOLES: &[(char, char)] = &[
    ('C', '\u{212D}'),
    ('H', '\u{210C}'),
    ('I', '\u{2111}'),
    ('R', '\u{211C}'),
    ('Z', '\u{2128}'),
];

const DOUBLE_STRUCK_HOLES: &[(char, char)] = &[
    ('C', '\u{2102}'),
    ('H', '\u{210D}'),
    ('N', '\u{2115}'),
    ('P', '\u{2119}'),
    ('Q', '\u{211A}'),
    ('R', '\u{211D}'),
    ('Z', '\u{2124}'),
];

const MATH_ALPHABETS: &[MathAlphabet] = &[
    MathAlphabet { key: "bold", name: "Bold", category: "Serif", upper: 0x1D400, lower: 0x1D41A, digits: Some(0x1D7CE), holes: &[] },
    MathAlphabet { key: "italic", name: "Italic", category: "Serif", upper: 0x1D434, lower: 0x1D44E, digits: None, holes: ITALIC_HOLES },
    MathAlphabet { key: "boldItalic", name: "Bold Italic", category: "Serif", upper: 0x1D468, lower: 0x1D482, digits: None, holes: &[] },
    MathAlphabet { key: "sans", name: "Sans", category: "Sans-serif", upper: 0x1D5A0, lower: 0x1D5BA, digits: Some(0x1D7E2), holes: &[] },
    MathAlphabet { key: "sansBold", name: "Sans Bold", category: "Sans-serif", upper: 0x1D5D4, lower: 0x1D5EE, digits: Some(0x1D7EC), holes: &[] },
    MathAlphabet { key: "sansItalic", name: "Sans Italic", category: "Sans-serif", upper: 0x1D608, lower: 0x1D622, digits: None, holes: &[] },
    MathAlphabet { key: "sansBoldItalic", name: "Sans Bold Italic", category: "Sans-serif", upper: 0x1D63C, lower: 0x1D656, digits: None, holes: &[] },
    MathAlphabet { key: "script", name: "Script", category: "Script", upper: 0x1D49C, lower: 0x1D4B6, digits: None, holes: SCRIPT_HOLES },
    MathAlphabet { key: "boldScript", name: "Bold Script", category: "Script", upper: 0x1D4D0, lower: 0x1D4EA, digits: None, holes: &[] },
    MathAlphabet { key: "fraktur", name: "Fraktur", category: "Fraktur", upper: 0x1D504, lower: 0x1D51E, digits: None, holes: FRAKTUR_HOLES },
    MathAlphabet { key: "boldFraktur", name: "Bold Fraktur", category: "Fraktur", upper: 0x1D56C, lower: 0x1D586, digits: None, holes: &[] },
    MathAlphabet { key: "doubleStruck", name: "Double-struck", category: "Double-struck", upper: 0x1D538, lower: 0x1D552, digits: Some(0x1D7D8), holes: DOUBLE_STRUCK_HOLES },
    MathAlphabet { key: "monospace", name: "Monospace", category: "Monospace", upper: 0x1D670, lower: 0x1D68A, digits: Some(0x1D7F6), holes: &[] },
];

impl MathAlphabet {
    fn build(&self) -> Style {
        let mut map = CharacterMap::new();
        map.insert_range('A', 'Z', self.upper);
        map.insert_range('a', 'z', self.lower);
        if let Some(digits) = self.digits {
            map.insert_range('0', '9', digits);
        }
        for (canonical, styled) in self.holes {
            map.insert(*canonical, &styled.to_string());
        }
        Style::new(self.key, self.name, self.category, map)
    }
}

fn enclosed_styles() -> Vec<Style> {
    let mut circled = CharacterMap::new();
    circled.insert_range('A', 'Z', 0x24B6);
    circled.insert_range('a', 'z', 0x24D0);
    circled.insert('0', "⓪");
    circled.insert_range('1', '9', 0x2460);

    let mut negative_circled = CharacterMap::new();
    negative_circled.insert_range('A', 'Z', 0x1F150);
    negative_circled.insert('0', "⓿");
    negative_circled.insert_range('1', '9', 0x2776);

    let mut parenthesized = CharacterMap::new();
    parenthesized.insert_range('A', 'Z', 0x1F110);
    parenthesized.insert_range('a', 'z', 0x249C);
    parenthesized.insert_range('1', '9', 0x2474);

    let mut squared = CharacterMap::new();
    squared.insert_range('A', 'Z', 0x1F130);

    let mut negative_squared = CharacterMap::new();
    negative_squared.insert_range('A', 'Z', 0x1F170);

    vec![
        Style::new("circled", "Circled", "Enclosed", circled),
        Style::new("negativeCircled", "Negative Circled", "Enclosed", negative_circled),
        Style::new("parenthesized", "Parenthesized", "Enclosed", parenthesized),
        Style::new("squared", "Squared", "Enclosed", squared),
        Style::new("negativeSquared", "Negative Squared", "Enclosed", negative_squared),
    ]
}

fn small_form_styles() -> Vec<Style> {
    vec![
        Style::new(
            "smallCaps",
            "Small Caps",
            "Small forms",
            CharacterMap::zip("abcdefghijklmnopqrstuvwyz", "ᴀʙᴄᴅᴇꜰɢʜɪᴊᴋʟᴍɴᴏᴘꞯʀꜱᴛᴜᴠᴡʏᴢ"),
        ),
        Style::new(
            "superscript",
            "Superscript",
            "Small forms",
            CharacterMap::zip(
                "0123456789abcdefghijklmnoprstuvwxyz",
                "⁰¹²³⁴⁵⁶⁷⁸⁹ᵃᵇᶜᵈᵉᶠᵍʰⁱʲᵏˡᵐⁿᵒᵖʳˢᵗᵘᵛʷˣʸᶻ",
            ),
        ),
        Style::new(
            "subscript",
            "Subscript",
            "Small forms",
            CharacterMap::zip("0123456789aehijklmnoprstuvx", "₀₁₂₃₄₅₆₇₈₉ₐₑₕᵢⱼₖₗₘₙₒₚᵣₛₜᵤᵥₓ"),
        ),
    ]
}

fn width_styles() -> Vec<Style> {
    let mut fullwidth = CharacterMap::new();
    fullwidth.insert_range('!', '~', 0xFF01);
    fullwidth.insert(' ', "\u{3000}");
    vec![Style::new("fullwidth", "Fullwidth", "Width", fullwidth)]
}

/// Built-in styles in presentation order.
pub fn builtin_styles() -> Vec<Style> {
    let mut styles: Vec<Style> = MATH_ALPHABETS.iter().map(MathAlphabet::build).collect();
    styles.extend(enclosed_styles());
    styles.extend(small_form_styles());
    styles.extend(width_styles());
    styles
}
