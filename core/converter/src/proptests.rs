//! Property-based checks for the algebraic laws of the engine.

use std::sync::{Arc, OnceLock};
use proptest::prelude::*;
use unistyle_registry::StyleRegistry;
use unistyle_types::NormalizationOptions;
use crate::engine::ConversionEngine;

fn registry() -> Arc<StyleRegistry> {
    static REGISTRY: OnceLock<Arc<StyleRegistry>> = OnceLock::new();
    REGISTRY.get_or_init(|| Arc::new(StyleRegistry::builtin())).clone()
}

fn engine() -> ConversionEngine {
    ConversionEngine::new(registry(), NormalizationOptions::default())
}

/// A registered style key and text drawn from that style's own domain plus
/// space and newline.
fn arb_styled_domain() -> impl Strategy<Value = (String, String)> {
    let keys: Vec<String> = registry().styles().iter().map(|s| s.key().to_string()).collect();
    prop::sample::select(keys).prop_flat_map(|key| {
        let mut domain: Vec<char> = registry()
            .get(&key)
            .map(|style| style.map().iter().map(|(c, _)| c).collect())
            .unwrap_or_default();
        domain.extend([' ', '\n']);
        let text = prop::collection::vec(prop::sample::select(domain), 0..40)
            .prop_map(|chars| chars.into_iter().collect::<String>());
        (Just(key), text)
    })
}

proptest! {
    #[test]
    fn round_trip_restores_style_domain((key, text) in arb_styled_domain()) {
        let engine = engine();
        let styled = engine.apply_style(&text, &key).unwrap();
        prop_assert_eq!(engine.to_plain_text(&styled), engine.normalizer().normalize(&text));
    }

    #[test]
    fn unmapped_characters_are_identity(text in "[ぁ-んァ-ヶ一-龠 !?\n]{0,30}") {
        let engine = engine();
        let bold = engine.registry().get("bold").unwrap().map();
        prop_assert_eq!(engine.apply_map(&text, bold), text);
    }

    #[test]
    fn toggle_case_is_an_involution(text in "[A-Za-z]{0,40}") {
        let engine = engine();
        prop_assert_eq!(engine.toggle_case(&engine.toggle_case(&text)), text);
    }

    #[test]
    fn dakuten_leaves_whitespace_alone(text in "[A-Za-z \n]{0,40}") {
        let engine = engine();
        let marked = engine.add_combining_dakuten_to_all(&text);
        let expected_len = text.chars().count()
            + text.chars().filter(|c| *c != ' ' && *c != '\n').count();
        prop_assert_eq!(marked.chars().count(), expected_len);
        let skeleton: String = marked.chars().filter(|c| *c == ' ' || *c == '\n').collect();
        let original: String = text.chars().filter(|c| *c == ' ' || *c == '\n').collect();
        prop_assert_eq!(skeleton, original);
    }

    #[test]
    fn width_conversion_round_trips_printable_ascii(text in "[!-~ ]{0,40}") {
        let engine = engine();
        prop_assert_eq!(engine.half_width(&engine.full_width(&text)), text);
    }
}

#[test]
fn every_function_maps_empty_to_empty() {
    let engine = engine();
    assert_eq!(engine.apply_style("", "bold").unwrap(), "");
    assert_eq!(engine.to_plain_text(""), "");
    assert_eq!(engine.full_width(""), "");
    assert_eq!(engine.half_width(""), "");
    assert_eq!(engine.add_combining_dakuten_to_all(""), "");
    assert_eq!(engine.add_halfwidth_dakuten_to_all(""), "");
    assert_eq!(engine.to_upper_case(""), "");
    assert_eq!(engine.to_lower_case(""), "");
    assert_eq!(engine.toggle_case(""), "");
}
