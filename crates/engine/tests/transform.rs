//! End-to-end checks of the transform contract: substitution, pass-through,
//! alternating parity, decoration, and failure behavior.

use unistyle_engine::{Decoration, Error, ResolvedTransform, registry, transform};

fn plain(text: &str, id: &str) -> String {
    transform(text, id, Decoration::NONE).unwrap()
}

fn underlined() -> Decoration {
    Decoration {
        underline: true,
        ..Decoration::NONE
    }
}

#[test]
fn test_sans_bold_scenario() {
    assert_eq!(plain("AB", "sansBold"), "𝗔𝗕");
}

#[test]
fn test_alternating_bold_scenario() {
    // Even positions through sansBold, odd through serifBold.
    assert_eq!(plain("AB", "alternatingBold"), "𝗔𝐁");
    assert_eq!(plain("ABAB", "alternatingBold"), "𝗔𝐁𝗔𝐁");
}

#[test]
fn test_empty_input_for_every_transform() {
    for id in registry().transform_ids() {
        assert_eq!(plain("", id), "", "transform '{id}'");
    }
}

#[test]
fn test_mapped_domain_round_trip() {
    // Every mapped character of every direct table substitutes to exactly
    // the table entry when passed alone.
    let reg = registry();
    for id in reg.transform_ids() {
        if let ResolvedTransform::Direct(table) = reg.resolve(id).unwrap() {
            for ch in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
                if let Some(expected) = table.lookup(ch) {
                    assert_eq!(plain(&ch.to_string(), id), expected, "'{ch}' via '{id}'");
                }
            }
        }
    }
}

#[test]
fn test_unmapped_characters_pass_through() {
    assert_eq!(plain("héllo, wörld! 漢字", "serifBold"),
               "𝐡é𝐥𝐥𝐨, 𝐰ö𝐫𝐥𝐝! 漢字");
    assert_eq!(plain("~~~", "bubble"), "~~~");
}

#[test]
fn test_alternating_parity_counts_scalars_not_code_units() {
    // 𝗔 is outside the BMP; it must still occupy a single position, putting
    // the following 'B' at an odd index.
    assert_eq!(plain("𝗔B", "alternatingBold"), "𝗔𝐁");
}

#[test]
fn test_alternating_parity_ignores_substitutability() {
    // The '-' at position 1 passes through but still consumes the odd slot.
    assert_eq!(plain("A-B", "alternatingBold"), "𝗔-𝗕");
}

#[test]
fn test_output_never_shorter_than_input() {
    let inputs = ["", "a", "Hello World", "¡¿ß漢", "𝗔𝐁"];
    for id in registry().transform_ids() {
        for input in inputs {
            let out = plain(input, id);
            assert!(
                out.chars().count() >= input.chars().count(),
                "'{input}' shrank via '{id}'",
            );
        }
    }
}

#[test]
fn test_single_decoration_adds_one_scalar_per_char() {
    let bare = plain("A", "sansBold");
    let marked = transform("A", "sansBold", underlined()).unwrap();
    assert_eq!(marked.chars().count(), bare.chars().count() + 1);
    assert_eq!(marked, "𝗔\u{332}");
}

#[test]
fn test_combined_decoration_adds_one_scalar_per_flag() {
    let deco = Decoration {
        underline: true,
        strikethrough: true,
        ..Decoration::NONE
    };
    let marked = transform("A", "sansBold", deco).unwrap();
    assert_eq!(marked.chars().count(), 3);
    assert_eq!(marked, "𝗔\u{332}\u{336}");
}

#[test]
fn test_decoration_order_is_fixed() {
    let all = Decoration {
        underline: true,
        double_underline: true,
        wavy_underline: true,
        strikethrough: true,
    };
    // Marks stack in underline, double, wavy, strikethrough order however
    // the flags were toggled.
    assert_eq!(
        transform("A", "serifBold", all).unwrap(),
        "𝐀\u{332}\u{333}\u{330}\u{336}",
    );
}

#[test]
fn test_decoration_applies_per_character() {
    let marked = transform("ab c", "smallCaps", underlined()).unwrap();
    assert_eq!(marked, "ᴀ\u{332}ʙ\u{332} \u{332}ᴄ\u{332}");
}

#[test]
fn test_decoration_available_for_any_transform() {
    // Decoration is orthogonal to style; nothing limits it to the
    // "underline" category.
    let marked = transform("A", "bubble", underlined()).unwrap();
    assert_eq!(marked, "Ⓐ\u{332}");
}

#[test]
fn test_unknown_transform_fails_for_every_input() {
    for input in ["", "A", "hello"] {
        let err = transform(input, "unknown-id", Decoration::NONE).unwrap_err();
        assert_eq!(err, Error::UnknownTransform("unknown-id".to_string()));
    }
}

#[test]
fn test_restyling_styled_text_passes_through() {
    // Styled glyphs are not keys in any table, so a second pass is the
    // identity. Expected behavior, not a bug.
    let once = plain("Hello", "fraktur");
    let twice = plain(&once, "fraktur");
    assert_eq!(once, twice);
}

#[test]
fn test_category_listing_feeds_transform() {
    let reg = registry();
    let ids = reg.transforms_for_category("bold-text").unwrap();
    assert!(ids.contains(&"sansBold"));
    for id in ids {
        transform("sample", id, Decoration::NONE).unwrap();
    }
}

#[test]
fn test_topic_listing_feeds_transform() {
    let ids = registry().transforms_for_topic("twitter").unwrap();
    assert!(ids.contains(&"fraktur"));
    for id in ids {
        transform("sample", id, Decoration::NONE).unwrap();
    }
}
