//! Curated style-category and topic rosters.
//!
//! Pure curation for callers deciding which transforms to present together;
//! the engine accepts any registered transform id regardless of membership.
//! Lists are ordered by editorial preference and deduplicated when the
//! registry ingests them.

/// The pseudo-category naming every registered transform. Not a stored list.
pub const ALL_CATEGORY: &str = "all";

/// A named group of transform ids.
#[derive(Debug, Clone, Copy)]
pub struct GroupDef {
    pub id: &'static str,
    pub transforms: &'static [&'static str],
}

impl GroupDef {
    const fn new(id: &'static str, transforms: &'static [&'static str]) -> Self {
        Self { id, transforms }
    }
}

/// Style categories and their curated transform lists.
pub static STYLE_CATEGORIES: &[GroupDef] = &[
    GroupDef::new("cool", &[
        "fullwidth", "squared", "squaredNegative",
        "vaiLetterlike", "bamumLetterlike", "smallCherokeeLetterlike",
        "canadianAboriginalLetterlike1", "canadianAboriginalLetterlike2",
        "inverted", "mirrored", "rotatedLeft", "rotatedRight",
        "bubble", "blackBubble", "parenthesized",
        "monospace", "doubleStruck", "fraktur", "boldFraktur",
    ]),
    GroupDef::new("fancy", &[
        "script", "boldScript", "fraktur", "boldFraktur",
        "doubleStruck", "smallCaps", "serifBoldItalic", "sansBoldItalic",
        "bubble", "blackBubble", "vaiLetterlike", "bamumLetterlike",
        "alternatingBoldScript", "alternatingFraktur",
    ]),
    GroupDef::new("small-text", &[
        "smallCaps", "superscript", "subscript", "sansItalic", "serifItalic",
    ]),
    GroupDef::new("bold-text", &[
        "sansBold", "serifBold", "boldScript", "boldFraktur",
        "serifBoldItalic", "sansBoldItalic",
        "alternatingSansBold", "alternatingSansBoldItalic",
        "alternatingSerifBold", "alternatingSerifBoldItalic",
        "alternatingBold", "alternatingBoldFraktur", "alternatingBoldScript",
        "monospace", "squared", "squaredNegative",
    ]),
    GroupDef::new("italic", &[
        "sansItalic", "serifItalic", "serifBoldItalic", "sansBoldItalic",
        "alternatingSansBoldItalic", "alternatingSerifBoldItalic",
        "alternatingItalicBold", "script", "subscript",
    ]),
    GroupDef::new("bold-italic", &[
        "sansBoldItalic", "serifBoldItalic",
        "sansItalic", "serifItalic",
        "sansBold", "serifBold", "boldScript", "boldFraktur",
        "alternatingSansBoldItalic", "alternatingSerifBoldItalic",
    ]),
    GroupDef::new("sans-serif", &[
        "sansSerif", "sansBold", "sansItalic", "sansBoldItalic",
    ]),
    GroupDef::new("serif", &[
        "serifBold", "serifItalic", "serifBoldItalic",
    ]),
    GroupDef::new("underline", &[
        "smallCaps", "boldScript", "superscript", "squaredNegative",
        "doubleStruck", "serifBoldItalic", "serifBold", "serifItalic",
        "sansSerif", "sansItalic", "sansBoldItalic", "sansBold",
        "monospace", "inverted", "mirrored", "boldFraktur", "subscript",
    ]),
    GroupDef::new("bubble-text", &[
        "bubble", "blackBubble", "alternatingBubble",
    ]),
    GroupDef::new("square-text", &[
        "squared", "squaredNegative", "alternatingSquared",
    ]),
    GroupDef::new("cursive-font", &[
        "script", "boldScript", "subscript",
    ]),
    GroupDef::new("alternating", &[
        "alternatingSerifBold", "alternatingSansBold",
        "alternatingBubble", "alternatingSquared",
        "alternatingBoldScript", "alternatingBoldFraktur",
        "alternatingSansBoldItalic", "alternatingSerifBoldItalic",
        "alternatingItalicBold", "alternatingCursiveScriptBold",
        "alternatingFraktur", "alternatingBold",
    ]),
    GroupDef::new("exotic", &[
        "vaiLetterlike", "bamumLetterlike", "smallCherokeeLetterlike",
        "canadianAboriginalLetterlike1", "canadianAboriginalLetterlike2",
        "fullwidth", "monospace", "inverted", "mirrored", "rotatedLeft", "rotatedRight",
    ]),
    GroupDef::new("mathematical", &[
        "doubleStruck", "script", "boldScript", "fraktur", "boldFraktur",
        "superscript", "subscript", "sansSerif", "sansBold", "monospace",
    ]),
    GroupDef::new("decorative", &[
        "bubble", "blackBubble", "parenthesized", "squared", "squaredNegative",
        "script", "boldScript", "fullwidth", "vaiLetterlike", "bamumLetterlike",
    ]),
    GroupDef::new("vintage", &[
        "fraktur", "boldFraktur", "script", "boldScript", "serifBold",
        "serifItalic", "doubleStruck", "smallCaps", "alternatingFraktur",
        "alternatingBoldScript", "alternatingBoldFraktur",
    ]),
    GroupDef::new("modern", &[
        "sansSerif", "sansBold", "sansItalic", "sansBoldItalic",
        "monospace", "doubleStruck", "alternatingSansBold", "alternatingSansBoldItalic",
        "alternatingBold", "squared", "squaredNegative", "fullwidth",
    ]),
    GroupDef::new("artistic", &[
        "script", "boldScript", "fraktur", "boldFraktur", "doubleStruck",
        "bubble", "blackBubble", "vaiLetterlike", "bamumLetterlike",
        "alternatingBoldScript", "alternatingFraktur",
    ]),
    GroupDef::new("rounded", &[
        "bubble", "blackBubble", "alternatingBubble", "parenthesized",
        "fullwidth", "script", "boldScript",
    ]),
    GroupDef::new("sharp", &[
        "squared", "squaredNegative", "alternatingSquared", "monospace",
        "sansBold", "serifBold", "boldFraktur", "fullwidth",
    ]),
    GroupDef::new("handwritten", &[
        "script", "boldScript", "serifItalic", "sansItalic",
        "subscript", "alternatingCursiveScriptBold", "alternatingBoldScript",
    ]),
    GroupDef::new("gaming", &[
        "squared", "squaredNegative", "alternatingSquared", "monospace",
        "boldFraktur", "fullwidth", "sansBold", "doubleStruck",
        "blackBubble", "inverted",
    ]),
    GroupDef::new("retro", &[
        "monospace", "squared", "fullwidth", "doubleStruck",
        "smallCaps", "squaredNegative", "parenthesized",
    ]),
    GroupDef::new("elegant", &[
        "script", "boldScript", "serifItalic", "serifBoldItalic",
        "smallCaps", "fraktur", "doubleStruck", "alternatingSerifBoldItalic",
    ]),
    GroupDef::new("playful", &[
        "bubble", "blackBubble", "alternatingBubble", "parenthesized",
        "rotatedLeft", "rotatedRight", "inverted", "mirrored",
        "smallCherokeeLetterlike", "canadianAboriginalLetterlike2",
    ]),
];

/// Per-platform topic lists. Facebook, Twitter, and WhatsApp share the same
/// shortlist of widely supported styles; handwriting mirrors cursive.
pub static TOPICS: &[GroupDef] = &[
    GroupDef::new("handwriting", &["script", "boldScript", "subscript"]),
    GroupDef::new("facebook", SOCIAL_SHORTLIST),
    GroupDef::new("twitter", SOCIAL_SHORTLIST),
    GroupDef::new("whatsapp", SOCIAL_SHORTLIST),
];

const SOCIAL_SHORTLIST: &[&str] = &[
    "fraktur", "boldFraktur",
    "sansSerif", "sansBold", "sansItalic", "sansBoldItalic",
    "serifBold", "serifItalic", "serifBoldItalic",
    "alternatingSerifBold", "alternatingSansBold",
    "alternatingBoldScript", "alternatingBoldFraktur",
    "alternatingSansBoldItalic", "alternatingSerifBoldItalic",
];
