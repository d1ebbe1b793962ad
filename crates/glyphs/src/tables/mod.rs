//! Hand-authored glyph substitution data.
//!
//! Each table is a flat `(char, replacement)` slice; the slices are consumed
//! once when the registry is built. Faithfulness to the exact code points is
//! the entire correctness contract here, so the data modules stay mechanical
//! and boring on purpose.

mod enclosed;
mod flipped;
mod letterlike;
mod mathematical;
mod small_forms;

/// A named substitution table as raw entry data.
#[derive(Debug, Clone, Copy)]
pub struct TableDef {
    pub id: &'static str,
    pub entries: &'static [(char, &'static str)],
}

impl TableDef {
    const fn new(id: &'static str, entries: &'static [(char, &'static str)]) -> Self {
        Self { id, entries }
    }
}

/// A named pair of tables interleaved by character position parity.
#[derive(Debug, Clone, Copy)]
pub struct AlternatingDef {
    pub id: &'static str,
    /// Table applied at even scalar positions (0, 2, 4, …).
    pub even: &'static str,
    /// Table applied at odd scalar positions (1, 3, 5, …).
    pub odd: &'static str,
}

impl AlternatingDef {
    const fn new(id: &'static str, even: &'static str, odd: &'static str) -> Self {
        Self { id, even, odd }
    }
}

/// Every direct table, in registration order.
pub static ALL_TABLES: &[TableDef] = &[
    TableDef::new("serifBold", mathematical::SERIF_BOLD),
    TableDef::new("serifItalic", mathematical::SERIF_ITALIC),
    TableDef::new("serifBoldItalic", mathematical::SERIF_BOLD_ITALIC),
    TableDef::new("script", mathematical::SCRIPT),
    TableDef::new("boldScript", mathematical::BOLD_SCRIPT),
    TableDef::new("fraktur", mathematical::FRAKTUR),
    TableDef::new("boldFraktur", mathematical::BOLD_FRAKTUR),
    TableDef::new("doubleStruck", mathematical::DOUBLE_STRUCK),
    TableDef::new("sansSerif", mathematical::SANS_SERIF),
    TableDef::new("sansBold", mathematical::SANS_BOLD),
    TableDef::new("sansItalic", mathematical::SANS_ITALIC),
    TableDef::new("sansBoldItalic", mathematical::SANS_BOLD_ITALIC),
    TableDef::new("monospace", mathematical::MONOSPACE),
    TableDef::new("fullwidth", enclosed::FULLWIDTH),
    TableDef::new("bubble", enclosed::BUBBLE),
    TableDef::new("blackBubble", enclosed::BLACK_BUBBLE),
    TableDef::new("parenthesized", enclosed::PARENTHESIZED),
    TableDef::new("squared", enclosed::SQUARED),
    TableDef::new("squaredNegative", enclosed::SQUARED_NEGATIVE),
    TableDef::new("smallCaps", small_forms::SMALL_CAPS),
    TableDef::new("superscript", small_forms::SUPERSCRIPT),
    TableDef::new("subscript", small_forms::SUBSCRIPT),
    TableDef::new("inverted", flipped::INVERTED),
    TableDef::new("mirrored", flipped::MIRRORED),
    TableDef::new("rotatedLeft", flipped::ROTATED_LEFT),
    TableDef::new("rotatedRight", flipped::ROTATED_RIGHT),
    TableDef::new("vaiLetterlike", letterlike::VAI_LETTERLIKE),
    TableDef::new("bamumLetterlike", letterlike::BAMUM_LETTERLIKE),
    TableDef::new("smallCherokeeLetterlike", letterlike::SMALL_CHEROKEE_LETTERLIKE),
    TableDef::new(
        "canadianAboriginalLetterlike1",
        letterlike::CANADIAN_ABORIGINAL_LETTERLIKE_1,
    ),
    TableDef::new(
        "canadianAboriginalLetterlike2",
        letterlike::CANADIAN_ABORIGINAL_LETTERLIKE_2,
    ),
];

/// Every alternating pair, in registration order.
///
/// Each pair interleaves a named style with its natural counterpart; the
/// referenced ids must all appear in [`ALL_TABLES`], which the registry
/// checks when it is built.
pub static ALTERNATING_PAIRS: &[AlternatingDef] = &[
    AlternatingDef::new("alternatingBold", "sansBold", "serifBold"),
    AlternatingDef::new("alternatingSansBold", "sansBold", "sansSerif"),
    AlternatingDef::new("alternatingSerifBold", "serifBold", "serifItalic"),
    AlternatingDef::new("alternatingSansBoldItalic", "sansBoldItalic", "sansItalic"),
    AlternatingDef::new("alternatingSerifBoldItalic", "serifBoldItalic", "serifItalic"),
    AlternatingDef::new("alternatingItalicBold", "serifItalic", "serifBold"),
    AlternatingDef::new("alternatingBoldScript", "boldScript", "script"),
    AlternatingDef::new("alternatingCursiveScriptBold", "script", "boldScript"),
    AlternatingDef::new("alternatingFraktur", "fraktur", "boldFraktur"),
    AlternatingDef::new("alternatingBoldFraktur", "boldFraktur", "fraktur"),
    AlternatingDef::new("alternatingBubble", "bubble", "blackBubble"),
    AlternatingDef::new("alternatingSquared", "squared", "squaredNegative"),
];
