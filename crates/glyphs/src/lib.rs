//! Glyph substitution tables and the transform registry.
//!
//! This crate owns the canonical mapping from style name to
//! character-substitution table, the composite alternating transforms that
//! interleave two tables by character position, and the curated
//! category/topic catalog. All of it is static configuration: defined once
//! at first use, never mutated.
//!
//! The tables borrow from the Mathematical Alphanumeric Symbols, Enclosed
//! Alphanumerics, Phonetic Extensions, Letterlike Symbols, and several
//! letterlike scripts (Vai, Bamum, Cherokee, Canadian Aboriginal Syllabics)
//! purely for visual resemblance.

mod catalog;
mod error;
mod registry;
mod tables;

pub use catalog::ALL_CATEGORY;
pub use error::{Error, Result};
pub use registry::{GlyphTable, Registry, ResolvedTransform, registry};

#[cfg(test)]
mod tests {
    use super::*;

    /// Spot checks against the Unicode code charts, including every
    /// Letterlike Symbols fill-in for the reserved math-block holes.
    #[test]
    fn test_chart_fidelity() {
        let reg = registry();
        let lookup = |id: &str, ch: char| match reg.resolve(id).unwrap() {
            ResolvedTransform::Direct(table) => table.lookup(ch),
            _ => unreachable!(),
        };

        assert_eq!(lookup("serifBold", 'B'), Some("𝐁"));
        assert_eq!(lookup("serifItalic", 'h'), Some("ℎ"));
        assert_eq!(lookup("script", 'B'), Some("ℬ"));
        assert_eq!(lookup("script", 'g'), Some("ℊ"));
        assert_eq!(lookup("script", 'a'), Some("𝒶"));
        assert_eq!(lookup("fraktur", 'C'), Some("ℭ"));
        assert_eq!(lookup("fraktur", 'Z'), Some("ℨ"));
        assert_eq!(lookup("fraktur", 'A'), Some("𝔄"));
        assert_eq!(lookup("doubleStruck", 'C'), Some("ℂ"));
        assert_eq!(lookup("doubleStruck", 'R'), Some("ℝ"));
        assert_eq!(lookup("doubleStruck", '0'), Some("𝟘"));
        assert_eq!(lookup("sansBold", 'A'), Some("𝗔"));
        assert_eq!(lookup("monospace", '9'), Some("𝟿"));
        assert_eq!(lookup("fullwidth", ' '), Some("\u{3000}"));
        assert_eq!(lookup("fullwidth", 'A'), Some("Ａ"));
        assert_eq!(lookup("bubble", '0'), Some("⓪"));
        assert_eq!(lookup("bubble", 'a'), Some("ⓐ"));
        assert_eq!(lookup("blackBubble", 'a'), Some("🅐"));
        assert_eq!(lookup("blackBubble", 'A'), Some("🅐"));
        assert_eq!(lookup("squared", 'z'), Some("🅉"));
        assert_eq!(lookup("squaredNegative", 'A'), Some("🅰"));
        assert_eq!(lookup("parenthesized", 'a'), Some("⒜"));
        assert_eq!(lookup("smallCaps", 'q'), Some("ǫ"));
        assert_eq!(lookup("superscript", '1'), Some("¹"));
        assert_eq!(lookup("subscript", 'x'), Some("ₓ"));
        assert_eq!(lookup("inverted", 'a'), Some("ɐ"));
        assert_eq!(lookup("inverted", '?'), Some("¿"));
        assert_eq!(lookup("mirrored", 'E'), Some("Ǝ"));
    }

    /// Letters a table cannot render are simply absent; the engine treats
    /// absence as pass-through.
    #[test]
    fn test_known_coverage_gaps() {
        let reg = registry();
        let lookup = |id: &str, ch: char| match reg.resolve(id).unwrap() {
            ResolvedTransform::Direct(table) => table.lookup(ch),
            _ => unreachable!(),
        };

        assert_eq!(lookup("smallCaps", 'x'), None);
        assert_eq!(lookup("superscript", 'q'), None);
        assert_eq!(lookup("subscript", 'b'), None);
        assert_eq!(lookup("serifBold", '!'), None);
        assert_eq!(lookup("rotatedLeft", 'Q'), None);
    }
}
