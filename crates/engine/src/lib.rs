//! The transform engine: turns plain text into styled Unicode look-alike
//! text by mapping each character through a registered glyph table, with
//! optional combining-mark decoration.
//!
//! Pure and stateless: every call resolves its transform against the
//! read-only registry and walks its own input, so any number of calls may
//! run concurrently without coordination.

mod decoration;

use log::trace;

pub use decoration::Decoration;
pub use unistyle_glyphs::{
    ALL_CATEGORY, Error, GlyphTable, Registry, ResolvedTransform, Result, registry,
};

/// Apply a registered transform to `text`, appending the requested
/// combining marks after every output character.
///
/// Iterates by Unicode scalar value, so astral-plane characters (for
/// instance already-styled text being re-copied) count as one position.
/// Characters with no entry in the active table pass through unchanged;
/// an unregistered `transform_id` fails with [`Error::UnknownTransform`]
/// before any output is produced.
///
/// ```
/// use unistyle_engine::{Decoration, transform};
///
/// assert_eq!(transform("AB", "sansBold", Decoration::NONE).unwrap(), "𝗔𝗕");
/// ```
pub fn transform(text: &str, transform_id: &str, decoration: Decoration) -> Result<String> {
    let resolved = registry().resolve(transform_id)?;
    trace!(
        "transform '{transform_id}': {} scalars, {} marks per char",
        text.chars().count(),
        decoration.mark_count(),
    );

    // Styled replacements are up to four bytes each, plus two per mark.
    let mut out = String::with_capacity(text.len() * (2 + decoration.mark_count()));
    match resolved {
        ResolvedTransform::Direct(table) => {
            for ch in text.chars() {
                push_styled(&mut out, table, ch, decoration);
            }
        }
        ResolvedTransform::Alternating { even, odd } => {
            for (position, ch) in text.chars().enumerate() {
                let table = if position % 2 == 0 { even } else { odd };
                push_styled(&mut out, table, ch, decoration);
            }
        }
    }
    Ok(out)
}

fn push_styled(out: &mut String, table: &GlyphTable, ch: char, decoration: Decoration) {
    match table.lookup(ch) {
        Some(replacement) => out.push_str(replacement),
        None => out.push(ch),
    }
    decoration.append_marks(out);
}
