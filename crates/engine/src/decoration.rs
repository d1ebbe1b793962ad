//! Combining-mark decoration.
//!
//! Underline, strikethrough, and their variants are simulated by appending
//! combining diacritics after each character, so decorated text survives
//! copy-paste into places that strip real formatting.

/// Combining low line.
const UNDERLINE: char = '\u{0332}';
/// Combining double low line.
const DOUBLE_UNDERLINE: char = '\u{0333}';
/// Combining tilde below.
const WAVY_UNDERLINE: char = '\u{0330}';
/// Combining long stroke overlay.
const STRIKETHROUGH: char = '\u{0336}';

/// Which combining marks to append after every output character.
///
/// Flags are independent and may be combined freely. The marks are always
/// appended in one fixed order (underline, double underline, wavy underline,
/// strikethrough) so stacked marks render consistently no matter how the
/// flags were set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoration {
    pub underline: bool,
    pub double_underline: bool,
    pub wavy_underline: bool,
    pub strikethrough: bool,
}

impl Decoration {
    /// No decoration.
    pub const NONE: Self = Self {
        underline: false,
        double_underline: false,
        wavy_underline: false,
        strikethrough: false,
    };

    /// Number of marks appended per character.
    pub fn mark_count(&self) -> usize {
        usize::from(self.underline)
            + usize::from(self.double_underline)
            + usize::from(self.wavy_underline)
            + usize::from(self.strikethrough)
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Append the requested marks, in the fixed stacking order.
    pub(crate) fn append_marks(&self, out: &mut String) {
        if self.underline {
            out.push(UNDERLINE);
        }
        if self.double_underline {
            out.push(DOUBLE_UNDERLINE);
        }
        if self.wavy_underline {
            out.push(WAVY_UNDERLINE);
        }
        if self.strikethrough {
            out.push(STRIKETHROUGH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_count() {
        assert_eq!(Decoration::NONE.mark_count(), 0);
        let deco = Decoration {
            underline: true,
            strikethrough: true,
            ..Decoration::NONE
        };
        assert_eq!(deco.mark_count(), 2);
    }

    #[test]
    fn test_fixed_append_order() {
        let deco = Decoration {
            underline: true,
            double_underline: true,
            wavy_underline: true,
            strikethrough: true,
        };
        let mut out = String::from("A");
        deco.append_marks(&mut out);
        assert_eq!(out, "A\u{332}\u{333}\u{330}\u{336}");
    }

    #[test]
    fn test_default_is_none() {
        assert!(Decoration::default().is_none());
    }
}
