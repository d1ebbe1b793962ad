//! Small letterforms from the phonetic extension blocks: small capitals,
//! modifier-letter superscripts, and subscripts.
//!
//! These blocks were never meant as styled alphabets, so coverage is what the
//! charts provide: no small-capital X, no subscript for half the alphabet, a
//! borrowed ǫ where no small-capital Q exists. Absent letters pass through.

/// Small capitals (both cases): ᴀ ʙ ᴄ…, with ǫ standing in for Q.
pub const SMALL_CAPS: &[(char, &str)] = &[
    ('A', "ᴀ"), ('B', "ʙ"), ('C', "ᴄ"), ('D', "ᴅ"),
    ('E', "ᴇ"), ('F', "ꜰ"), ('G', "ɢ"), ('H', "ʜ"),
    ('I', "ɪ"), ('J', "ᴊ"), ('K', "ᴋ"), ('L', "ʟ"),
    ('M', "ᴍ"), ('N', "ɴ"), ('O', "ᴏ"), ('P', "ᴘ"),
    ('Q', "ǫ"), ('R', "ʀ"), ('S', "ꜱ"), ('T', "ᴛ"),
    ('U', "ᴜ"), ('V', "ᴠ"), ('W', "ᴡ"), ('Y', "ʏ"),
    ('Z', "ᴢ"),
    ('a', "ᴀ"), ('b', "ʙ"), ('c', "ᴄ"), ('d', "ᴅ"),
    ('e', "ᴇ"), ('f', "ꜰ"), ('g', "ɢ"), ('h', "ʜ"),
    ('i', "ɪ"), ('j', "ᴊ"), ('k', "ᴋ"), ('l', "ʟ"),
    ('m', "ᴍ"), ('n', "ɴ"), ('o', "ᴏ"), ('p', "ᴘ"),
    ('q', "ǫ"), ('r', "ʀ"), ('s', "ꜱ"), ('t', "ᴛ"),
    ('u', "ᴜ"), ('v', "ᴠ"), ('w', "ᴡ"), ('y', "ʏ"),
    ('z', "ᴢ"),
];

/// Superscript modifier letters, digits, and signs.
pub const SUPERSCRIPT: &[(char, &str)] = &[
    ('A', "ᴬ"), ('B', "ᴮ"), ('C', "ᶜ"), ('D', "ᴰ"),
    ('E', "ᴱ"), ('F', "ᶠ"), ('G', "ᴳ"), ('H', "ᴴ"),
    ('I', "ᴵ"), ('J', "ᴶ"), ('K', "ᴷ"), ('L', "ᴸ"),
    ('M', "ᴹ"), ('N', "ᴺ"), ('O', "ᴼ"), ('P', "ᴾ"),
    ('R', "ᴿ"), ('S', "ˢ"), ('T', "ᵀ"), ('U', "ᵁ"),
    ('V', "ⱽ"), ('W', "ᵂ"), ('X', "ˣ"), ('Y', "ʸ"),
    ('Z', "ᶻ"),
    ('a', "ᵃ"), ('b', "ᵇ"), ('c', "ᶜ"), ('d', "ᵈ"),
    ('e', "ᵉ"), ('f', "ᶠ"), ('g', "ᵍ"), ('h', "ʰ"),
    ('i', "ⁱ"), ('j', "ʲ"), ('k', "ᵏ"), ('l', "ˡ"),
    ('m', "ᵐ"), ('n', "ⁿ"), ('o', "ᵒ"), ('p', "ᵖ"),
    ('r', "ʳ"), ('s', "ˢ"), ('t', "ᵗ"), ('u', "ᵘ"),
    ('v', "ᵛ"), ('w', "ʷ"), ('x', "ˣ"), ('y', "ʸ"),
    ('z', "ᶻ"),
    ('0', "⁰"), ('1', "¹"), ('2', "²"), ('3', "³"),
    ('4', "⁴"), ('5', "⁵"), ('6', "⁶"), ('7', "⁷"),
    ('8', "⁸"), ('9', "⁹"),
    ('(', "⁽"), (')', "⁾"), ('+', "⁺"), ('-', "⁻"),
    ('=', "⁼"),
];

/// Subscript letters, digits, and signs.
pub const SUBSCRIPT: &[(char, &str)] = &[
    ('a', "ₐ"), ('e', "ₑ"), ('h', "ₕ"), ('i', "ᵢ"),
    ('j', "ⱼ"), ('k', "ₖ"), ('l', "ₗ"), ('m', "ₘ"),
    ('n', "ₙ"), ('o', "ₒ"), ('p', "ₚ"), ('r', "ᵣ"),
    ('s', "ₛ"), ('t', "ₜ"), ('u', "ᵤ"), ('v', "ᵥ"),
    ('x', "ₓ"),
    ('0', "₀"), ('1', "₁"), ('2', "₂"), ('3', "₃"),
    ('4', "₄"), ('5', "₅"), ('6', "₆"), ('7', "₇"),
    ('8', "₈"), ('9', "₉"),
    ('(', "₍"), (')', "₎"), ('+', "₊"), ('-', "₋"),
    ('=', "₌"),
];
