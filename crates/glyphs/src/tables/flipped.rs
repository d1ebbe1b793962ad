//! Flipped letterforms: upside-down, mirrored, and rotated look-alikes
//! drawn from the phonetic, letterlike, and syllabics blocks.
//!
//! Unicode encodes genuinely turned or reversed forms for only part of the
//! alphabet, so these tables are partial and the rest passes through. The
//! engine substitutes position by position and never reorders, so reversing
//! the character sequence of upside-down text is the caller's business.

/// Upside-down look-alikes, letters, digits, and paired punctuation.
pub const INVERTED: &[(char, &str)] = &[
    ('A', "∀"), // FOR ALL
    ('B', "𐐒"), // DESERET CAPITAL LETTER BEE
    ('C', "Ɔ"), // LATIN CAPITAL LETTER OPEN O
    ('D', "ᗡ"), // CANADIAN SYLLABICS CARRIER THA
    ('E', "Ǝ"), // LATIN CAPITAL LETTER REVERSED E
    ('F', "Ⅎ"), // TURNED CAPITAL F
    ('G', "⅁"), // TURNED SANS-SERIF CAPITAL G
    ('H', "H"), // LATIN CAPITAL LETTER H
    ('I', "I"), // LATIN CAPITAL LETTER I
    ('J', "ſ"), // LATIN SMALL LETTER LONG S
    ('K', "ʞ"), // LATIN SMALL LETTER TURNED K
    ('L', "Ꞁ"), // LATIN CAPITAL LETTER TURNED L
    ('M', "W"), // LATIN CAPITAL LETTER W
    ('N', "N"), // LATIN CAPITAL LETTER N
    ('O', "O"), // LATIN CAPITAL LETTER O
    ('P', "Ԁ"), // CYRILLIC CAPITAL LETTER KOMI DE
    ('Q', "Ὁ"), // GREEK CAPITAL LETTER OMICRON WITH DASIA
    ('R', "ᴚ"), // LATIN LETTER SMALL CAPITAL TURNED R
    ('S', "S"), // LATIN CAPITAL LETTER S
    ('T', "⊥"), // UP TACK
    ('U', "∩"), // INTERSECTION
    ('V', "Λ"), // GREEK CAPITAL LETTER LAMDA
    ('W', "M"), // LATIN CAPITAL LETTER M
    ('X', "X"), // LATIN CAPITAL LETTER X
    ('Y', "⅄"), // TURNED SANS-SERIF CAPITAL Y
    ('Z', "Z"), // LATIN CAPITAL LETTER Z
    ('a', "ɐ"), // LATIN SMALL LETTER TURNED A
    ('b', "q"), // LATIN SMALL LETTER Q
    ('c', "ɔ"), // LATIN SMALL LETTER OPEN O
    ('d', "p"), // LATIN SMALL LETTER P
    ('e', "ǝ"), // LATIN SMALL LETTER TURNED E
    ('f', "ɟ"), // LATIN SMALL LETTER DOTLESS J WITH STROKE
    ('g', "ƃ"), // LATIN SMALL LETTER B WITH TOPBAR
    ('h', "ɥ"), // LATIN SMALL LETTER TURNED H
    ('i', "ᴉ"), // LATIN SMALL LETTER TURNED I
    ('j', "ɾ"), // LATIN SMALL LETTER R WITH FISHHOOK
    ('k', "ʞ"), // LATIN SMALL LETTER TURNED K
    ('l', "ʃ"), // LATIN SMALL LETTER ESH
    ('m', "ɯ"), // LATIN SMALL LETTER TURNED M
    ('n', "u"), // LATIN SMALL LETTER U
    ('o', "o"), // LATIN SMALL LETTER O
    ('p', "d"), // LATIN SMALL LETTER D
    ('q', "b"), // LATIN SMALL LETTER B
    ('r', "ɹ"), // LATIN SMALL LETTER TURNED R
    ('s', "s"), // LATIN SMALL LETTER S
    ('t', "ʇ"), // LATIN SMALL LETTER TURNED T
    ('u', "n"), // LATIN SMALL LETTER N
    ('v', "ʌ"), // LATIN SMALL LETTER TURNED V
    ('w', "ʍ"), // LATIN SMALL LETTER TURNED W
    ('x', "x"), // LATIN SMALL LETTER X
    ('y', "ʎ"), // LATIN SMALL LETTER TURNED Y
    ('z', "z"), // LATIN SMALL LETTER Z
    ('0', "0"), // DIGIT ZERO
    ('1', "Ɩ"), // LATIN CAPITAL LETTER IOTA
    ('2', "ᄅ"), // HANGUL CHOSEONG RIEUL
    ('3', "Ɛ"), // LATIN CAPITAL LETTER OPEN E
    ('4', "ㄣ"), // BOPOMOFO LETTER EN
    ('5', "ϛ"), // GREEK SMALL LETTER STIGMA
    ('6', "9"), // DIGIT NINE
    ('7', "ㄥ"), // BOPOMOFO LETTER ENG
    ('8', "8"), // DIGIT EIGHT
    ('9', "6"), // DIGIT SIX
    ('!', "¡"), // INVERTED EXCLAMATION MARK
    ('"', "„"), // DOUBLE LOW-9 QUOTATION MARK
    ('&', "⅋"), // TURNED AMPERSAND
    ('\'', ","), // COMMA
    ('(', ")"), // RIGHT PARENTHESIS
    (')', "("), // LEFT PARENTHESIS
    (',', "'"), // APOSTROPHE
    ('.', "˙"), // DOT ABOVE
    (';', "؛"), // ARABIC SEMICOLON
    ('<', ">"), // GREATER-THAN SIGN
    ('>', "<"), // LESS-THAN SIGN
    ('?', "¿"), // INVERTED QUESTION MARK
    ('[', "]"), // RIGHT SQUARE BRACKET
    (']', "["), // LEFT SQUARE BRACKET
    ('_', "‾"), // OVERLINE
    ('{', "}"), // RIGHT CURLY BRACKET
    ('}', "{"), // LEFT CURLY BRACKET
];

/// Mirror-image look-alikes; symmetric letters are simply absent.
pub const MIRRORED: &[(char, &str)] = &[
    ('B', "ꓭ"), // LISU LETTER GHA
    ('C', "Ɔ"), // LATIN CAPITAL LETTER OPEN O
    ('D', "ꓷ"), // LISU LETTER OE
    ('E', "Ǝ"), // LATIN CAPITAL LETTER REVERSED E
    ('F', "ꟻ"), // LATIN EPIGRAPHIC LETTER REVERSED F
    ('G', "Ә"), // CYRILLIC CAPITAL LETTER SCHWA
    ('J', "Ⴑ"), // GEORGIAN CAPITAL LETTER SAN
    ('K', "ꓘ"), // LISU LETTER KHA
    ('L', "⅃"), // REVERSED SANS-SERIF CAPITAL L
    ('N', "И"), // CYRILLIC CAPITAL LETTER I
    ('P', "ꟼ"), // LATIN EPIGRAPHIC LETTER REVERSED P
    ('Q', "Ọ"), // LATIN CAPITAL LETTER O WITH DOT BELOW
    ('R', "Я"), // CYRILLIC CAPITAL LETTER YA
    ('S', "Ꙅ"), // CYRILLIC CAPITAL LETTER REVERSED DZE
    ('Z', "Ƹ"), // LATIN CAPITAL LETTER EZH REVERSED
    ('a', "ɒ"), // LATIN SMALL LETTER TURNED ALPHA
    ('b', "d"), // LATIN SMALL LETTER D
    ('c', "ɔ"), // LATIN SMALL LETTER OPEN O
    ('d', "b"), // LATIN SMALL LETTER B
    ('e', "ɘ"), // LATIN SMALL LETTER REVERSED E
    ('f', "ꟻ"), // LATIN EPIGRAPHIC LETTER REVERSED F
    ('g', "ǫ"), // LATIN SMALL LETTER O WITH OGONEK
    ('j', "į"), // LATIN SMALL LETTER I WITH OGONEK
    ('k', "ʞ"), // LATIN SMALL LETTER TURNED K
    ('n', "ᴎ"), // LATIN LETTER SMALL CAPITAL REVERSED N
    ('p', "q"), // LATIN SMALL LETTER Q
    ('q', "p"), // LATIN SMALL LETTER P
    ('r', "ᴙ"), // LATIN LETTER SMALL CAPITAL REVERSED R
    ('s', "ꙅ"), // CYRILLIC SMALL LETTER REVERSED DZE
    ('t', "ƚ"), // LATIN SMALL LETTER L WITH BAR
    ('z', "ƹ"), // LATIN SMALL LETTER EZH REVERSED
    ('3', "Ɛ"), // LATIN CAPITAL LETTER OPEN E
    ('7', "ㄥ"), // BOPOMOFO LETTER ENG
    ('?', "⸮"), // REVERSED QUESTION MARK
];

/// Quarter-turn counterclockwise look-alikes.
pub const ROTATED_LEFT: &[(char, &str)] = &[
    ('A', "ᐊ"), // CANADIAN SYLLABICS A
    ('C', "∪"), // UNION
    ('D', "ᑎ"), // CANADIAN SYLLABICS TI
    ('E', "ш"), // CYRILLIC SMALL LETTER SHA
    ('H', "エ"), // KATAKANA LETTER E
    ('I', "H"), // LATIN CAPITAL LETTER H
    ('L', "Γ"), // GREEK CAPITAL LETTER GAMMA
    ('M', "Σ"), // GREEK CAPITAL LETTER SIGMA
    ('N', "Z"), // LATIN CAPITAL LETTER Z
    ('T', "⊢"), // RIGHT TACK
    ('U', "⊃"), // SUPERSET OF
    ('V', ">"), // GREATER-THAN SIGN
    ('Z', "N"), // LATIN CAPITAL LETTER N
    ('c', "ᴗ"), // LATIN SMALL LETTER BOTTOM HALF O
    ('o', "ᴑ"), // LATIN SMALL LETTER SIDEWAYS O
    ('u', "ɔ"), // LATIN SMALL LETTER OPEN O
    ('v', ">"), // GREATER-THAN SIGN
];

/// Quarter-turn clockwise look-alikes.
pub const ROTATED_RIGHT: &[(char, &str)] = &[
    ('A', "ᐅ"), // CANADIAN SYLLABICS O
    ('C', "∩"), // INTERSECTION
    ('D', "ᑌ"), // CANADIAN SYLLABICS TE
    ('E', "ᴟ"), // LATIN SMALL LETTER SIDEWAYS TURNED M
    ('H', "エ"), // KATAKANA LETTER E
    ('I', "H"), // LATIN CAPITAL LETTER H
    ('L', "˥"), // MODIFIER LETTER EXTRA-HIGH TONE BAR
    ('M', "Ɛ"), // LATIN CAPITAL LETTER OPEN E
    ('N', "Z"), // LATIN CAPITAL LETTER Z
    ('T', "⊣"), // LEFT TACK
    ('U', "⊂"), // SUBSET OF
    ('V', "<"), // LESS-THAN SIGN
    ('Z', "N"), // LATIN CAPITAL LETTER N
    ('c', "ᴖ"), // LATIN SMALL LETTER TOP HALF O
    ('m', "ᴟ"), // LATIN SMALL LETTER SIDEWAYS TURNED M
    ('o', "ᴑ"), // LATIN SMALL LETTER SIDEWAYS O
    ('v', "<"), // LESS-THAN SIGN
];
