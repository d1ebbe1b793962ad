//! Alphabets borrowed from the Vai, Bamum, Cherokee, and Canadian
//! Aboriginal Syllabics blocks purely for visual resemblance to Latin
//! letters. The borrowed characters keep their own sounds and meanings;
//! nothing linguistic is implied. Both Latin cases fold onto one borrowed
//! letter, and letters with no convincing look-alike pass through.

/// Vai syllables (U+A500 block).
pub const VAI_LETTERLIKE: &[(char, &str)] = &[
    ('A', "ꕉ"), // VAI SYLLABLE A
    ('B', "ꕗ"), // VAI SYLLABLE GBA
    ('C', "ꖢ"), // VAI SYLLABLE FU
    ('D', "ꖡ"), // VAI SYLLABLE GBU
    ('E', "ꕌ"), // VAI SYLLABLE HA
    ('F', "ꖴ"), // VAI SYLLABLE KU
    ('G', "ꕮ"), // VAI SYLLABLE MA
    ('H', "ꖧ"), // VAI SYLLABLE DHHU
    ('I', "ꖅ"), // VAI SYLLABLE DOO
    ('J', "ꔍ"), // VAI SYLLABLE VEE
    ('K', "ꕛ"), // VAI SYLLABLE THA
    ('L', "ꖏ"), // VAI SYLLABLE KOO
    ('M', "ꔮ"), // VAI SYLLABLE KPI
    ('N', "ꕯ"), // VAI SYLLABLE NA
    ('O', "ꕱ"), // VAI SYLLABLE OO
    ('P', "ꕞ"), // VAI SYLLABLE LA
    ('Q', "ꕓ"), // VAI SYLLABLE MBA
    ('R', "ꕢ"), // VAI SYLLABLE SA
    ('S', "ꕬ"), // VAI SYLLABLE NGGA
    ('T', "ꕊ"), // VAI SYLLABLE AN
    ('U', "ꕟ"), // VAI SYLLABLE RA
    ('V', "ꔨ"), // VAI SYLLABLE WI
    ('W', "ꔸ"), // VAI SYLLABLE RI
    ('X', "ꗤ"), // VAI SYLLABLE HE
    ('Y', "ꕶ"), // VAI SYLLABLE POO
    ('Z', "ꗎ"), // VAI SYLLABLE DHHO
    ('a', "ꕉ"), // VAI SYLLABLE A
    ('b', "ꕗ"), // VAI SYLLABLE GBA
    ('c', "ꖢ"), // VAI SYLLABLE FU
    ('d', "ꖡ"), // VAI SYLLABLE GBU
    ('e', "ꕌ"), // VAI SYLLABLE HA
    ('f', "ꖴ"), // VAI SYLLABLE KU
    ('g', "ꕮ"), // VAI SYLLABLE MA
    ('h', "ꖧ"), // VAI SYLLABLE DHHU
    ('i', "ꖅ"), // VAI SYLLABLE DOO
    ('j', "ꔍ"), // VAI SYLLABLE VEE
    ('k', "ꕛ"), // VAI SYLLABLE THA
    ('l', "ꖏ"), // VAI SYLLABLE KOO
    ('m', "ꔮ"), // VAI SYLLABLE KPI
    ('n', "ꕯ"), // VAI SYLLABLE NA
    ('o', "ꕱ"), // VAI SYLLABLE OO
    ('p', "ꕞ"), // VAI SYLLABLE LA
    ('q', "ꕓ"), // VAI SYLLABLE MBA
    ('r', "ꕢ"), // VAI SYLLABLE SA
    ('s', "ꕬ"), // VAI SYLLABLE NGGA
    ('t', "ꕊ"), // VAI SYLLABLE AN
    ('u', "ꕟ"), // VAI SYLLABLE RA
    ('v', "ꔨ"), // VAI SYLLABLE WI
    ('w', "ꔸ"), // VAI SYLLABLE RI
    ('x', "ꗤ"), // VAI SYLLABLE HE
    ('y', "ꕶ"), // VAI SYLLABLE POO
    ('z', "ꗎ"), // VAI SYLLABLE DHHO
];

/// Bamum letters (U+A6A0 block).
pub const BAMUM_LETTERLIKE: &[(char, &str)] = &[
    ('A', "ꛎ"), // BAMUM LETTER MI
    ('B', "ꛒ"), // BAMUM LETTER KEN
    ('C', "ꛅ"), // BAMUM LETTER PEUX
    ('D', "ꛦ"), // BAMUM LETTER MO
    ('E', "ꛍ"), // BAMUM LETTER LU
    ('F', "ꛄ"), // BAMUM LETTER KEUX
    ('G', "ꛢ"), // BAMUM LETTER MEN
    ('H', "ꛛ"), // BAMUM LETTER NA
    ('I', "ꛉ"), // BAMUM LETTER WUE
    ('J', "ꛊ"), // BAMUM LETTER PEE
    ('K', "ꛋ"), // BAMUM LETTER FEE
    ('L', "ꛀ"), // BAMUM LETTER SHU
    ('M', "ꛁ"), // BAMUM LETTER YUQ
    ('N', "ꛂ"), // BAMUM LETTER YA
    ('O', "ꛃ"), // BAMUM LETTER NSHA
    ('P', "ꛗ"), // BAMUM LETTER PUAE
    ('Q', "ꛘ"), // BAMUM LETTER FU
    ('R', "ꛙ"), // BAMUM LETTER FOM
    ('S', "ꛚ"), // BAMUM LETTER WA
    ('T', "ꛧ"), // BAMUM LETTER MBAA
    ('U', "ꛨ"), // BAMUM LETTER TET
    ('V', "ꛩ"), // BAMUM LETTER KPA
    ('W', "ꛪ"), // BAMUM LETTER TEN
    ('X', "ꛫ"), // BAMUM LETTER NTUU
    ('Y', "ꛬ"), // BAMUM LETTER SAMBA
    ('Z', "ꛭ"), // BAMUM LETTER FAAMAE
    ('a', "ꛎ"), // BAMUM LETTER MI
    ('b', "ꛒ"), // BAMUM LETTER KEN
    ('c', "ꛅ"), // BAMUM LETTER PEUX
    ('d', "ꛦ"), // BAMUM LETTER MO
    ('e', "ꛍ"), // BAMUM LETTER LU
    ('f', "ꛄ"), // BAMUM LETTER KEUX
    ('g', "ꛢ"), // BAMUM LETTER MEN
    ('h', "ꛛ"), // BAMUM LETTER NA
    ('i', "ꛉ"), // BAMUM LETTER WUE
    ('j', "ꛊ"), // BAMUM LETTER PEE
    ('k', "ꛋ"), // BAMUM LETTER FEE
    ('l', "ꛀ"), // BAMUM LETTER SHU
    ('m', "ꛁ"), // BAMUM LETTER YUQ
    ('n', "ꛂ"), // BAMUM LETTER YA
    ('o', "ꛃ"), // BAMUM LETTER NSHA
    ('p', "ꛗ"), // BAMUM LETTER PUAE
    ('q', "ꛘ"), // BAMUM LETTER FU
    ('r', "ꛙ"), // BAMUM LETTER FOM
    ('s', "ꛚ"), // BAMUM LETTER WA
    ('t', "ꛧ"), // BAMUM LETTER MBAA
    ('u', "ꛨ"), // BAMUM LETTER TET
    ('v', "ꛩ"), // BAMUM LETTER KPA
    ('w', "ꛪ"), // BAMUM LETTER TEN
    ('x', "ꛫ"), // BAMUM LETTER NTUU
    ('y', "ꛬ"), // BAMUM LETTER SAMBA
    ('z', "ꛭ"), // BAMUM LETTER FAAMAE
];

/// Cherokee small letters (U+AB70 block).
pub const SMALL_CHEROKEE_LETTERLIKE: &[(char, &str)] = &[
    ('A', "ꭺ"), // CHEROKEE SMALL LETTER GO
    ('B', "ᏼ"), // CHEROKEE SMALL LETTER YV
    ('C', "ꮯ"), // CHEROKEE SMALL LETTER TLI
    ('D', "ꭰ"), // CHEROKEE SMALL LETTER A
    ('E', "ꭼ"), // CHEROKEE SMALL LETTER GV
    ('G', "ꮐ"), // CHEROKEE SMALL LETTER NAH
    ('H', "ꮋ"), // CHEROKEE SMALL LETTER MI
    ('I', "ꭵ"), // CHEROKEE SMALL LETTER V
    ('J', "ꭻ"), // CHEROKEE SMALL LETTER GU
    ('K', "ꮶ"), // CHEROKEE SMALL LETTER TSO
    ('L', "ꮮ"), // CHEROKEE SMALL LETTER TLE
    ('M', "ꮇ"), // CHEROKEE SMALL LETTER LU
    ('N', "ꮑ"), // CHEROKEE SMALL LETTER NE
    ('O', "ꮎ"), // CHEROKEE SMALL LETTER NA
    ('P', "ꮲ"), // CHEROKEE SMALL LETTER TLV
    ('R', "ꭱ"), // CHEROKEE SMALL LETTER E
    ('S', "ꮥ"), // CHEROKEE SMALL LETTER DE
    ('T', "ꭲ"), // CHEROKEE SMALL LETTER I
    ('V', "ꮩ"), // CHEROKEE SMALL LETTER DO
    ('W', "ꮃ"), // CHEROKEE SMALL LETTER LA
    ('Y', "ꭹ"), // CHEROKEE SMALL LETTER GI
    ('Z', "ꮓ"), // CHEROKEE SMALL LETTER NO
    ('a', "ꭺ"), // CHEROKEE SMALL LETTER GO
    ('b', "ᏼ"), // CHEROKEE SMALL LETTER YV
    ('c', "ꮯ"), // CHEROKEE SMALL LETTER TLI
    ('d', "ꭰ"), // CHEROKEE SMALL LETTER A
    ('e', "ꭼ"), // CHEROKEE SMALL LETTER GV
    ('g', "ꮐ"), // CHEROKEE SMALL LETTER NAH
    ('h', "ꮋ"), // CHEROKEE SMALL LETTER MI
    ('i', "ꭵ"), // CHEROKEE SMALL LETTER V
    ('j', "ꭻ"), // CHEROKEE SMALL LETTER GU
    ('k', "ꮶ"), // CHEROKEE SMALL LETTER TSO
    ('l', "ꮮ"), // CHEROKEE SMALL LETTER TLE
    ('m', "ꮇ"), // CHEROKEE SMALL LETTER LU
    ('n', "ꮑ"), // CHEROKEE SMALL LETTER NE
    ('o', "ꮎ"), // CHEROKEE SMALL LETTER NA
    ('p', "ꮲ"), // CHEROKEE SMALL LETTER TLV
    ('r', "ꭱ"), // CHEROKEE SMALL LETTER E
    ('s', "ꮥ"), // CHEROKEE SMALL LETTER DE
    ('t', "ꭲ"), // CHEROKEE SMALL LETTER I
    ('v', "ꮩ"), // CHEROKEE SMALL LETTER DO
    ('w', "ꮃ"), // CHEROKEE SMALL LETTER LA
    ('y', "ꭹ"), // CHEROKEE SMALL LETTER GI
    ('z', "ꮓ"), // CHEROKEE SMALL LETTER NO
];

/// Canadian Aboriginal Syllabics, first look-alike set.
pub const CANADIAN_ABORIGINAL_LETTERLIKE_1: &[(char, &str)] = &[
    ('A', "ᗅ"), // CANADIAN SYLLABICS CARRIER GHO
    ('B', "ᗷ"), // CANADIAN SYLLABICS CARRIER KHE
    ('C', "ᑕ"), // CANADIAN SYLLABICS TA
    ('D', "ᗪ"), // CANADIAN SYLLABICS CARRIER PE
    ('E', "ᗴ"), // CANADIAN SYLLABICS CARRIER GA
    ('F', "ᖴ"), // CANADIAN SYLLABICS BLACKFOOT WE
    ('G', "ᘜ"), // CANADIAN SYLLABICS CARRIER JJU
    ('H', "ᕼ"), // CANADIAN SYLLABICS NUNAVUT H
    ('J', "ᒍ"), // CANADIAN SYLLABICS CO
    ('L', "ᒪ"), // CANADIAN SYLLABICS MA
    ('M', "ᗰ"), // CANADIAN SYLLABICS CARRIER GO
    ('N', "ᑎ"), // CANADIAN SYLLABICS TI
    ('P', "ᑭ"), // CANADIAN SYLLABICS KI
    ('Q', "ᑫ"), // CANADIAN SYLLABICS KE
    ('R', "ᖇ"), // CANADIAN SYLLABICS TLHI
    ('S', "ᔕ"), // CANADIAN SYLLABICS SHA
    ('U', "ᑌ"), // CANADIAN SYLLABICS TE
    ('V', "ᐯ"), // CANADIAN SYLLABICS PE
    ('W', "ᗯ"), // CANADIAN SYLLABICS CARRIER GU
    ('X', "᙭"), // CANADIAN SYLLABICS CHI SIGN
    ('Z', "ᘔ"), // CANADIAN SYLLABICS CARRIER JU
    ('a', "ᗅ"), // CANADIAN SYLLABICS CARRIER GHO
    ('b', "ᗷ"), // CANADIAN SYLLABICS CARRIER KHE
    ('c', "ᑕ"), // CANADIAN SYLLABICS TA
    ('d', "ᗪ"), // CANADIAN SYLLABICS CARRIER PE
    ('e', "ᗴ"), // CANADIAN SYLLABICS CARRIER GA
    ('f', "ᖴ"), // CANADIAN SYLLABICS BLACKFOOT WE
    ('g', "ᘜ"), // CANADIAN SYLLABICS CARRIER JJU
    ('h', "ᕼ"), // CANADIAN SYLLABICS NUNAVUT H
    ('j', "ᒍ"), // CANADIAN SYLLABICS CO
    ('l', "ᒪ"), // CANADIAN SYLLABICS MA
    ('m', "ᗰ"), // CANADIAN SYLLABICS CARRIER GO
    ('n', "ᑎ"), // CANADIAN SYLLABICS TI
    ('p', "ᑭ"), // CANADIAN SYLLABICS KI
    ('q', "ᑫ"), // CANADIAN SYLLABICS KE
    ('r', "ᖇ"), // CANADIAN SYLLABICS TLHI
    ('s', "ᔕ"), // CANADIAN SYLLABICS SHA
    ('u', "ᑌ"), // CANADIAN SYLLABICS TE
    ('v', "ᐯ"), // CANADIAN SYLLABICS PE
    ('w', "ᗯ"), // CANADIAN SYLLABICS CARRIER GU
    ('x', "᙭"), // CANADIAN SYLLABICS CHI SIGN
    ('z', "ᘔ"), // CANADIAN SYLLABICS CARRIER JU
];

/// Canadian Aboriginal Syllabics, second look-alike set.
pub const CANADIAN_ABORIGINAL_LETTERLIKE_2: &[(char, &str)] = &[
    ('A', "ᗩ"), // CANADIAN SYLLABICS CARRIER PO
    ('B', "ᙦ"), // CANADIAN SYLLABICS CARRIER CHA
    ('C', "ᑢ"), // CANADIAN SYLLABICS WEST-CREE TWA
    ('D', "ᕲ"), // CANADIAN SYLLABICS TYO
    ('E', "ᘿ"), // CANADIAN SYLLABICS CARRIER TLA
    ('F', "ᖴ"), // CANADIAN SYLLABICS BLACKFOOT WE
    ('G', "ᘜ"), // CANADIAN SYLLABICS CARRIER JJU
    ('H', "ᕼ"), // CANADIAN SYLLABICS NUNAVUT H
    ('I', "ᓰ"), // CANADIAN SYLLABICS SII
    ('J', "ᒚ"), // CANADIAN SYLLABICS CWOO
    ('L', "ᒪ"), // CANADIAN SYLLABICS MA
    ('M', "ᘻ"), // CANADIAN SYLLABICS CARRIER TLO
    ('N', "ᘉ"), // CANADIAN SYLLABICS CARRIER MO
    ('O', "ᓍ"), // CANADIAN SYLLABICS NWAA
    ('P', "ᕵ"), // CANADIAN SYLLABICS NUNAVIK HI
    ('Q', "ᕴ"), // CANADIAN SYLLABICS NUNAVIK HE
    ('R', "ᖇ"), // CANADIAN SYLLABICS TLHI
    ('S', "ᔑ"), // CANADIAN SYLLABICS SHI
    ('T', "ᐶ"), // CANADIAN SYLLABICS CARRIER HEE
    ('U', "ᘘ"), // CANADIAN SYLLABICS CARRIER JEE
    ('V', "ᐺ"), // CANADIAN SYLLABICS PWE
    ('W', "ᘺ"), // CANADIAN SYLLABICS CARRIER TLU
    ('X', "᙭"), // CANADIAN SYLLABICS CHI SIGN
    ('Y', "ᖻ"), // CANADIAN SYLLABICS BLACKFOOT NA
    ('Z', "ᙱ"), // CANADIAN SYLLABICS NNGI
    ('a', "ᗩ"), // CANADIAN SYLLABICS CARRIER PO
    ('b', "ᙦ"), // CANADIAN SYLLABICS CARRIER CHA
    ('c', "ᑢ"), // CANADIAN SYLLABICS WEST-CREE TWA
    ('d', "ᕲ"), // CANADIAN SYLLABICS TYO
    ('e', "ᘿ"), // CANADIAN SYLLABICS CARRIER TLA
    ('f', "ᖴ"), // CANADIAN SYLLABICS BLACKFOOT WE
    ('g', "ᘜ"), // CANADIAN SYLLABICS CARRIER JJU
    ('h', "ᕼ"), // CANADIAN SYLLABICS NUNAVUT H
    ('i', "ᓰ"), // CANADIAN SYLLABICS SII
    ('j', "ᒚ"), // CANADIAN SYLLABICS CWOO
    ('l', "ᒪ"), // CANADIAN SYLLABICS MA
    ('m', "ᘻ"), // CANADIAN SYLLABICS CARRIER TLO
    ('n', "ᘉ"), // CANADIAN SYLLABICS CARRIER MO
    ('o', "ᓍ"), // CANADIAN SYLLABICS NWAA
    ('p', "ᕵ"), // CANADIAN SYLLABICS NUNAVIK HI
    ('q', "ᕴ"), // CANADIAN SYLLABICS NUNAVIK HE
    ('r', "ᖇ"), // CANADIAN SYLLABICS TLHI
    ('s', "ᔑ"), // CANADIAN SYLLABICS SHI
    ('t', "ᐶ"), // CANADIAN SYLLABICS CARRIER HEE
    ('u', "ᘘ"), // CANADIAN SYLLABICS CARRIER JEE
    ('v', "ᐺ"), // CANADIAN SYLLABICS PWE
    ('w', "ᘺ"), // CANADIAN SYLLABICS CARRIER TLU
    ('x', "᙭"), // CANADIAN SYLLABICS CHI SIGN
    ('y', "ᖻ"), // CANADIAN SYLLABICS BLACKFOOT NA
    ('z', "ᙱ"), // CANADIAN SYLLABICS NNGI
];
