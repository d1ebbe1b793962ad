//! Enclosed and wide letterforms: fullwidth, circled, parenthesized, and
//! squared alphabets.
//!
//! The negative-circled and squared blocks only encode capitals, so lowercase
//! input folds onto the capital form there.

/// Halfwidth and Fullwidth Forms: ＡＢＣ…, ASCII punctuation, space → ideographic space.
pub const FULLWIDTH: &[(char, &str)] = &[
    ('A', "Ａ"), ('B', "Ｂ"), ('C', "Ｃ"), ('D', "Ｄ"),
    ('E', "Ｅ"), ('F', "Ｆ"), ('G', "Ｇ"), ('H', "Ｈ"),
    ('I', "Ｉ"), ('J', "Ｊ"), ('K', "Ｋ"), ('L', "Ｌ"),
    ('M', "Ｍ"), ('N', "Ｎ"), ('O', "Ｏ"), ('P', "Ｐ"),
    ('Q', "Ｑ"), ('R', "Ｒ"), ('S', "Ｓ"), ('T', "Ｔ"),
    ('U', "Ｕ"), ('V', "Ｖ"), ('W', "Ｗ"), ('X', "Ｘ"),
    ('Y', "Ｙ"), ('Z', "Ｚ"),
    ('a', "ａ"), ('b', "ｂ"), ('c', "ｃ"), ('d', "ｄ"),
    ('e', "ｅ"), ('f', "ｆ"), ('g', "ｇ"), ('h', "ｈ"),
    ('i', "ｉ"), ('j', "ｊ"), ('k', "ｋ"), ('l', "ｌ"),
    ('m', "ｍ"), ('n', "ｎ"), ('o', "ｏ"), ('p', "ｐ"),
    ('q', "ｑ"), ('r', "ｒ"), ('s', "ｓ"), ('t', "ｔ"),
    ('u', "ｕ"), ('v', "ｖ"), ('w', "ｗ"), ('x', "ｘ"),
    ('y', "ｙ"), ('z', "ｚ"),
    ('0', "０"), ('1', "１"), ('2', "２"), ('3', "３"),
    ('4', "４"), ('5', "５"), ('6', "６"), ('7', "７"),
    ('8', "８"), ('9', "９"),
    (' ', "　"), ('!', "！"), ('"', "＂"), ('#', "＃"),
    ('$', "＄"), ('%', "％"), ('&', "＆"), ('\'', "＇"),
    ('(', "（"), (')', "）"), ('*', "＊"), ('+', "＋"),
    (',', "，"), ('-', "－"), ('.', "．"), ('/', "／"),
    (':', "："), (';', "；"), ('<', "＜"), ('=', "＝"),
    ('>', "＞"), ('?', "？"), ('@', "＠"), ('[', "［"),
    ('\\', "＼"), (']', "］"), ('^', "＾"), ('_', "＿"),
    ('`', "｀"), ('{', "｛"), ('|', "｜"), ('}', "｝"),
    ('~', "～"),
];

/// Enclosed Alphanumerics, circled: Ⓐ-ⓩ, ①-⑨, ⓪.
pub const BUBBLE: &[(char, &str)] = &[
    ('A', "Ⓐ"), ('B', "Ⓑ"), ('C', "Ⓒ"), ('D', "Ⓓ"),
    ('E', "Ⓔ"), ('F', "Ⓕ"), ('G', "Ⓖ"), ('H', "Ⓗ"),
    ('I', "Ⓘ"), ('J', "Ⓙ"), ('K', "Ⓚ"), ('L', "Ⓛ"),
    ('M', "Ⓜ"), ('N', "Ⓝ"), ('O', "Ⓞ"), ('P', "Ⓟ"),
    ('Q', "Ⓠ"), ('R', "Ⓡ"), ('S', "Ⓢ"), ('T', "Ⓣ"),
    ('U', "Ⓤ"), ('V', "Ⓥ"), ('W', "Ⓦ"), ('X', "Ⓧ"),
    ('Y', "Ⓨ"), ('Z', "Ⓩ"),
    ('a', "ⓐ"), ('b', "ⓑ"), ('c', "ⓒ"), ('d', "ⓓ"),
    ('e', "ⓔ"), ('f', "ⓕ"), ('g', "ⓖ"), ('h', "ⓗ"),
    ('i', "ⓘ"), ('j', "ⓙ"), ('k', "ⓚ"), ('l', "ⓛ"),
    ('m', "ⓜ"), ('n', "ⓝ"), ('o', "ⓞ"), ('p', "ⓟ"),
    ('q', "ⓠ"), ('r', "ⓡ"), ('s', "ⓢ"), ('t', "ⓣ"),
    ('u', "ⓤ"), ('v', "ⓥ"), ('w', "ⓦ"), ('x', "ⓧ"),
    ('y', "ⓨ"), ('z', "ⓩ"),
    ('0', "⓪"), ('1', "①"), ('2', "②"), ('3', "③"),
    ('4', "④"), ('5', "⑤"), ('6', "⑥"), ('7', "⑦"),
    ('8', "⑧"), ('9', "⑨"),
];

/// Negative circled: 🅐-🅩 (both cases), ❶-❾, ⓿.
pub const BLACK_BUBBLE: &[(char, &str)] = &[
    ('A', "🅐"), ('B', "🅑"), ('C', "🅒"), ('D', "🅓"),
    ('E', "🅔"), ('F', "🅕"), ('G', "🅖"), ('H', "🅗"),
    ('I', "🅘"), ('J', "🅙"), ('K', "🅚"), ('L', "🅛"),
    ('M', "🅜"), ('N', "🅝"), ('O', "🅞"), ('P', "🅟"),
    ('Q', "🅠"), ('R', "🅡"), ('S', "🅢"), ('T', "🅣"),
    ('U', "🅤"), ('V', "🅥"), ('W', "🅦"), ('X', "🅧"),
    ('Y', "🅨"), ('Z', "🅩"),
    ('a', "🅐"), ('b', "🅑"), ('c', "🅒"), ('d', "🅓"),
    ('e', "🅔"), ('f', "🅕"), ('g', "🅖"), ('h', "🅗"),
    ('i', "🅘"), ('j', "🅙"), ('k', "🅚"), ('l', "🅛"),
    ('m', "🅜"), ('n', "🅝"), ('o', "🅞"), ('p', "🅟"),
    ('q', "🅠"), ('r', "🅡"), ('s', "🅢"), ('t', "🅣"),
    ('u', "🅤"), ('v', "🅥"), ('w', "🅦"), ('x', "🅧"),
    ('y', "🅨"), ('z', "🅩"),
    ('0', "⓿"), ('1', "❶"), ('2', "❷"), ('3', "❸"),
    ('4', "❹"), ('5', "❺"), ('6', "❻"), ('7', "❼"),
    ('8', "❽"), ('9', "❾"),
];

/// Parenthesized: 🄐-🄩, ⒜-⒵, ⑴-⑼.
pub const PARENTHESIZED: &[(char, &str)] = &[
    ('A', "🄐"), ('B', "🄑"), ('C', "🄒"), ('D', "🄓"),
    ('E', "🄔"), ('F', "🄕"), ('G', "🄖"), ('H', "🄗"),
    ('I', "🄘"), ('J', "🄙"), ('K', "🄚"), ('L', "🄛"),
    ('M', "🄜"), ('N', "🄝"), ('O', "🄞"), ('P', "🄟"),
    ('Q', "🄠"), ('R', "🄡"), ('S', "🄢"), ('T', "🄣"),
    ('U', "🄤"), ('V', "🄥"), ('W', "🄦"), ('X', "🄧"),
    ('Y', "🄨"), ('Z', "🄩"),
    ('a', "⒜"), ('b', "⒝"), ('c', "⒞"), ('d', "⒟"),
    ('e', "⒠"), ('f', "⒡"), ('g', "⒢"), ('h', "⒣"),
    ('i', "⒤"), ('j', "⒥"), ('k', "⒦"), ('l', "⒧"),
    ('m', "⒨"), ('n', "⒩"), ('o', "⒪"), ('p', "⒫"),
    ('q', "⒬"), ('r', "⒭"), ('s', "⒮"), ('t', "⒯"),
    ('u', "⒰"), ('v', "⒱"), ('w', "⒲"), ('x', "⒳"),
    ('y', "⒴"), ('z', "⒵"),
    ('1', "⑴"), ('2', "⑵"), ('3', "⑶"), ('4', "⑷"),
    ('5', "⑸"), ('6', "⑹"), ('7', "⑺"), ('8', "⑻"),
    ('9', "⑼"),
];

/// Squared capitals: 🄰-🅉 (both cases).
pub const SQUARED: &[(char, &str)] = &[
    ('A', "🄰"), ('B', "🄱"), ('C', "🄲"), ('D', "🄳"),
    ('E', "🄴"), ('F', "🄵"), ('G', "🄶"), ('H', "🄷"),
    ('I', "🄸"), ('J', "🄹"), ('K', "🄺"), ('L', "🄻"),
    ('M', "🄼"), ('N', "🄽"), ('O', "🄾"), ('P', "🄿"),
    ('Q', "🅀"), ('R', "🅁"), ('S', "🅂"), ('T', "🅃"),
    ('U', "🅄"), ('V', "🅅"), ('W', "🅆"), ('X', "🅇"),
    ('Y', "🅈"), ('Z', "🅉"),
    ('a', "🄰"), ('b', "🄱"), ('c', "🄲"), ('d', "🄳"),
    ('e', "🄴"), ('f', "🄵"), ('g', "🄶"), ('h', "🄷"),
    ('i', "🄸"), ('j', "🄹"), ('k', "🄺"), ('l', "🄻"),
    ('m', "🄼"), ('n', "🄽"), ('o', "🄾"), ('p', "🄿"),
    ('q', "🅀"), ('r', "🅁"), ('s', "🅂"), ('t', "🅃"),
    ('u', "🅄"), ('v', "🅅"), ('w', "🅆"), ('x', "🅇"),
    ('y', "🅈"), ('z', "🅉"),
];

/// Negative squared capitals: 🅰-🆉 (both cases).
pub const SQUARED_NEGATIVE: &[(char, &str)] = &[
    ('A', "🅰"), ('B', "🅱"), ('C', "🅲"), ('D', "🅳"),
    ('E', "🅴"), ('F', "🅵"), ('G', "🅶"), ('H', "🅷"),
    ('I', "🅸"), ('J', "🅹"), ('K', "🅺"), ('L', "🅻"),
    ('M', "🅼"), ('N', "🅽"), ('O', "🅾"), ('P', "🅿"),
    ('Q', "🆀"), ('R', "🆁"), ('S', "🆂"), ('T', "🆃"),
    ('U', "🆄"), ('V', "🆅"), ('W', "🆆"), ('X', "🆇"),
    ('Y', "🆈"), ('Z', "🆉"),
    ('a', "🅰"), ('b', "🅱"), ('c', "🅲"), ('d', "🅳"),
    ('e', "🅴"), ('f', "🅵"), ('g', "🅶"), ('h', "🅷"),
    ('i', "🅸"), ('j', "🅹"), ('k', "🅺"), ('l', "🅻"),
    ('m', "🅼"), ('n', "🅽"), ('o', "🅾"), ('p', "🅿"),
    ('q', "🆀"), ('r', "🆁"), ('s', "🆂"), ('t', "🆃"),
    ('u', "🆄"), ('v', "🆅"), ('w', "🆆"), ('x', "🆇"),
    ('y', "🆈"), ('z', "🆉"),
];
