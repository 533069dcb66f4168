//! WinAnsiEncoding for text shown with the standard fonts.
//!
//! Based on PDF Reference 1.7, Appendix D.2 "Latin Character Set and Encodings".

/// Byte written for characters WinAnsi cannot represent.
pub const REPLACEMENT: u8 = b'?';

/// Characters placed in the 0x80..=0x9F block, which differs from Latin-1.
const WIN_ANSI_HIGH: &[(char, u8)] = &[
    ('\u{20AC}', 0x80), // Euro
    ('\u{201A}', 0x82), // quotesinglbase
    ('\u{0192}', 0x83), // florin
    ('\u{201E}', 0x84), // quotedblbase
    ('\u{2026}', 0x85), // ellipsis
    ('\u{2020}', 0x86), // dagger
    ('\u{2021}', 0x87), // daggerdbl
    ('\u{02C6}', 0x88), // circumflex
    ('\u{2030}', 0x89), // perthousand
    ('\u{0160}', 0x8A), // Scaron
    ('\u{2039}', 0x8B), // guilsinglleft
    ('\u{0152}', 0x8C), // OE
    ('\u{017D}', 0x8E), // Zcaron
    ('\u{2018}', 0x91), // quoteleft
    ('\u{2019}', 0x92), // quoteright
    ('\u{201C}', 0x93), // quotedblleft
    ('\u{201D}', 0x94), // quotedblright
    ('\u{2022}', 0x95), // bullet
    ('\u{2013}', 0x96), // endash
    ('\u{2014}', 0x97), // emdash
    ('\u{02DC}', 0x98), // tilde
    ('\u{2122}', 0x99), // trademark
    ('\u{0161}', 0x9A), // scaron
    ('\u{203A}', 0x9B), // guilsinglright
    ('\u{0153}', 0x9C), // oe
    ('\u{017E}', 0x9E), // zcaron
    ('\u{0178}', 0x9F), // Ydieresis
];

/// Maps one character to its WinAnsi byte.
pub fn encode_char(c: char) -> Option<u8> {
    match u32::from(c) {
        code @ (0x20..=0x7E | 0xA0..=0xFF) => u8::try_from(code).ok(),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|&&(ch, _)| ch == c)
            .map(|&(_, byte)| byte),
    }
}

/// Encodes text, replacing unmappable characters with `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| encode_char(c).unwrap_or(REPLACEMENT))
        .collect()
}
