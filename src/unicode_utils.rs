//! Unicode utilities for PDF text rendering
//!
//! Text is shown with the standard Helvetica fonts under WinAnsiEncoding
//! (Windows-1252). Latin-1 characters map to themselves; the 0x80-0x9F block
//! carries typographic extras such as the bullet and the euro sign.

/// Byte used for characters WinAnsiEncoding cannot express
pub const REPLACEMENT: u8 = b'?';

/// Map a single character to its WinAnsiEncoding byte
pub fn winansi_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E => Some(code as u8),
        0xA0..=0xFF => Some(code as u8),
        _ => match ch {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            '\t' => Some(b' '),
            _ => None,
        },
    }
}

/// Convert Unicode string to WinAnsiEncoding bytes for PDF text rendering
///
/// Characters outside the encoding are replaced with '?'.
pub fn unicode_to_winansi(text: &str) -> Vec<u8> {
    text.chars().map(|ch| winansi_byte(ch).unwrap_or(REPLACEMENT)).collect()
}
