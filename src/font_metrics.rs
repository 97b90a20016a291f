//! Advance widths of the standard Helvetica faces
//!
//! The contract only uses the base-14 Helvetica fonts, so measurement comes
//! from the published AFM widths (1/1000 em) instead of a parsed font file.

use crate::geometry::PT_TO_MM;
use crate::types::FontWeight;

/// Helvetica widths for U+0020..=U+007E
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Helvetica-Bold widths for U+0020..=U+007E
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

const DEFAULT_WIDTH: u16 = 556;

/// Width of one character in 1/1000 em
pub fn char_width(ch: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    let lookup = |c: char| table[c as usize - 0x20];
    match ch {
        ' '..='~' => lookup(ch),
        '•' => 350,
        '€' => 556,
        '³' | '²' => 333,
        'ß' => 611,
        // Accented Latin-1 letters share the advance of their base letter
        'À'..='Å' => lookup('A'),
        'Ç' => lookup('C'),
        'È'..='Ë' => lookup('E'),
        'Ì'..='Ï' => lookup('I'),
        'Ñ' => lookup('N'),
        'Ò'..='Ö' | 'Ø' => lookup('O'),
        'Ù'..='Ü' => lookup('U'),
        'à'..='å' => lookup('a'),
        'ç' => lookup('c'),
        'è'..='ë' => lookup('e'),
        'ì'..='ï' => lookup('i'),
        'ñ' => lookup('n'),
        'ò'..='ö' | 'ø' => lookup('o'),
        'ù'..='ü' => lookup('u'),
        _ => DEFAULT_WIDTH,
    }
}

/// Rendered width of `text` in millimetres at `size` points
pub fn text_width_mm(text: &str, size: f64, weight: FontWeight) -> f64 {
    let units: u32 = text.chars().map(|c| char_width(c, weight) as u32).sum();
    units as f64 / 1000.0 * size * PT_TO_MM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_lookup() {
        assert_eq!(char_width('A', FontWeight::Regular), 667);
        assert_eq!(char_width('i', FontWeight::Regular), 222);
        assert_eq!(char_width('i', FontWeight::Bold), 278);
        assert_eq!(char_width('~', FontWeight::Bold), 584);
    }

    #[test]
    fn test_umlauts_use_base_letter() {
        assert_eq!(char_width('ü', FontWeight::Regular), char_width('u', FontWeight::Regular));
        assert_eq!(char_width('Ä', FontWeight::Bold), char_width('A', FontWeight::Bold));
    }

    #[test]
    fn test_width_scales_with_size() {
        let small = text_width_mm("Contract", 10.0, FontWeight::Regular);
        let large = text_width_mm("Contract", 20.0, FontWeight::Regular);
        assert!((large - 2.0 * small).abs() < 1e-9);
        // 10 spaces at 10pt: 2780/1000 * 10pt = 27.8pt
        assert!((text_width_mm("          ", 10.0, FontWeight::Regular) - 27.8 * PT_TO_MM).abs() < 1e-9);
    }
}
