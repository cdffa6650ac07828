//! Metrics for the standard PDF Type1 fonts that AcroForm default appearances
//! usually reference (`/Helv`, `/TiRo`, `/Cour`, ...).
//!
//! Widths are in 1/1000 em units, indexed by WinAnsiEncoding character code, and
//! come from the Adobe AFM files. Vertical metrics use the AFM ascender and the
//! font bounding box.

use crate::units::Pt;

/// A built-in font whose metrics don't need a font file
#[derive(Debug)]
pub struct StandardFont {
    /// PostScript name of the font
    pub name: &'static str,
    /// Glyph advances by WinAnsi code, in 1/1000 em
    pub widths: [u16; 256],
    pub ascender: i16,
    pub descender: i16,
    /// [llx, lly, urx, ury] in 1/1000 em
    pub bbox: [i16; 4],
}

/// Look up a standard font by its PostScript name or by the short resource name
/// form authoring tools put in the AcroForm `/DR` dictionary.
///
/// Oblique variants share the widths of their upright counterparts.
pub fn lookup(name: &str) -> Option<&'static StandardFont> {
    match name {
        "Helvetica" | "Helvetica-Oblique" | "Helv" => Some(&HELVETICA),
        "Helvetica-Bold" | "Helvetica-BoldOblique" | "HeBo" => Some(&HELVETICA_BOLD),
        "Times-Roman" | "TiRo" => Some(&TIMES_ROMAN),
        "Courier" | "Courier-Bold" | "Courier-Oblique" | "Courier-BoldOblique" | "Cour" => {
            Some(&COURIER)
        }
        _ => None,
    }
}

/// Map a character onto its WinAnsiEncoding code, if it has one
pub fn winansi_code(ch: char) -> Option<u8> {
    let code = match ch {
        ' '..='~' | '\u{A0}'..='\u{FF}' => ch as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(code)
}

impl StandardFont {
    /// Calculate the width of a string at the given size. Characters outside of
    /// WinAnsiEncoding are measured as `?`, which is what gets drawn for them.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|ch| self.widths[winansi_code(ch).unwrap_or(b'?') as usize] as u32)
            .sum();
        Pt(units as f32 * size.0 / 1000.0)
    }

    /// Distance from the baseline to the top of the tallest glyphs
    pub fn ascent(&self, size: Pt) -> Pt {
        Pt(self.ascender as f32 * size.0 / 1000.0)
    }

    /// Distance from the baseline to the bottom of the descenders; usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        Pt(self.descender as f32 * size.0 / 1000.0)
    }

    /// Height of one line of text, taken from the font bounding box
    pub fn line_height(&self, size: Pt) -> Pt {
        let [_, lly, _, ury] = self.bbox;
        Pt((ury - lly) as f32 * size.0 / 1000.0)
    }
}

pub static COURIER: StandardFont = StandardFont {
    name: "Courier",
    widths: [600; 256],
    ascender: 629,
    descender: -157,
    bbox: [-23, -250, 715, 805],
};

#[rustfmt::skip]
pub static HELVETICA: StandardFont = StandardFont {
    name: "Helvetica",
    widths: [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        // space ! " # $ % & ' ( ) * + , - . /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9 : ; < = > ?
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
        // @ A-O
        1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
        // P-Z [ \ ] ^ _
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
        // ` a-o
        333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
        // p-z { | } ~
        556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
        556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
        0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
        278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
    ],
    ascender: 718,
    descender: -207,
    bbox: [-166, -225, 1000, 931],
};

#[rustfmt::skip]
pub static HELVETICA_BOLD: StandardFont = StandardFont {
    name: "Helvetica-Bold",
    widths: [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
        975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
        333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
        611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
        556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
        0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
        278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
        611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
    ],
    ascender: 718,
    descender: -207,
    bbox: [-170, -228, 1003, 962],
};

#[rustfmt::skip]
pub static TIMES_ROMAN: StandardFont = StandardFont {
    name: "Times-Roman",
    widths: [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
        921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
        556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
        333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
        500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541, 0,
        500, 0, 333, 500, 444, 1000, 500, 500, 333, 1000, 556, 333, 889, 0, 611, 0,
        0, 333, 333, 444, 444, 350, 500, 1000, 333, 980, 389, 333, 722, 0, 444, 722,
        250, 333, 500, 500, 500, 500, 200, 500, 333, 760, 276, 500, 564, 333, 760, 333,
        400, 564, 300, 300, 333, 500, 453, 250, 333, 300, 310, 500, 750, 750, 750, 444,
        722, 722, 722, 722, 722, 722, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
        722, 722, 722, 722, 722, 722, 722, 564, 722, 722, 722, 722, 722, 722, 556, 500,
        444, 444, 444, 444, 444, 444, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
        500, 500, 500, 500, 500, 500, 500, 564, 500, 500, 500, 500, 500, 500, 500, 500,
    ],
    ascender: 683,
    descender: -217,
    bbox: [-168, -218, 1000, 898],
};
