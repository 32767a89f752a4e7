//! Base-14 font metrics for text fitting.
//!
//! Widths are in 1/1000 em, taken from the Adobe AFM files for the
//! printable ASCII range (0x20..=0x7E).

/// Standard PDF fonts used on a card. None of them are embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl BuiltinFont {
    pub const ALL: [BuiltinFont; 3] = [
        BuiltinFont::Helvetica,
        BuiltinFont::HelveticaBold,
        BuiltinFont::HelveticaOblique,
    ];

    /// PostScript name written to the font dictionary.
    pub fn base_font(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Key of the font inside the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "F1",
            BuiltinFont::HelveticaBold => "F2",
            BuiltinFont::HelveticaOblique => "F3",
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            // Oblique shares the upright advance widths.
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => &HELVETICA,
            BuiltinFont::HelveticaBold => &HELVETICA_BOLD,
        }
    }

    pub fn char_width(self, ch: char) -> u16 {
        let code = ch as u32;
        let idx = if (0x20..=0x7E).contains(&code) {
            (code - 0x20) as usize
        } else {
            (b'n' - 0x20) as usize
        };
        self.widths()[idx]
    }
}

/// Rendered width of `text` in points.
pub fn string_width(text: &str, font: BuiltinFont, size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(font.char_width(ch))).sum();
    units as f32 * size / 1000.0
}

/// Largest integer size in `min..=max` whose width is strictly below
/// `available`. Falls back to `min` when nothing fits.
pub fn fit_font_size(text: &str, font: BuiltinFont, max: u32, min: u32, available: f32) -> u32 {
    let min = min.min(max);
    (min..=max)
        .rev()
        .find(|&size| string_width(text, font, size as f32) < available)
        .unwrap_or(min)
}

#[rustfmt::skip]
static HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn width_scales_with_size() {
        // "Hi" in Helvetica-Bold: H=722, i=278
        assert_eq!(string_width("Hi", BuiltinFont::HelveticaBold, 10.0), 10.0);
        assert_eq!(string_width("", BuiltinFont::Helvetica, 12.0), 0.0);
    }

    #[test]
    fn oblique_matches_regular_widths() {
        let text = "Whispering Goo";
        assert_eq!(
            string_width(text, BuiltinFont::Helvetica, 8.0),
            string_width(text, BuiltinFont::HelveticaOblique, 8.0)
        );
    }

    #[test]
    fn short_title_keeps_max_size() {
        assert_eq!(fit_font_size("Goo", BuiltinFont::HelveticaBold, 12, 5, 150.0), 12);
    }

    #[test]
    fn long_title_shrinks_until_it_fits() {
        let title = "The Extraordinarily Verbose Slime";
        let size = fit_font_size(title, BuiltinFont::HelveticaBold, 12, 5, 150.0);
        assert!(size < 12 && size >= 5);
        assert!(string_width(title, BuiltinFont::HelveticaBold, size as f32) < 150.0);
        assert!(string_width(title, BuiltinFont::HelveticaBold, (size + 1) as f32) >= 150.0);
    }

    #[test]
    fn impossible_fit_bottoms_out_at_min() {
        let title = "W".repeat(200);
        assert_eq!(fit_font_size(&title, BuiltinFont::HelveticaBold, 12, 5, 150.0), 5);
    }

    #[test]
    fn non_ascii_uses_fallback_width() {
        assert_eq!(
            BuiltinFont::Helvetica.char_width('é'),
            BuiltinFont::Helvetica.char_width('n')
        );
    }
}
