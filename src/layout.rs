//! Page geometry for card sheets.
//!
//! All values are PDF points with the origin at the bottom-left corner of the
//! page, which is the coordinate system the drawing code writes into.

use thiserror::Error;

/// Points per centimetre.
pub const CM: f32 = 72.0 / 2.54;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("a sheet needs at least one column and one row (got {cols}x{rows})")]
    EmptyGrid { cols: usize, rows: usize },
    #[error("margin must be non-negative, got {0}pt")]
    NegativeMargin(f32),
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    #[error("{section} leaves no room on a {width:.1}x{height:.1}pt card")]
    NoRoom {
        section: &'static str,
        width: f32,
        height: f32,
    },
}

/// Supported paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Letter,
    A4,
}

impl PageSize {
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.2756, 841.8898),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageSize::Letter => "letter",
            PageSize::A4 => "a4",
        }
    }
}

/// Grid and section sizes of a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    pub page: PageSize,
    pub margin: f32,
    pub cols: usize,
    pub rows: usize,
    pub header_height: f32,
    pub stat_width: f32,
    pub image_height: f32,
    pub image_padding: f32,
    pub text_inset: f32,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            page: PageSize::Letter,
            margin: 0.25 * CM,
            cols: 3,
            rows: 3,
            header_height: 1.0 * CM,
            stat_width: 1.5 * CM,
            image_height: 5.0 * CM,
            image_padding: 0.3 * CM,
            text_inset: 0.5 * CM,
        }
    }
}

/// Where a card lands: page index, grid cell and bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub page: usize,
    pub col: usize,
    pub row: usize,
    pub x: f32,
    pub y: f32,
}

impl SheetLayout {
    pub fn page_width(&self) -> f32 {
        self.page.dimensions().0
    }

    pub fn page_height(&self) -> f32 {
        self.page.dimensions().1
    }

    pub fn cards_per_page(&self) -> usize {
        self.cols * self.rows
    }

    pub fn card_width(&self) -> f32 {
        (self.page_width() - 2.0 * self.margin) / self.cols as f32
    }

    pub fn card_height(&self) -> f32 {
        (self.page_height() - 2.0 * self.margin) / self.rows as f32
    }

    /// Space left under the illustration for effect and flavor text.
    pub fn footer_height(&self) -> f32 {
        self.card_height() - self.header_height - self.image_height
    }

    pub fn title_width(&self) -> f32 {
        self.card_width() - self.stat_width
    }

    pub fn page_count(&self, cards: usize) -> usize {
        cards.div_ceil(self.cards_per_page())
    }

    /// Pages in the written PDF. An empty list still gets one blank page.
    pub fn sheet_pages(&self, cards: usize) -> usize {
        self.page_count(cards).max(1)
    }

    pub fn slot(&self, index: usize) -> Slot {
        let per_page = self.cards_per_page();
        let col = index % self.cols;
        let row = (index / self.cols) % self.rows;
        Slot {
            page: index / per_page,
            col,
            row,
            x: self.margin + col as f32 * self.card_width(),
            y: self.page_height() - self.margin - (row + 1) as f32 * self.card_height(),
        }
    }

    /// Reject layouts whose sections would collapse or overlap.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(LayoutError::EmptyGrid {
                cols: self.cols,
                rows: self.rows,
            });
        }
        let lengths = [
            ("margin", self.margin),
            ("header height", self.header_height),
            ("stat width", self.stat_width),
            ("illustration height", self.image_height),
            ("illustration padding", self.image_padding),
            ("text inset", self.text_inset),
        ];
        if let Some(&(name, _)) = lengths.iter().find(|(_, value)| !value.is_finite()) {
            return Err(LayoutError::NonFinite(name));
        }
        if self.margin < 0.0 {
            return Err(LayoutError::NegativeMargin(self.margin));
        }
        let (width, height) = (self.card_width(), self.card_height());
        let no_room = |section| LayoutError::NoRoom {
            section,
            width,
            height,
        };
        // written negated: NaN fails every comparison
        if !(width > 0.0 && height > 0.0) {
            return Err(no_room("margin"));
        }
        if !(self.title_width() > 0.0) {
            return Err(no_room("stat box"));
        }
        if !(self.footer_height() > 0.0) {
            return Err(no_room("header and illustration"));
        }
        if 2.0 * self.image_padding >= width.min(self.image_height) {
            return Err(no_room("illustration padding"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn default_card_fills_a_third_of_letter() {
        let layout = SheetLayout::default();
        assert!(close(layout.card_width(), (612.0 - 2.0 * 7.0866) / 3.0));
        assert!(close(layout.card_height(), (792.0 - 2.0 * 7.0866) / 3.0));
        assert!(layout.footer_height() > 0.0);
        assert_eq!(layout.validate(), Ok(()));
    }

    #[test]
    fn nine_cards_per_page() {
        let layout = SheetLayout::default();
        assert_eq!(layout.page_count(0), 0);
        assert_eq!(layout.page_count(1), 1);
        assert_eq!(layout.page_count(9), 1);
        assert_eq!(layout.page_count(10), 2);
        assert_eq!(layout.page_count(27), 3);
    }

    #[test]
    fn empty_list_still_occupies_one_sheet() {
        let layout = SheetLayout::default();
        assert_eq!(layout.sheet_pages(0), 1);
        assert_eq!(layout.sheet_pages(9), 1);
        assert_eq!(layout.sheet_pages(10), 2);
    }

    #[test]
    fn slots_fill_rows_top_down_and_wrap_pages() {
        let layout = SheetLayout::default();
        let first = layout.slot(0);
        assert_eq!((first.page, first.col, first.row), (0, 0, 0));
        assert!(close(first.x, layout.margin));
        assert!(close(
            first.y,
            792.0 - layout.margin - layout.card_height()
        ));

        let fifth = layout.slot(4);
        assert_eq!((fifth.page, fifth.col, fifth.row), (0, 1, 1));

        let tenth = layout.slot(9);
        assert_eq!((tenth.page, tenth.col, tenth.row), (1, 0, 0));
        assert!(close(tenth.y, first.y));

        let last = layout.slot(8);
        assert!(close(last.y, layout.margin));
    }

    #[test]
    fn empty_grid_is_rejected() {
        let layout = SheetLayout {
            cols: 0,
            ..SheetLayout::default()
        };
        assert_eq!(
            layout.validate(),
            Err(LayoutError::EmptyGrid { cols: 0, rows: 3 })
        );
    }

    #[test]
    fn too_many_rows_squeeze_out_the_footer() {
        let layout = SheetLayout {
            rows: 5,
            ..SheetLayout::default()
        };
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::NoRoom {
                section: "header and illustration",
                ..
            })
        ));
    }

    #[test]
    fn nan_margin_is_rejected() {
        let layout = SheetLayout {
            margin: f32::NAN,
            ..SheetLayout::default()
        };
        assert_eq!(layout.validate(), Err(LayoutError::NonFinite("margin")));
    }

    #[test]
    fn infinite_section_size_is_rejected() {
        let layout = SheetLayout {
            image_height: f32::INFINITY,
            ..SheetLayout::default()
        };
        assert_eq!(
            layout.validate(),
            Err(LayoutError::NonFinite("illustration height"))
        );
    }
}
