//! Printable trading card sheets: JSON card lists in, paginated PDF out.

mod card;
mod icons;
mod layout;
mod metrics;
mod sheet;

pub mod pdf;

pub use card::{CardError, CardRecord, StatIcon, StatValue, load_cards, parse_cards};
pub use icons::{draw_heart, draw_sword};
pub use layout::{CM, LayoutError, PageSize, SheetLayout, Slot};
pub use metrics::{BuiltinFont, fit_font_size, string_width};
pub use pdf::{DocumentInfo, SheetDocument};
pub use sheet::{
    RenderOptions, RenderSummary, missing_images, render_sheet, render_to_file,
    resolve_image_path,
};
