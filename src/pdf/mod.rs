//! Minimal PDF writer for card sheets, built on `lopdf`.

mod canvas;
mod document;
mod raster;

pub use canvas::{Canvas, Color, win_ansi};
pub use document::{DocumentInfo, ImageHandle, SheetDocument};
pub use raster::{ImageError, RasterImage, fit_centered};
