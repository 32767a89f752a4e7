//! Card face rendering and page assembly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use sha2::{Digest, Sha256};

use crate::card::{CardRecord, StatIcon};
use crate::icons::{draw_heart, draw_sword};
use crate::layout::{CM, SheetLayout, Slot};
use crate::metrics::{BuiltinFont, fit_font_size};
use crate::pdf::{Canvas, Color, DocumentInfo, SheetDocument, fit_centered};

const BORDER_WIDTH: f32 = 2.0;

const ICON_SIZE: f32 = 12.0;
const STAT_TEXT_SIZE: f32 = 10.0;
const STAT_PADDING_LEFT: f32 = 3.0;
const ICON_TEXT_SPACING: f32 = 6.0;

const TITLE_MAX_SIZE: u32 = 12;
const TITLE_MIN_SIZE: u32 = 5;
const TITLE_PADDING: f32 = 4.0;

const EFFECT_SIZE: f32 = 8.0;
const FILLER_SIZE: f32 = 7.0;
const EFFECT_OFFSET: f32 = 1.2 * CM;
const FILLER_OFFSET: f32 = 0.6 * CM;

/// Everything that controls a render besides the cards themselves.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub layout: SheetLayout,
    pub info: DocumentInfo,
    /// Base directory for relative image paths. `None` means the working directory.
    pub image_root: Option<PathBuf>,
}

/// Counters reported after a render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub cards: usize,
    pub pages: usize,
    pub images_embedded: usize,
    pub images_skipped: usize,
}

/// Resolve a card's image path against the configured root.
pub fn resolve_image_path(root: Option<&Path>, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    match root {
        Some(root) if path.is_relative() => root.join(path),
        _ => path.to_path_buf(),
    }
}

/// Cards whose image is named but missing on disk, as `(index, resolved path)`.
pub fn missing_images(cards: &[CardRecord], root: Option<&Path>) -> Vec<(usize, PathBuf)> {
    cards
        .iter()
        .enumerate()
        .filter_map(|(idx, card)| {
            let path = resolve_image_path(root, card.image_path()?);
            (!path.is_file()).then_some((idx, path))
        })
        .collect()
}

/// Lay out every card and return the finished document with a summary.
pub fn render_sheet(
    cards: &[CardRecord],
    options: &RenderOptions,
) -> Result<(SheetDocument, RenderSummary)> {
    let layout = options.layout;
    layout.validate().context("invalid sheet layout")?;

    let mut doc = SheetDocument::new(layout.page, options.info.clone());
    let fingerprint = serde_json::to_vec(cards).context("failed to fingerprint card list")?;
    doc.set_fingerprint(&Sha256::digest(&fingerprint));

    let mut summary = RenderSummary {
        cards: cards.len(),
        ..RenderSummary::default()
    };

    for (idx, card) in cards.iter().enumerate() {
        let slot = layout.slot(idx);
        if slot.page == doc.page_count() {
            doc.add_page();
        }

        let image = card.image_path().and_then(|raw| {
            let path = resolve_image_path(options.image_root.as_deref(), raw);
            match doc.embed_image(&path) {
                Ok(handle) => Some(handle),
                Err(err) => {
                    warn!("card {} ({}): {err}", idx + 1, card.title());
                    summary.images_skipped += 1;
                    None
                }
            }
        });

        let canvas = doc
            .page_mut(slot.page)
            .context("card slot points past the last page")?;
        draw_card(canvas, &layout, &slot, card);
        if let Some(handle) = image {
            let (x, y, w, h) = image_box(&layout, &slot);
            let (x, y, w, h) = fit_centered(handle.width, handle.height, x, y, w, h);
            canvas.draw_image(&handle.name, x, y, w, h);
        }
        debug!(
            "card {} '{}' at page {} col {} row {}",
            idx + 1,
            card.title(),
            slot.page + 1,
            slot.col,
            slot.row
        );
    }

    if cards.is_empty() {
        doc.add_page();
    }
    summary.pages = doc.page_count();
    summary.images_embedded = doc.image_count();
    info!(
        "laid out {} card(s) on {} page(s)",
        summary.cards, summary.pages
    );
    Ok((doc, summary))
}

/// Render straight to a file.
pub fn render_to_file(
    cards: &[CardRecord],
    options: &RenderOptions,
    output: &Path,
) -> Result<RenderSummary> {
    let (doc, summary) = render_sheet(cards, options)?;
    doc.save(output)?;
    Ok(summary)
}

fn draw_card(canvas: &mut Canvas, layout: &SheetLayout, slot: &Slot, card: &CardRecord) {
    let (x, y) = (slot.x, slot.y);
    let card_w = layout.card_width();
    let card_h = layout.card_height();
    let header_h = layout.header_height;

    canvas.set_stroke_color(Color::BLACK);
    canvas.set_fill_color(Color::BLACK);
    canvas.set_line_width(BORDER_WIDTH);
    canvas.stroke_rect(x, y, card_w, card_h);

    // stat box
    let header_y = y + card_h - header_h;
    canvas.stroke_rect(x, header_y, layout.stat_width, header_h);
    let icon_x = x + STAT_PADDING_LEFT;
    let icon_y = y + card_h - header_h / 2.0 - ICON_SIZE / 2.0 + 1.0;
    let stat_y = y + card_h - header_h / 2.0 - STAT_TEXT_SIZE / 2.0 + 1.0;
    match card.stat_icon() {
        StatIcon::Sword => draw_sword(canvas, icon_x, icon_y, ICON_SIZE),
        StatIcon::Heart => draw_heart(canvas, icon_x, icon_y, ICON_SIZE),
    }
    canvas.draw_text(
        BuiltinFont::HelveticaBold,
        STAT_TEXT_SIZE,
        icon_x + ICON_SIZE + ICON_TEXT_SPACING,
        stat_y,
        &card.stat_number(),
    );

    // title box
    let title_x = x + layout.stat_width;
    let title_w = layout.title_width();
    canvas.stroke_rect(title_x, header_y, title_w, header_h);
    let title = card.title();
    let size = fit_font_size(
        title,
        BuiltinFont::HelveticaBold,
        TITLE_MAX_SIZE,
        TITLE_MIN_SIZE,
        title_w - TITLE_PADDING,
    ) as f32;
    canvas.draw_text(
        BuiltinFont::HelveticaBold,
        size,
        title_x + TITLE_PADDING / 2.0,
        header_y + (header_h - size) / 2.0,
        title,
    );

    // illustration frame
    canvas.stroke_rect(x, y + layout.footer_height(), card_w, layout.image_height);

    let text_x = x + layout.text_inset;
    let text_y = y + layout.text_inset;
    canvas.draw_text(
        BuiltinFont::HelveticaOblique,
        EFFECT_SIZE,
        text_x,
        text_y + EFFECT_OFFSET,
        card.effect(),
    );
    canvas.draw_text(
        BuiltinFont::Helvetica,
        FILLER_SIZE,
        text_x,
        text_y + FILLER_OFFSET,
        card.filler(),
    );
}

/// Inner box of the illustration frame, after padding.
fn image_box(layout: &SheetLayout, slot: &Slot) -> (f32, f32, f32, f32) {
    let pad = layout.image_padding;
    (
        slot.x + pad,
        slot.y + layout.footer_height() + pad,
        layout.card_width() - 2.0 * pad,
        layout.image_height - 2.0 * pad,
    )
}
