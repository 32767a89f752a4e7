//! `cardsheet check`: parse a card list without rendering it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cardsheet::{SheetLayout, missing_images};
use clap::Args;

use crate::cli::common::LayoutArgs;
use crate::cli::utils::{image_root, read_cards};

/// Args for `cardsheet check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON card list (`-` for stdin).
    pub cards: PathBuf,
    #[command(flatten)]
    pub layout: LayoutArgs,
    /// Directory that relative image paths resolve against. Defaults to the
    /// directory holding the card list, not the working directory; pass
    /// `--image-root .` for paths written relative to where you run the tool.
    #[arg(long = "image-root")]
    pub image_root: Option<PathBuf>,
}

pub fn handle(args: CheckArgs) -> Result<()> {
    let cards = read_cards(&args.cards)?;
    let layout = SheetLayout::from(&args.layout);
    layout.validate().context("invalid sheet layout")?;

    let root = image_root(args.image_root, &args.cards);
    let missing = missing_images(&cards, root.as_deref());
    for (idx, path) in &missing {
        println!("card {:>4}: missing image {}", idx + 1, path.display());
    }

    println!(
        "{} card(s), {} page(s) at {}x{} per page, {} missing image(s)",
        cards.len(),
        layout.sheet_pages(cards.len()),
        layout.cols,
        layout.rows,
        missing.len()
    );
    Ok(())
}
