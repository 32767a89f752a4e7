//! `cardsheet render`: card list to PDF.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cardsheet::{DocumentInfo, RenderOptions, render_to_file};
use chrono::Utc;
use clap::Args;

use crate::cli::common::LayoutArgs;
use crate::cli::utils::{image_root, read_cards};

/// Args for `cardsheet render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON card list (`-` for stdin).
    pub cards: PathBuf,
    /// Output PDF path.
    #[arg(short = 'o', long = "output", default_value = "cards_sheet.pdf")]
    pub output: PathBuf,
    #[command(flatten)]
    pub layout: LayoutArgs,
    /// Directory that relative image paths resolve against. Defaults to the
    /// directory holding the card list, not the working directory; pass
    /// `--image-root .` for paths written relative to where you run the tool.
    #[arg(long = "image-root")]
    pub image_root: Option<PathBuf>,
    /// Document title stored in the PDF metadata.
    #[arg(long, default_value = "Card Sheet")]
    pub title: String,
    /// Leave the creation date out of the PDF metadata.
    #[arg(long = "no-timestamp")]
    pub no_timestamp: bool,
}

pub fn handle(args: RenderArgs) -> Result<()> {
    let cards = read_cards(&args.cards)?;
    let options = RenderOptions {
        layout: (&args.layout).into(),
        info: DocumentInfo {
            title: args.title,
            created: (!args.no_timestamp).then(Utc::now),
        },
        image_root: image_root(args.image_root, &args.cards),
    };

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory {}", parent.display())
            })?;
        }
    }

    let summary = render_to_file(&cards, &options, &args.output)?;
    let mut line = format!(
        "Rendered {} card(s) on {} page(s) to {}",
        summary.cards,
        summary.pages,
        args.output.display()
    );
    if summary.images_skipped > 0 {
        line.push_str(&format!(
            " ({} image(s) skipped)",
            summary.images_skipped
        ));
    }
    println!("{}", line);
    Ok(())
}
