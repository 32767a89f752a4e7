//! `cardsheet layout`: print sheet geometry.

use anyhow::{Context, Result};
use cardsheet::{CM, SheetLayout};
use clap::Args;

use crate::cli::common::LayoutArgs;

/// Args for `cardsheet layout`.
#[derive(Args, Debug)]
pub struct LayoutCommandArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,
}

pub fn handle(args: LayoutCommandArgs) -> Result<()> {
    let layout = SheetLayout::from(&args.layout);
    layout.validate().context("invalid sheet layout")?;

    let row = |label: &str, pt: f32| format!("{:<14}{:>8.2} pt {:>7.2} cm\n", label, pt, pt / CM);
    let mut output = format!(
        "Page          {} ({:.2} x {:.2} pt)\n",
        layout.page.name(),
        layout.page_width(),
        layout.page_height()
    );
    output.push_str(&format!(
        "Grid          {} x {} ({} per page)\n",
        layout.cols,
        layout.rows,
        layout.cards_per_page()
    ));
    output.push_str(&row("Margin", layout.margin));
    output.push_str(&row("Card width", layout.card_width()));
    output.push_str(&row("Card height", layout.card_height()));
    output.push_str(&row("Header", layout.header_height));
    output.push_str(&row("Stat box", layout.stat_width));
    output.push_str(&row("Title box", layout.title_width()));
    output.push_str(&row("Illustration", layout.image_height));
    output.push_str(&row("Footer", layout.footer_height()));
    print!("{}", output);
    Ok(())
}
