//! Shared clap helper types for CLI commands.

use clap::{Args, ValueEnum};
use cardsheet::{CM, PageSize, SheetLayout};

/// Paper sizes accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum PageSizeArg {
    Letter,
    A4,
}

impl From<PageSizeArg> for PageSize {
    fn from(value: PageSizeArg) -> PageSize {
        match value {
            PageSizeArg::Letter => PageSize::Letter,
            PageSizeArg::A4 => PageSize::A4,
        }
    }
}

/// Grid options shared by every command that lays out cards.
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Paper size.
    #[arg(long = "pagesize", default_value_t = PageSizeArg::Letter, value_enum)]
    pub pagesize: PageSizeArg,
    /// Cards per row.
    #[arg(long, default_value_t = 3)]
    pub cols: usize,
    /// Rows per page.
    #[arg(long, default_value_t = 3)]
    pub rows: usize,
    /// Page margin in centimetres.
    #[arg(long = "margin-cm", default_value_t = 0.25)]
    pub margin_cm: f32,
}

impl From<&LayoutArgs> for SheetLayout {
    fn from(args: &LayoutArgs) -> SheetLayout {
        SheetLayout {
            page: args.pagesize.into(),
            margin: args.margin_cm * CM,
            cols: args.cols,
            rows: args.rows,
            ..SheetLayout::default()
        }
    }
}
