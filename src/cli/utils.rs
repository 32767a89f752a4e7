//! Convenience helpers shared across command handlers.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cardsheet::{CardRecord, load_cards, parse_cards};

/// Load a card list from a file, or from stdin when the path is `-`.
pub fn read_cards(path: &Path) -> Result<Vec<CardRecord>> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read card list from stdin")?;
        return parse_cards(&buffer).context("failed to parse card list from stdin");
    }
    load_cards(path)
}

/// Where relative image paths resolve: an explicit root, else the directory
/// holding the card list, else the working directory.
pub fn image_root(explicit: Option<PathBuf>, cards: &Path) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }
    if cards.as_os_str() == "-" {
        return None;
    }
    cards
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
