use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_STAT: &str = "5";
pub const DEFAULT_EFFECT: &str = "Special Ability";
pub const DEFAULT_FILLER: &str = "Flavor text here.";

/// Team whose cards show a sword instead of a heart next to the stat.
pub const SWORD_TEAM: &str = "slime";

#[derive(Debug, Error)]
pub enum CardError {
    #[error("card list must be a JSON array, found {0}")]
    NotAnArray(&'static str),
    #[error("card {index} is not a valid card object: {source}")]
    InvalidCard {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stat values show up both as `"7"` and `7` in hand-written card lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StatValue {
    Text(String),
    Number(i64),
}

/// Icon drawn next to the stat number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatIcon {
    Heart,
    Sword,
}

/// One card from the input list. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filler: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

impl CardRecord {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn effect(&self) -> &str {
        self.effect.as_deref().unwrap_or(DEFAULT_EFFECT)
    }

    pub fn filler(&self) -> &str {
        self.filler.as_deref().unwrap_or(DEFAULT_FILLER)
    }

    /// Raw stat text before digit filtering.
    pub fn stat_text(&self) -> String {
        match &self.stat {
            Some(StatValue::Text(text)) => text.clone(),
            Some(StatValue::Number(n)) => n.to_string(),
            None => DEFAULT_STAT.to_string(),
        }
    }

    /// Stat with every non-digit stripped, e.g. `"ATK 7"` becomes `"7"`.
    /// Superscript digits survive since the stat font can draw them.
    pub fn stat_number(&self) -> String {
        self.stat_text().chars().filter(|&c| is_stat_digit(c)).collect()
    }

    pub fn stat_icon(&self) -> StatIcon {
        match self.team.as_deref() {
            Some(SWORD_TEAM) => StatIcon::Sword,
            _ => StatIcon::Heart,
        }
    }

    /// Image path as written in the card list, ignoring blank strings.
    pub fn image_path(&self) -> Option<&str> {
        self.image.as_deref().filter(|p| !p.trim().is_empty())
    }
}

/// Parse a JSON card list. Each element is checked individually so errors
/// point at the offending card.
pub fn parse_cards(input: &str) -> Result<Vec<CardRecord>, CardError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => return Err(CardError::NotAnArray(json_type_name(&other))),
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| CardError::InvalidCard { index, source })
        })
        .collect()
}

/// Read and parse a card list from disk.
pub fn load_cards(path: &Path) -> Result<Vec<CardRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read card list {}", path.display()))?;
    parse_cards(&raw).with_context(|| format!("failed to parse card list {}", path.display()))
}

/// Digits the WinAnsi-encoded stat font can show: `0-9` and `¹ ² ³`.
fn is_stat_digit(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '¹' | '²' | '³')
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
