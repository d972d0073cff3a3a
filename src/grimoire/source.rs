//! Card retrieval.
//!
//! A [`CardSource`] hands over the whole collection in one call. There is no
//! paging and no partial result: either every card parses or the fetch fails,
//! and a failed fetch is fatal for the session rather than an empty catalog.

use crate::error::{GrimoireError, Result};
use crate::model::Card;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub trait CardSource {
    /// Human-readable origin, used in errors and logs.
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<Vec<Card>>;
}

/// Cards read from a JSON array on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CardSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<Card>> {
        let content = fs::read_to_string(&self.path).map_err(|e| GrimoireError::CardSource {
            source_name: self.describe(),
            reason: e.to_string(),
        })?;
        parse_cards(&content, &self.describe())
    }
}

/// Cards already in memory.
pub struct StaticSource {
    cards: Vec<Card>,
}

impl StaticSource {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl CardSource for StaticSource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn fetch(&self) -> Result<Vec<Card>> {
        Ok(self.cards.clone())
    }
}

/// Parses a JSON array of cards.
pub fn parse_cards(content: &str, source_name: &str) -> Result<Vec<Card>> {
    let cards: Vec<Card> =
        serde_json::from_str(content).map_err(|e| GrimoireError::CardSource {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;

    let mut seen = HashSet::new();
    for card in &cards {
        if !seen.insert(card.id.as_str()) {
            tracing::warn!(id = %card.id, source = source_name, "duplicate card id");
        }
    }
    tracing::info!(count = cards.len(), source = source_name, "cards loaded");
    Ok(cards)
}
