//! # Catalog Store
//!
//! [`Catalog`] is the single owner of the card collection and the
//! [`SelectionSet`]. Every selection mutation goes through it, and every
//! mutation writes the complete selection to the [`KeyValueStore`] before
//! returning, so storage always matches memory as of the last call.
//!
//! The catalog does not check toggled ids against the collection. An id with
//! no card is kept in the selection (and in storage) and is skipped when the
//! selected cards are listed. Reloading the collection never purges such ids:
//! a later catalog may contain them again.

use crate::error::Result;
use crate::model::Card;
use crate::selection::{SelectionSet, Toggle};
use crate::store::KeyValueStore;

pub const DEFAULT_SELECTION_KEY: &str = "selectedCards";

pub struct Catalog<S: KeyValueStore> {
    store: S,
    key: String,
    cards: Vec<Card>,
    selection: SelectionSet,
}

impl<S: KeyValueStore> Catalog<S> {
    /// An empty catalog persisting its selection under the default key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_SELECTION_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            cards: Vec::new(),
            selection: SelectionSet::new(),
        }
    }

    /// Replaces the card collection wholesale.
    pub fn initialize(&mut self, cards: Vec<Card>) {
        tracing::debug!(count = cards.len(), "catalog initialized");
        self.cards = cards;
    }

    /// Loads the persisted selection. Missing, unreadable or malformed data
    /// all leave an empty selection.
    pub fn restore_selection(&mut self) {
        let raw = match self.store.get(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored selection");
                None
            }
        };

        self.selection = match raw.as_deref().map(SelectionSet::from_storage) {
            Some(Some(selection)) => selection,
            Some(None) => {
                tracing::warn!(key = %self.key, "ignoring malformed stored selection");
                SelectionSet::new()
            }
            None => SelectionSet::new(),
        };
        tracing::debug!(count = self.selection.len(), "selection restored");
    }

    /// Selects `id` if it is not selected, deselects it otherwise, then persists.
    /// If the write fails the selection is left as it was.
    pub fn toggle_select(&mut self, id: &str) -> Result<Toggle> {
        let previous = self.selection.clone();
        let outcome = self.selection.toggle(id);
        self.commit(previous)?;
        tracing::debug!(id, ?outcome, "toggled selection");
        Ok(outcome)
    }

    /// Empties the selection and persists. Returns how many ids were removed.
    /// If the write fails the selection is left as it was.
    pub fn reset_selection(&mut self) -> Result<usize> {
        let previous = std::mem::take(&mut self.selection);
        let removed = previous.len();
        self.commit(previous)?;
        tracing::debug!(removed, "selection reset");
        Ok(removed)
    }

    pub fn list_all(&self) -> &[Card] {
        &self.cards
    }

    /// Selected cards in selection order, skipping ids with no card.
    pub fn list_selected(&self) -> Vec<&Card> {
        self.selection.resolve(&self.cards)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Whether a card with this id exists in the current collection.
    pub fn contains(&self, id: &str) -> bool {
        self.cards.iter().any(|card| card.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Selected ids with no card in the current collection.
    pub fn stale_ids(&self) -> Vec<&str> {
        self.selection.stale(&self.cards)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Writes the current selection, or puts `previous` back when the write fails.
    fn commit(&mut self, previous: SelectionSet) -> Result<()> {
        if let Err(e) = self.store.set(&self.key, &self.selection.to_storage()) {
            tracing::warn!(key = %self.key, error = %e, "selection not saved, change undone");
            self.selection = previous;
            return Err(e);
        }
        Ok(())
    }
}
