//! The user's chosen cards.
//!
//! A [`SelectionSet`] holds card ids, each at most once, in the order they were
//! selected. It knows nothing about the catalog: ids that no longer match a
//! card stay in the set and are simply skipped by [`SelectionSet::resolve`].

use crate::model::Card;

/// Outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in selection order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Removes `id` if present, otherwise appends it.
    pub fn toggle(&mut self, id: &str) -> Toggle {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
            Toggle::Deselected
        } else {
            self.ids.push(id.to_string());
            Toggle::Selected
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Cards for the selected ids, in selection order. Ids without a card are dropped.
    pub fn resolve<'a>(&self, cards: &'a [Card]) -> Vec<&'a Card> {
        self.ids
            .iter()
            .filter_map(|id| cards.iter().find(|card| &card.id == id))
            .collect()
    }

    /// Selected ids that have no card in `cards`.
    pub fn stale<'s>(&'s self, cards: &[Card]) -> Vec<&'s str> {
        self.ids
            .iter()
            .filter(|id| !cards.iter().any(|card| &card.id == *id))
            .map(String::as_str)
            .collect()
    }

    /// Storage form: a JSON array of ids.
    pub fn to_storage(&self) -> String {
        // A Vec<String> always serializes.
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// Parses the storage form. Anything but an array of strings is malformed.
    /// Repeated ids keep their first position.
    pub fn from_storage(raw: &str) -> Option<Self> {
        let parsed: Vec<String> = serde_json::from_str(raw).ok()?;
        Some(parsed.into_iter().collect())
    }
}

impl FromIterator<String> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut set = SelectionSet::new();
        for id in iter {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }
}
