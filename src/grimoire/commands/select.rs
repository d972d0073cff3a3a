use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::selection::Toggle;
use crate::store::KeyValueStore;
use crate::view::{Projection, ViewState};

/// Toggles each id in order. Ids with no card are still toggled, with a warning.
pub fn toggle<S: KeyValueStore, I: AsRef<str>>(
    catalog: &mut Catalog<S>,
    state: &ViewState,
    ids: &[I],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        let outcome = catalog.toggle_select(id)?;
        let verb = match outcome {
            Toggle::Selected => "Selected",
            Toggle::Deselected => "Deselected",
        };

        match catalog.get(id) {
            Some(card) => {
                result.add_message(CmdMessage::success(format!(
                    "{} {}: {}",
                    verb, card.id, card.title
                )));
                result.affected_cards.push(card.clone());
            }
            None => {
                result.add_message(CmdMessage::warning(format!(
                    "{} {} (no such card in this catalog)",
                    verb, id
                )));
            }
        }
    }

    let projection = Projection::build(catalog.list_all(), catalog.selection(), state);
    Ok(result.with_projection(projection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::two_cards;

    fn catalog() -> Catalog<InMemoryStore> {
        let mut catalog = Catalog::new(InMemoryStore::new());
        catalog.initialize(two_cards());
        catalog
    }

    #[test]
    fn selecting_moves_card_between_views() {
        let mut catalog = catalog();
        let result = toggle(&mut catalog, &ViewState::default(), &["a"]).unwrap();

        let projection = result.projection.unwrap();
        let browsable: Vec<_> = projection.browsable.iter().map(|c| c.id.as_str()).collect();
        let selected: Vec<_> = projection.selected.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(browsable, vec!["b"]);
        assert_eq!(selected, vec!["a"]);
        assert_eq!(result.affected_cards.len(), 1);
        assert!(result.messages[0].content.starts_with("Selected a"));
    }

    #[test]
    fn toggling_twice_deselects() {
        let mut catalog = catalog();
        toggle(&mut catalog, &ViewState::default(), &["a"]).unwrap();
        let result = toggle(&mut catalog, &ViewState::default(), &["a"]).unwrap();

        assert!(result.messages[0].content.starts_with("Deselected a"));
        assert!(result.projection.unwrap().selected.is_empty());
    }

    #[test]
    fn multiple_ids_apply_in_order() {
        let mut catalog = catalog();
        let result = toggle(&mut catalog, &ViewState::default(), &["b", "a"]).unwrap();

        let selected: Vec<_> = result
            .projection
            .unwrap()
            .selected
            .iter()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(selected, vec!["b", "a"]);
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn unknown_id_is_kept_with_warning() {
        let mut catalog = catalog();
        let result = toggle(&mut catalog, &ViewState::default(), &["zz"]).unwrap();

        assert!(result.has_level(MessageLevel::Warning));
        assert!(result.affected_cards.is_empty());
        assert!(catalog.selection().contains("zz"));
    }

    #[test]
    fn storage_failure_propagates() {
        let mut catalog = catalog();
        catalog.store_mut().set_simulate_write_error(true);
        assert!(toggle(&mut catalog, &ViewState::default(), &["a"]).is_err());
    }
}
