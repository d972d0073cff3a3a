use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::view::{LevelFilter, Projection, ViewState};

/// Projects the current catalog state for rendering.
pub fn run<S: KeyValueStore>(catalog: &Catalog<S>, state: &ViewState) -> Result<CmdResult> {
    let projection = Projection::build(catalog.list_all(), catalog.selection(), state);
    let mut result = CmdResult::default();

    if let LevelFilter::Unmatchable(input) = &state.filter.level {
        result.add_message(CmdMessage::warning(format!(
            "Level filter '{}' is not a number; no cards match it",
            input
        )));
    }

    let stale = catalog.stale_ids();
    if !stale.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} selected card(s) not in this catalog: {}",
            stale.len(),
            stale.join(", ")
        )));
    }

    Ok(result.with_projection(projection))
}
