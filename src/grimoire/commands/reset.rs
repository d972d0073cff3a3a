use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::view::{Projection, ViewState};

pub fn run<S: KeyValueStore>(catalog: &mut Catalog<S>, state: &ViewState) -> Result<CmdResult> {
    let removed = catalog.reset_selection()?;
    let mut result = CmdResult::default();
    result.add_message(if removed == 0 {
        CmdMessage::info("Selection was already empty")
    } else {
        CmdMessage::success(format!("Cleared {} selected card(s)", removed))
    });

    let projection = Projection::build(catalog.list_all(), catalog.selection(), state);
    Ok(result.with_projection(projection))
}
