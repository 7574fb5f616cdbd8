//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod edit;
mod panel;

pub use edit::update_edit;
pub use panel::{rebuild, schedule_rebuild, update_source};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::PanelModel;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut PanelModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Source(m) => panel::update_source(model, m),
        Msg::Edit(m) => edit::update_edit(model, m),
        Msg::RebuildTick => panel::rebuild(model),
    }
}
