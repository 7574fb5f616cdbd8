//! Source-notification handling and the coalesced rebuild.

use crate::aggregate::build_rows;
use crate::commands::Cmd;
use crate::messages::SourceMsg;
use crate::model::PanelModel;

/// Handle a change notification from the record source.
///
/// Rapid-fire bursts (a batch edit firing many attribute-changed events)
/// coalesce: the first notification schedules a rebuild at the next idle
/// tick, the rest reuse it. The final consistent state is never lost
/// because the rebuild always reads the source fresh.
pub fn update_source(model: &mut PanelModel, msg: SourceMsg) -> Option<Cmd> {
    match msg {
        SourceMsg::Rebound(handle) => {
            model.source = handle;
            model.active_edit = None;
            model.rows.clear();
            refresh_source_state(model);
            schedule_rebuild(model)
        }

        SourceMsg::EditableToggled(editable) => {
            model.editable = editable;
            if !editable {
                model.active_edit = None;
            }
            Some(Cmd::Redraw)
        }

        SourceMsg::SelectionChanged
        | SourceMsg::FieldsChanged
        | SourceMsg::AttributeChanged { .. }
        | SourceMsg::RecordDeleted(_) => {
            if model.suppress_rebuild {
                // Our own commit caused this notification
                return None;
            }
            // External change: any in-flight edit is stale
            model.active_edit = None;
            schedule_rebuild(model)
        }
    }
}

/// Ask the host for one idle-tick rebuild unless one is already pending
pub fn schedule_rebuild(model: &mut PanelModel) -> Option<Cmd> {
    if model.rebuild_pending {
        return None;
    }
    model.rebuild_pending = true;
    tracing::debug!("rebuild scheduled");
    Some(Cmd::ScheduleRebuild)
}

/// The deferred rebuild fired: re-aggregate from the source.
///
/// A dead or vanished source clears the panel rather than erroring — the
/// host may drop the source between dispatch and handling.
pub fn rebuild(model: &mut PanelModel) -> Option<Cmd> {
    model.rebuild_pending = false;
    refresh_source_state(model);
    let rows = model
        .source
        .as_ref()
        .and_then(|handle| handle.with(|source| build_rows(source)));
    model.rows = rows.unwrap_or_default();
    Some(Cmd::Redraw)
}

/// Mirror editable/null-representation state from the source, tolerating
/// its absence
fn refresh_source_state(model: &mut PanelModel) {
    let state = model
        .source
        .as_ref()
        .and_then(|handle| handle.with(|source| (source.is_editable(), source.null_representation())));
    match state {
        Some((editable, null_rep)) => {
            model.editable = editable;
            model.null_rep = null_rep;
        }
        None => {
            model.editable = false;
        }
    }
}
