//! In-place edit handling: open, keystrokes, commit.

use crate::commands::Cmd;
use crate::edit::{ConstrainedEdit, EditOutcome};
use crate::messages::EditMsg;
use crate::model::{ActiveEdit, PanelModel, RowContent};

use super::panel::schedule_rebuild;

pub fn update_edit(model: &mut PanelModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::Begin { row } => begin_edit(model, row),

        EditMsg::Input { text, cursor } => {
            let edit = model.active_edit.as_mut()?;
            match edit.editor.input(&text, cursor) {
                EditOutcome::Ignored => None,
                _ => Some(Cmd::Redraw),
            }
        }

        EditMsg::Cancel => {
            model.active_edit = None;
            Some(Cmd::Redraw)
        }

        EditMsg::Commit => commit_edit(model),
    }
}

fn begin_edit(model: &mut PanelModel, row_index: usize) -> Option<Cmd> {
    if !model.editable {
        return None;
    }
    let row = model.rows.get(row_index)?;
    if !row.editable || matches!(row.content, RowContent::Placeholder(_)) {
        return None;
    }

    let mut editor = ConstrainedEdit::for_field(&row.field);
    editor.populate(&row.edit_text(&model.null_rep));
    model.active_edit = Some(ActiveEdit {
        row: row_index,
        editor,
    });
    Some(Cmd::Redraw)
}

/// Apply the editor's value to every selected record.
///
/// All-or-nothing: the source contract rolls the whole batch back on any
/// per-record failure, and only failures are surfaced — an untouched or
/// unparseable editor just closes.
fn commit_edit(model: &mut PanelModel) -> Option<Cmd> {
    let edit = model.active_edit.take()?;
    if !edit.editor.is_dirty() || !edit.editor.is_committable() {
        return Some(Cmd::Redraw);
    }

    let row = model.rows.get(edit.row)?;
    let value = match edit.editor.commit_value(row.field.field_type) {
        Some(value) => value,
        None => {
            // Text does not parse for the field type; skip silently
            return Some(Cmd::Redraw);
        }
    };

    let handle = model.source.as_ref()?.clone();
    let field_index = edit.row;

    // The flag drops notifications the source delivers re-entrantly,
    // inside this apply call. Echoes that arrive as later messages find
    // the flag already cleared; those fold into the rebuild scheduled
    // below via the pending-flag coalescing instead.
    model.suppress_rebuild = true;
    let result = handle.with_mut(|source| {
        let ids = source.selected_ids();
        source.apply_edit(field_index, &ids, &value)
    });
    model.suppress_rebuild = false;

    match result {
        None => {
            // Source died mid-commit; nothing was written
            tracing::warn!("record source vanished during commit");
            schedule_rebuild(model)
        }
        Some(Err(err)) => {
            tracing::warn!(field = field_index, "commit failed: {}", err);
            Some(Cmd::Alert(format!("Could not apply value: {}", err)))
        }
        Some(Ok(())) => {
            tracing::debug!(field = field_index, "commit applied");
            // Re-read what we just wrote so the aggregate stays honest
            schedule_rebuild(model)
        }
    }
}
