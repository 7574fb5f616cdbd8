//! Panel state for the Elm-style architecture.

mod field;
mod row;
mod value;

pub use field::{FieldDescriptor, FieldOrigin, FieldType};
pub use row::{AttributeRow, RowContent, RowRender};
pub use value::{str_to_bool, Value};

use crate::edit::ConstrainedEdit;
use crate::source::SourceHandle;

/// An editor open on one row
#[derive(Debug, Clone)]
pub struct ActiveEdit {
    /// Row index; rows are one per field in field order, so this is also
    /// the field index for commits
    pub row: usize,
    pub editor: ConstrainedEdit,
}

/// Complete panel state.
///
/// Single-threaded: everything mutates on the UI thread in response to
/// host callbacks or user input, so ordering discipline (rebuild fully
/// before reads resume) replaces locking.
#[derive(Debug)]
pub struct PanelModel {
    /// Non-owning handle to the bound record source
    pub source: Option<SourceHandle>,
    /// One row per field, rebuilt wholesale on every change
    pub rows: Vec<AttributeRow>,
    /// Panel-wide edit state, mirrored from the source
    pub editable: bool,
    /// Host's rendering of null values
    pub null_rep: String,
    /// A rebuild is already scheduled; further notifications coalesce
    pub rebuild_pending: bool,
    /// Re-entrancy guard: change notifications caused by the panel's own
    /// commit are ignored
    pub suppress_rebuild: bool,
    pub active_edit: Option<ActiveEdit>,
}

impl Default for PanelModel {
    fn default() -> Self {
        Self {
            source: None,
            rows: Vec::new(),
            editable: false,
            null_rep: "NULL".to_string(),
            rebuild_pending: false,
            suppress_rebuild: false,
            active_edit: None,
        }
    }
}

impl PanelModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row currently being edited, if any
    pub fn editing_row(&self) -> Option<&AttributeRow> {
        self.active_edit.as_ref().and_then(|e| self.rows.get(e.row))
    }
}
