//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Host callbacks
//! (selection changed, attribute changed, ...) and user input (begin edit,
//! keystroke, commit) arrive as messages; side effects leave as commands.

use crate::source::{RecordId, SourceHandle};

/// Change notifications from the bound record source
#[derive(Debug, Clone)]
pub enum SourceMsg {
    /// The set of selected records changed
    SelectionChanged,
    /// The field set changed (added/removed/renamed fields)
    FieldsChanged,
    /// One attribute of one record changed
    AttributeChanged { record: RecordId, field: usize },
    /// A record was deleted
    RecordDeleted(RecordId),
    /// The source's edit state toggled
    EditableToggled(bool),
    /// The panel was bound to a different source (or none)
    Rebound(Option<SourceHandle>),
}

/// In-place editing of one row
#[derive(Debug, Clone)]
pub enum EditMsg {
    /// Open an editor on a row
    Begin { row: usize },
    /// Full candidate text plus cursor position after a keystroke
    Input { text: String, cursor: usize },
    /// Apply the editor's value to every selected record
    Commit,
    /// Drop the editor without committing
    Cancel,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Source(SourceMsg),
    Edit(EditMsg),
    /// The deferred rebuild fired (host's zero-delay single-shot timer)
    RebuildTick,
}
