//! fieldlens - attribute inspection panel core
//!
//! This crate provides the state machine behind an attribute panel: for a
//! set of selected records it aggregates one row per field with the
//! distinct values across the selection, and supports constrained in-place
//! editing when the underlying dataset is editable. It follows the Elm
//! Architecture pattern: the host feeds [`messages::Msg`] into
//! [`update::update`] and executes the returned [`commands::Cmd`].
//!
//! The tab-order reconstruction in [`tabs`] and the layout persistence in
//! [`layout`] are independent of the row machinery; they run once at
//! startup and shutdown to restore and persist the panel's dock position.

pub mod aggregate;
pub mod commands;
pub mod edit;
pub mod layout;
pub mod messages;
pub mod model;
pub mod order;
pub mod source;
pub mod tabs;
pub mod trace;
pub mod update;
pub mod validate;

// Re-export commonly used types
pub use commands::Cmd;
pub use edit::{ConstrainedEdit, EditOutcome};
pub use messages::{EditMsg, Msg, SourceMsg};
pub use model::{AttributeRow, FieldDescriptor, FieldOrigin, FieldType, PanelModel, Value};
pub use source::{CommitError, MemoryTable, RecordId, RecordSource, SourceHandle};
pub use validate::{LengthConstraint, LengthValidator, TextEncoding, Verdict};
