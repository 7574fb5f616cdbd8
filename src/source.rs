//! The host-side record source contract.
//!
//! The panel never owns the record store; it holds a non-owning handle and
//! guards every access, because the host may drop the source between event
//! dispatch and handler execution. A dead handle degrades to a no-op — the
//! panel's job is best-effort display, not correctness-critical persistence.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use thiserror::Error;

use crate::model::{FieldDescriptor, Value};

/// Stable identifier of one record
pub type RecordId = u64;

/// Failure applying an edit; the batch contract is all-or-nothing, so any
/// of these means no record was modified
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    #[error("source is not editable")]
    NotEditable,
    #[error("no such field index {0}")]
    UnknownField(usize),
    #[error("record {0} no longer exists")]
    MissingRecord(RecordId),
    #[error("record {0} rejected the new value")]
    Rejected(RecordId),
}

/// Live record store exposed by the host
pub trait RecordSource {
    fn fields(&self) -> Vec<FieldDescriptor>;

    /// Current selection as record identifiers
    fn selected_ids(&self) -> Vec<RecordId>;

    /// Projected attribute of one record; `None` when the record is gone.
    /// Geometry is never part of the projection — this is an
    /// attribute-only view.
    fn attribute(&self, id: RecordId, field: usize) -> Option<Value>;

    fn is_editable(&self) -> bool;

    /// Host's rendering of null values
    fn null_representation(&self) -> String {
        "NULL".to_string()
    }

    /// Apply `value` to `field` on every listed record.
    ///
    /// All-or-nothing: a failure on any record must leave every record at
    /// its pre-edit value.
    fn apply_edit(
        &mut self,
        field: usize,
        ids: &[RecordId],
        value: &Value,
    ) -> Result<(), CommitError>;
}

/// Non-owning handle to the host's record source.
///
/// Every access is guarded: a dropped source, or one the host is currently
/// mutating, yields `None` and the caller treats it as a no-op.
#[derive(Clone)]
pub struct SourceHandle {
    inner: Weak<RefCell<dyn RecordSource>>,
}

impl SourceHandle {
    pub fn new(source: &Rc<RefCell<dyn RecordSource>>) -> Self {
        Self {
            inner: Rc::downgrade(source),
        }
    }

    /// Handle to a concretely-typed source cell
    pub fn of<S: RecordSource + 'static>(source: &Rc<RefCell<S>>) -> Self {
        let erased: Rc<RefCell<dyn RecordSource>> = source.clone();
        Self {
            inner: Rc::downgrade(&erased),
        }
    }

    /// Run `f` against the source if it is still alive and borrowable
    pub fn with<R>(&self, f: impl FnOnce(&dyn RecordSource) -> R) -> Option<R> {
        let rc = self.inner.upgrade()?;
        let guard = rc.try_borrow().ok()?;
        Some(f(&*guard))
    }

    /// Run `f` against the source mutably if it is still alive and borrowable
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut dyn RecordSource) -> R) -> Option<R> {
        let rc = self.inner.upgrade()?;
        let mut guard = rc.try_borrow_mut().ok()?;
        Some(f(&mut *guard))
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl std::fmt::Debug for SourceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// In-memory record source for tests and demos.
///
/// Implements the all-or-nothing edit contract with an explicit rollback,
/// and can be told to refuse writes to a specific record.
pub struct MemoryTable {
    fields: Vec<FieldDescriptor>,
    records: BTreeMap<RecordId, Vec<Value>>,
    selection: Vec<RecordId>,
    editable: bool,
    null_rep: String,
    /// Test hook: writing this record fails
    reject_record: Option<RecordId>,
}

impl MemoryTable {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            records: BTreeMap::new(),
            selection: Vec::new(),
            editable: false,
            null_rep: "NULL".to_string(),
            reject_record: None,
        }
    }

    /// Insert a record; short attribute vectors are padded with nulls
    pub fn insert(&mut self, id: RecordId, mut attributes: Vec<Value>) {
        attributes.resize(self.fields.len(), Value::Null);
        self.records.insert(id, attributes);
    }

    pub fn remove(&mut self, id: RecordId) {
        self.records.remove(&id);
        self.selection.retain(|&s| s != id);
    }

    pub fn select(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        self.selection = ids.into_iter().collect();
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    pub fn reject_writes_to(&mut self, id: RecordId) {
        self.reject_record = Some(id);
    }

    /// Share as a trait-object cell the panel can hold a weak handle to
    pub fn into_shared(self) -> Rc<RefCell<dyn RecordSource>> {
        Rc::new(RefCell::new(self))
    }
}

impl RecordSource for MemoryTable {
    fn fields(&self) -> Vec<FieldDescriptor> {
        self.fields.clone()
    }

    fn selected_ids(&self) -> Vec<RecordId> {
        self.selection.clone()
    }

    fn attribute(&self, id: RecordId, field: usize) -> Option<Value> {
        self.records.get(&id)?.get(field).cloned()
    }

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn null_representation(&self) -> String {
        self.null_rep.clone()
    }

    fn apply_edit(
        &mut self,
        field: usize,
        ids: &[RecordId],
        value: &Value,
    ) -> Result<(), CommitError> {
        if !self.editable {
            return Err(CommitError::NotEditable);
        }
        if field >= self.fields.len() {
            return Err(CommitError::UnknownField(field));
        }

        let mut written: Vec<(RecordId, Value)> = Vec::with_capacity(ids.len());
        for &id in ids {
            if self.reject_record == Some(id) {
                self.roll_back(field, written);
                return Err(CommitError::Rejected(id));
            }
            let Some(attrs) = self.records.get_mut(&id) else {
                self.roll_back(field, written);
                return Err(CommitError::MissingRecord(id));
            };
            written.push((id, std::mem::replace(&mut attrs[field], value.clone())));
        }
        Ok(())
    }
}

impl MemoryTable {
    fn roll_back(&mut self, field: usize, written: Vec<(RecordId, Value)>) {
        for (id, old) in written {
            if let Some(attrs) = self.records.get_mut(&id) {
                attrs[field] = old;
            }
        }
    }
}
