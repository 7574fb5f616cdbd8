//! One panel row: a field plus the distinct values across the selection.

use std::collections::BTreeSet;

use super::field::FieldDescriptor;
use super::value::Value;

/// What a row displays
#[derive(Debug, Clone, PartialEq)]
pub enum RowContent {
    /// Distinct values across the current selection
    Values(BTreeSet<Value>),
    /// Empty selection: human-readable type/constraint description
    Placeholder(String),
}

/// Display-ready rendering of a row's value cell.
///
/// The core owns no fonts; it reports the hints the view styles with
/// (multiple distinct values → italic, null present → dimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRender {
    pub text: String,
    pub multiple: bool,
    pub has_null: bool,
    pub placeholder: bool,
}

/// Display/edit state of one field over the current selection
#[derive(Debug, Clone)]
pub struct AttributeRow {
    pub field: FieldDescriptor,
    pub content: RowContent,
    /// Field-level editability (origin + type); the panel-wide edit state
    /// still gates actual editing
    pub editable: bool,
}

impl AttributeRow {
    pub fn with_values(field: FieldDescriptor, values: BTreeSet<Value>) -> Self {
        let editable = field.supports_editing();
        Self {
            field,
            content: RowContent::Values(values),
            editable,
        }
    }

    pub fn placeholder(field: FieldDescriptor) -> Self {
        let text = field.type_summary();
        Self {
            field,
            content: RowContent::Placeholder(text),
            editable: false,
        }
    }

    pub fn values(&self) -> Option<&BTreeSet<Value>> {
        match &self.content {
            RowContent::Values(v) => Some(v),
            RowContent::Placeholder(_) => None,
        }
    }

    /// Comma-joined rendering of the value set with styling hints
    pub fn render(&self, null_rep: &str) -> RowRender {
        match &self.content {
            RowContent::Placeholder(text) => RowRender {
                text: text.clone(),
                multiple: false,
                has_null: false,
                placeholder: true,
            },
            RowContent::Values(values) => {
                let text = values
                    .iter()
                    .map(|v| v.render(null_rep))
                    .collect::<Vec<_>>()
                    .join(", ");
                RowRender {
                    text,
                    multiple: values.len() > 1,
                    has_null: values.contains(&Value::Null),
                    placeholder: false,
                }
            }
        }
    }

    /// Initial text for an editor opened on this row
    pub fn edit_text(&self, null_rep: &str) -> String {
        match &self.content {
            RowContent::Placeholder(_) => String::new(),
            RowContent::Values(values) => {
                if values.len() == 1 {
                    match values.iter().next() {
                        Some(Value::Null) | None => String::new(),
                        Some(v) => v.render(null_rep),
                    }
                } else {
                    // Mixed values start from a blank slate
                    String::new()
                }
            }
        }
    }
}
