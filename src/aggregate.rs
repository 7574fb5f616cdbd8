//! Builds the row set from the record source for the current selection.
//!
//! Rows are always rebuilt wholesale — never patched — so the displayed
//! aggregate is consistent with the source at rebuild time. In-flight,
//! uncommitted edits are discarded by external changes; edits are
//! synchronous within one UI thread, so nothing of value is lost.

use std::collections::BTreeSet;

use crate::model::{AttributeRow, FieldDescriptor, FieldType, Value};
use crate::source::RecordSource;

/// Build one row per field.
///
/// Empty selection yields placeholder rows describing each field's type
/// and constraint, so the panel stays informative with nothing selected.
pub fn build_rows(source: &dyn RecordSource) -> Vec<AttributeRow> {
    let fields = source.fields();
    let selection = source.selected_ids();

    if selection.is_empty() {
        return fields.into_iter().map(AttributeRow::placeholder).collect();
    }

    tracing::debug!(
        records = selection.len(),
        fields = fields.len(),
        "aggregating selection"
    );

    fields
        .into_iter()
        .enumerate()
        .map(|(index, field)| {
            let mut values = BTreeSet::new();
            for &id in &selection {
                if let Some(raw) = source.attribute(id, index) {
                    values.insert(normalize(raw, &field));
                }
            }
            AttributeRow::with_values(field, values)
        })
        .collect()
}

/// Per-type normalization before a value joins the aggregate set.
///
/// Composite values collapse to their string rendering (element-wise
/// multi-value aggregation is not meaningful), binary values collapse to a
/// presence boolean, and an unset auto-generated key shows its generation
/// clause instead of a raw null.
fn normalize(raw: Value, field: &FieldDescriptor) -> Value {
    match raw {
        Value::Null => match &field.generator_clause {
            Some(clause) => Value::Text(clause.clone()),
            None => Value::Null,
        },
        Value::Json(v) => Value::Text(v.to_string()),
        Value::Bytes(b) => Value::Bool(!b.is_empty()),
        other => {
            if field.field_type == FieldType::Binary {
                Value::Bool(true)
            } else {
                other
            }
        }
    }
}
