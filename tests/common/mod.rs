//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use fieldlens::messages::{Msg, SourceMsg};
use fieldlens::model::{FieldDescriptor, FieldType, PanelModel, Value};
use fieldlens::source::{MemoryTable, SourceHandle};
use fieldlens::update::update;
use fieldlens::validate::{LengthConstraint, TextEncoding};

/// A three-record table with a constrained text field and a decimal field
pub fn sample_table() -> Rc<RefCell<MemoryTable>> {
    let mut table = MemoryTable::new(vec![
        FieldDescriptor::new("id", FieldType::Int)
            .with_constraint(LengthConstraint::integer(4, true)),
        FieldDescriptor::new("name", FieldType::Text)
            .with_constraint(LengthConstraint::byte_text(10, TextEncoding::Utf8, true)),
        FieldDescriptor::new("price", FieldType::Double)
            .with_constraint(LengthConstraint::decimal(3, 1, true)),
    ]);
    table.insert(1, vec![Value::Int(1), Value::Text("a".into()), Value::Double(1.5)]);
    table.insert(2, vec![Value::Int(2), Value::Text("b".into()), Value::Double(1.5)]);
    table.insert(3, vec![Value::Int(3), Value::Null, Value::Null]);
    Rc::new(RefCell::new(table))
}

/// Bind a fresh panel model to `table` and run the initial rebuild
pub fn bound_model(table: &Rc<RefCell<MemoryTable>>) -> PanelModel {
    let mut model = PanelModel::new();
    let handle = SourceHandle::of(table);
    update(&mut model, Msg::Source(SourceMsg::Rebound(Some(handle))));
    update(&mut model, Msg::RebuildTick);
    model
}
