//! Tests for in-place editing: constrained input, commit, rollback

mod common;

use common::{bound_model, sample_table};
use fieldlens::commands::Cmd;
use fieldlens::messages::{EditMsg, Msg, SourceMsg};
use fieldlens::model::Value;
use fieldlens::update::update;

fn editable_model(
    table: &std::rc::Rc<std::cell::RefCell<fieldlens::source::MemoryTable>>,
) -> fieldlens::model::PanelModel {
    table.borrow_mut().set_editable(true);
    bound_model(table)
}

// ============================================================================
// Opening editors
// ============================================================================

#[test]
fn test_begin_edit_requires_editable_state() {
    let table = sample_table();
    table.borrow_mut().select([1]);
    let mut model = bound_model(&table);

    // Source not editable → no editor
    let cmd = update(&mut model, Msg::Edit(EditMsg::Begin { row: 1 }));
    assert_eq!(cmd, None);
    assert!(model.active_edit.is_none());
}

#[test]
fn test_begin_edit_populates_from_single_value() {
    let table = sample_table();
    table.borrow_mut().select([1]);
    let mut model = editable_model(&table);

    update(&mut model, Msg::Edit(EditMsg::Begin { row: 1 }));
    let edit = model.active_edit.as_ref().unwrap();
    assert_eq!(edit.editor.text(), "a");
    assert!(!edit.editor.is_dirty());
}

#[test]
fn test_begin_edit_rejected_on_placeholder_rows() {
    let table = sample_table();
    let mut model = editable_model(&table);
    // Empty selection → placeholder rows
    let cmd = update(&mut model, Msg::Edit(EditMsg::Begin { row: 0 }));
    assert_eq!(cmd, None);
}

// ============================================================================
// Constrained input through the editor
// ============================================================================

#[test]
fn test_invalid_keystroke_reverts_silently() {
    let table = sample_table();
    table.borrow_mut().select([1]);
    let mut model = editable_model(&table);

    update(&mut model, Msg::Edit(EditMsg::Begin { row: 0 }));
    update(
        &mut model,
        Msg::Edit(EditMsg::Input { text: "12".into(), cursor: 2 }),
    );
    update(
        &mut model,
        Msg::Edit(EditMsg::Input { text: "12x".into(), cursor: 3 }),
    );
    assert_eq!(model.active_edit.as_ref().unwrap().editor.text(), "12");
}

#[test]
fn test_legacy_byte_input_is_autocorrected() {
    let table = sample_table();
    table.borrow_mut().select([1]);
    let mut model = editable_model(&table);

    update(&mut model, Msg::Edit(EditMsg::Begin { row: 1 }));
    // 4 three-byte characters exceed the 10-byte column
    update(
        &mut model,
        Msg::Edit(EditMsg::Input { text: "あいうえ".into(), cursor: 4 }),
    );
    assert_eq!(model.active_edit.as_ref().unwrap().editor.text(), "あいう");
}

// ============================================================================
// Commit
// ============================================================================

#[test]
fn test_commit_applies_to_whole_selection() {
    let table = sample_table();
    table.borrow_mut().select([1, 2, 3]);
    let mut model = editable_model(&table);

    update(&mut model, Msg::Edit(EditMsg::Begin { row: 1 }));
    update(
        &mut model,
        Msg::Edit(EditMsg::Input { text: "zz".into(), cursor: 2 }),
    );
    let cmd = update(&mut model, Msg::Edit(EditMsg::Commit));
    assert_eq!(cmd, Some(Cmd::ScheduleRebuild));

    let t = table.borrow();
    for id in 1..=3 {
        assert_eq!(
            fieldlens::source::RecordSource::attribute(&*t, id, 1),
            Some(Value::Text("zz".into()))
        );
    }
}

#[test]
fn test_partial_failure_leaves_all_records_unmodified() {
    let table = sample_table();
    {
        let mut t = table.borrow_mut();
        t.select([1, 2, 3]);
        t.reject_writes_to(2);
    }
    let mut model = editable_model(&table);

    update(&mut model, Msg::Edit(EditMsg::Begin { row: 1 }));
    update(
        &mut model,
        Msg::Edit(EditMsg::Input { text: "zz".into(), cursor: 2 }),
    );
    let cmd = update(&mut model, Msg::Edit(EditMsg::Commit));
    assert!(matches!(cmd, Some(Cmd::Alert(_))));

    // All-or-nothing: every record keeps its pre-edit value
    let t = table.borrow();
    use fieldlens::source::RecordSource;
    assert_eq!(t.attribute(1, 1), Some(Value::Text("a".into())));
    assert_eq!(t.attribute(2, 1), Some(Value::Text("b".into())));
    assert_eq!(t.attribute(3, 1), Some(Value::Null));
}

#[test]
fn test_deferred_commit_echo_folds_into_scheduled_rebuild() {
    let table = sample_table();
    table.borrow_mut().select([1]);
    let mut model = editable_model(&table);

    update(&mut model, Msg::Edit(EditMsg::Begin { row: 1 }));
    update(
        &mut model,
        Msg::Edit(EditMsg::Input { text: "zz".into(), cursor: 2 }),
    );
    let cmd = update(&mut model, Msg::Edit(EditMsg::Commit));
    assert_eq!(cmd, Some(Cmd::ScheduleRebuild));

    // A host that queues change notifications delivers the echo after
    // the commit returned; it reuses the rebuild scheduled just above
    let cmd = update(
        &mut model,
        Msg::Source(SourceMsg::AttributeChanged { record: 1, field: 1 }),
    );
    assert_eq!(cmd, None);
    assert!(model.rebuild_pending);
}

#[test]
fn test_untouched_editor_commits_nothing() {
    let table = sample_table();
    table.borrow_mut().select([1]);
    let mut model = editable_model(&table);

    update(&mut model, Msg::Edit(EditMsg::Begin { row: 1 }));
    let cmd = update(&mut model, Msg::Edit(EditMsg::Commit));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(
        fieldlens::source::RecordSource::attribute(&*table.borrow(), 1, 1),
        Some(Value::Text("a".into()))
    );
}

#[test]
fn test_empty_text_commits_null() {
    let table = sample_table();
    table.borrow_mut().select([1]);
    let mut model = editable_model(&table);

    update(&mut model, Msg::Edit(EditMsg::Begin { row: 1 }));
    update(
        &mut model,
        Msg::Edit(EditMsg::Input { text: String::new(), cursor: 0 }),
    );
    update(&mut model, Msg::Edit(EditMsg::Commit));
    assert_eq!(
        fieldlens::source::RecordSource::attribute(&*table.borrow(), 1, 1),
        Some(Value::Null)
    );
}

#[test]
fn test_external_change_discards_in_flight_edit() {
    let table = sample_table();
    table.borrow_mut().select([1]);
    let mut model = editable_model(&table);

    update(&mut model, Msg::Edit(EditMsg::Begin { row: 1 }));
    update(
        &mut model,
        Msg::Edit(EditMsg::Input { text: "zz".into(), cursor: 2 }),
    );
    update(&mut model, Msg::Source(SourceMsg::SelectionChanged));
    assert!(model.active_edit.is_none());
}
