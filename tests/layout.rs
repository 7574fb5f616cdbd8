//! Layout persistence round-trips

use fieldlens::layout::{DockArea, DockState};

#[test]
fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panels").join("attributes.yaml");

    let state = DockState {
        area: DockArea::Bottom,
        order: vec!["Browser".into(), "Attributes".into(), "Log".into()],
        visible: true,
        raised: false,
    };
    state.save(&path).unwrap();

    assert_eq!(DockState::load(&path), state);
}

#[test]
fn test_malformed_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.yaml");
    std::fs::write(&path, "area: [this is not\n  a dock area").unwrap();

    assert_eq!(DockState::load(&path), DockState::default());
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.yaml");
    std::fs::write(&path, "area: Left\n").unwrap();

    let loaded = DockState::load(&path);
    assert_eq!(loaded.area, DockArea::Left);
    assert!(loaded.order.is_empty());
    assert!(loaded.visible);
    assert!(loaded.raised);
}
