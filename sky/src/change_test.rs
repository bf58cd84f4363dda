use super::*;

#[test]
fn hovered_is_filtered() {
    let change = Change::classify("hovered");
    assert_eq!(change, Change::Hover);
    assert!(!change.refreshes());
}

#[test]
fn selection_refreshes() {
    let change = Change::classify("selection");
    assert_eq!(change, Change::Selection);
    assert!(change.refreshes());
}

#[test]
fn other_attributes_refresh() {
    let change = Change::classify("visible");
    assert_eq!(change, Change::Other("visible".to_owned()));
    assert!(change.refreshes());
}
