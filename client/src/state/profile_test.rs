use super::*;

#[test]
fn save_and_cancel_both_leave_edit_mode() {
    let mut state = ProfileState::default();
    assert!(!state.editing);

    state.start_edit();
    assert!(state.editing);
    state.save();
    assert!(!state.editing);

    state.start_edit();
    state.cancel();
    assert!(!state.editing);
}

#[test]
fn tabs_switch_entries() {
    assert_eq!(ProfileState::default().tab, ProfileTab::Observations);
    assert_eq!(ProfileTab::Observations.entries()[0].name, "Orion Nebula (M42)");
    assert_eq!(ProfileTab::Favorites.entries()[1].name, "Ring Nebula (M57)");
    assert_eq!(ProfileTab::Favorites.heading(), "Favorite Objects");
}
