use super::*;

#[test]
fn ui_state_defaults_to_dark_with_nav_closed() {
    let state = UiState::default();
    assert!(state.dark_mode);
    assert!(!state.nav_open);
}

#[test]
fn nav_links_start_with_home() {
    assert_eq!(NAV_LINKS[0], ("/", "Home"));
    assert!(NAV_LINKS.iter().any(|(href, _)| *href == "/map"));
}

#[test]
fn nav_active_matches_home_exactly() {
    assert!(nav_active("/", "/"));
    assert!(nav_active("/", ""));
    assert!(!nav_active("/", "/map"));
}

#[test]
fn nav_active_matches_route_and_children() {
    assert!(nav_active("/events", "/events"));
    assert!(nav_active("/events", "/events/2025"));
    assert!(!nav_active("/events", "/eventsx"));
    assert!(!nav_active("/map", "/community"));
}
