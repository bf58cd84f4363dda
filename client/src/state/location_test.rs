use super::*;

fn tokyo() -> Place {
    Place { name: "Tokyo, Japan".into(), latitude: 35.6762, longitude: 139.6503 }
}

#[test]
fn default_is_new_york_with_drawer_open() {
    let state = LocationState::default();
    assert_eq!(state.observer.name, "New York");
    assert!((state.observer.latitude - 40.7128).abs() < 1e-9);
    assert!((state.observer.longitude + 74.006).abs() < 1e-9);
    assert!(state.drawer_open);
    assert_eq!(state.toggle_label(), "Hide • New York");
}

// =============================================================
// Form fields
// =============================================================

#[test]
fn label_field_replaces_name() {
    let mut state = LocationState::default();
    state.set_label("Back garden");
    assert_eq!(state.observer.name, "Back garden");
}

#[test]
fn coordinate_parsing_rejects_partial_and_out_of_range_input() {
    assert_eq!(parse_latitude("north"), None);
    assert_eq!(parse_longitude(""), None);
    assert_eq!(parse_latitude("-"), None);
    assert_eq!(parse_latitude("91"), None);
    assert_eq!(parse_longitude("NaN"), None);
    assert_eq!(parse_longitude("-180.5"), None);

    assert_eq!(parse_latitude(" -33.8688 "), Some(-33.8688));
    assert_eq!(parse_longitude("151.2093"), Some(151.2093));
    assert_eq!(parse_longitude("-180"), Some(-180.0));
}

// =============================================================
// City search
// =============================================================

#[test]
fn blank_query_does_not_search() {
    let mut state = LocationState::default();
    state.query = "   ".into();
    assert_eq!(state.search_query(), None);
    state.query = " Tokyo ".into();
    assert_eq!(state.search_query().as_deref(), Some("Tokyo"));
}

#[test]
fn found_city_replaces_location_and_clears_query() {
    let mut state = LocationState { query: "tokyo".into(), searching: true, ..LocationState::default() };
    assert_eq!(state.apply_city_search(CitySearch::Found(tokyo())), Ok(()));
    assert_eq!(state.observer.name, "Tokyo, Japan");
    assert!((state.observer.altitude - DEFAULT_ALTITUDE_M).abs() < f64::EPSILON);
    assert!(state.query.is_empty());
    assert!(!state.searching);
}

#[test]
fn city_not_found_keeps_previous_location() {
    let mut state = LocationState { query: "Atlantis".into(), ..LocationState::default() };
    let before = state.observer.clone();
    assert_eq!(state.apply_city_search(CitySearch::NotFound), Err(CITY_NOT_FOUND));
    assert_eq!(state.observer, before);
    assert_eq!(state.query, "Atlantis");
}

#[test]
fn city_fetch_failure_keeps_previous_location() {
    let mut state = LocationState::default();
    let before = state.observer.clone();
    assert_eq!(state.apply_city_search(CitySearch::Failed), Err(CITY_FETCH_FAILED));
    assert_eq!(state.observer, before);
}

// =============================================================
// Geolocation
// =============================================================

#[test]
fn geolocation_errors_keep_location() {
    let mut state = LocationState::default();
    let before = state.observer.clone();
    assert_eq!(state.apply_geolocation(GeoOutcome::Unsupported), Err(GEOLOCATION_UNSUPPORTED));
    assert_eq!(state.apply_geolocation(GeoOutcome::Denied), Err(LOCATION_DENIED));
    assert_eq!(state.observer, before);
}

#[test]
fn located_with_name_uses_place() {
    let mut state = LocationState::default();
    let outcome = GeoOutcome::Located { latitude: 51.5, longitude: -0.12, name: Some("London".into()) };
    assert_eq!(state.apply_geolocation(outcome), Ok(()));
    assert_eq!(state.observer.name, "London");
    assert!((state.observer.latitude - 51.5).abs() < 1e-9);
}

#[test]
fn located_without_reverse_name_is_my_location() {
    let mut state = LocationState::default();
    let outcome = GeoOutcome::Located { latitude: 1.0, longitude: 2.0, name: None };
    assert_eq!(state.apply_geolocation(outcome), Ok(()));
    assert_eq!(state.observer.name, MY_LOCATION);
}

#[test]
fn drawer_toggle_flips_label() {
    let mut state = LocationState::default();
    state.toggle_drawer();
    assert!(!state.drawer_open);
    assert_eq!(state.toggle_label(), "Location • New York");
}
