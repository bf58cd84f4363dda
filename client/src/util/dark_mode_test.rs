#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_defaults_to_dark_in_non_hydrate_tests() {
    assert!(read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}

#[test]
fn stored_values_parse_with_dark_fallback() {
    assert!(parse_stored("dark"));
    assert!(!parse_stored("light"));
    assert!(parse_stored("system"));
}

#[test]
fn theme_names() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}
