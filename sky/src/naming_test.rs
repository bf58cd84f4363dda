use super::*;

#[test]
fn strip_name_prefix_only_strips_leading_marker() {
    assert_eq!(strip_name_prefix("NAME Betelgeuse"), "Betelgeuse");
    assert_eq!(strip_name_prefix("HIP 27989"), "HIP 27989");
    assert_eq!(strip_name_prefix("NAMES"), "NAMES");
}

#[test]
fn display_name_prefers_first_designation() {
    let designations = vec!["NAME Vega".to_owned(), "* alf Lyr".to_owned()];
    assert_eq!(display_name(&designations, Some("ignored"), None), "Vega");
}

#[test]
fn display_name_falls_back_through_accessors() {
    assert_eq!(display_name(&[], Some("Mars"), Some("Mars (fr)")), "Mars");
    assert_eq!(display_name(&[], Some(""), Some("Lune")), "Lune");
    assert_eq!(display_name(&[], None, None), "Unknown Object");
}

#[test]
fn cleaned_name_drops_catalog_prefix() {
    assert_eq!(cleaned_name("NGC 224"), "224");
    assert_eq!(cleaned_name("HIP 11767"), "11767");
    assert_eq!(cleaned_name("M 31"), "31");
    assert_eq!(cleaned_name("IC  434"), "434");
}

#[test]
fn cleaned_name_keeps_words_that_merely_start_with_prefix() {
    assert_eq!(cleaned_name("Mars"), "Mars");
    assert_eq!(cleaned_name("HDTV"), "HDTV");
}

#[test]
fn cleaned_name_drops_trailing_parenthetical() {
    assert_eq!(cleaned_name("Polaris (Alpha UMi)"), "Polaris");
    assert_eq!(cleaned_name("M 42 (Orion Nebula)"), "42");
    assert_eq!(cleaned_name("Oddity()"), "Oddity()");
    assert_eq!(cleaned_name("Nospace(x)"), "Nospace(x)");
}

#[test]
fn cleaned_name_drops_from_outermost_unclosed_paren() {
    assert_eq!(cleaned_name("X (a(b)"), "X");
    assert_eq!(cleaned_name("Y (a) (b)"), "Y (a)");
}

#[test]
fn lookup_terms_include_cleaned_variant_when_different() {
    assert_eq!(lookup_terms("NGC 7000"), vec!["NGC 7000".to_owned(), "7000".to_owned()]);
    assert_eq!(lookup_terms("Andromeda Galaxy"), vec!["Andromeda Galaxy".to_owned()]);
}

#[test]
fn lookup_terms_skip_placeholder_and_blank() {
    assert!(lookup_terms("Unknown Object").is_empty());
    assert!(lookup_terms("   ").is_empty());
}
