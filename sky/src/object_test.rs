use super::*;

#[test]
fn kind_from_common_codes() {
    assert_eq!(ObjectKind::from_code(Some("*")), ObjectKind::Star);
    assert_eq!(ObjectKind::from_code(Some("V*")), ObjectKind::Star);
    assert_eq!(ObjectKind::from_code(Some("Pl")), ObjectKind::Planet);
    assert_eq!(ObjectKind::from_code(Some("Moo")), ObjectKind::Moon);
    assert_eq!(ObjectKind::from_code(Some("MPl")), ObjectKind::MinorPlanet);
    assert_eq!(ObjectKind::from_code(Some("Com")), ObjectKind::Comet);
    assert_eq!(ObjectKind::from_code(Some("Asa")), ObjectKind::Satellite);
    assert_eq!(ObjectKind::from_code(Some("G")), ObjectKind::DeepSky);
    assert_eq!(ObjectKind::from_code(Some("GlC")), ObjectKind::DeepSky);
    assert_eq!(ObjectKind::from_code(Some("Con")), ObjectKind::Constellation);
}

#[test]
fn missing_or_blank_code_is_unknown() {
    assert_eq!(ObjectKind::from_code(None), ObjectKind::Unknown);
    assert_eq!(ObjectKind::from_code(Some("  ")), ObjectKind::Unknown);
    assert_eq!(ObjectKind::Unknown.label(), "Unknown");
}

#[test]
fn unmodelled_code_is_shown_verbatim() {
    let kind = ObjectKind::from_code(Some("XRB"));
    assert_eq!(kind, ObjectKind::Other("XRB".to_owned()));
    assert_eq!(kind.label(), "XRB");
}

#[test]
fn constellations_have_no_magnitude_or_position() {
    assert!(!ObjectKind::Constellation.has_magnitude());
    assert!(!ObjectKind::Constellation.has_position());
    assert!(ObjectKind::Star.has_magnitude());
    assert!(ObjectKind::Unknown.has_position());
}

#[test]
fn named_snapshot_has_only_a_name() {
    let snap = ObjectSnapshot::named("Vega");
    assert_eq!(snap.display_name(), "Vega");
    assert_eq!(snap.kind(), ObjectKind::Unknown);
    assert!(snap.designations.is_empty());
    assert!(snap.vmag.is_none());
}

#[test]
fn alternate_names_take_second_and_third_designations() {
    let snap = ObjectSnapshot {
        designations: vec![
            "NAME Sirius".to_owned(),
            "* alf CMa".to_owned(),
            "NAME Dog Star".to_owned(),
            "HIP 32349".to_owned(),
        ],
        ..ObjectSnapshot::default()
    };
    assert_eq!(snap.display_name(), "Sirius");
    assert_eq!(snap.alternate_names(), vec!["* alf CMa".to_owned(), "Dog Star".to_owned()]);
}
