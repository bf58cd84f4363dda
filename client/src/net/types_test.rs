use super::*;

#[test]
fn place_deserializes_server_body() {
    let place: Place = serde_json::from_str(r#"{"name":"Oslo, Norway","latitude":59.91,"longitude":10.75}"#).unwrap();
    assert_eq!(place.name, "Oslo, Norway");
    assert!((place.longitude - 10.75).abs() < 1e-9);
}

#[test]
fn summary_accepts_null_and_missing_extract() {
    let null: Summary = serde_json::from_str(r#"{"extract":null}"#).unwrap();
    let missing: Summary = serde_json::from_str("{}").unwrap();
    assert_eq!(null, Summary::default());
    assert_eq!(missing, Summary::default());
}

#[test]
fn place_name_deserializes() {
    let body: PlaceName = serde_json::from_str(r#"{"name":"Unnamed place"}"#).unwrap();
    assert_eq!(body.name, "Unnamed place");
}
