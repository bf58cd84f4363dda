use super::*;
use crate::state::test_helpers;

fn query(name: &str) -> Query<SummaryQuery> {
    Query(SummaryQuery { name: name.to_string() })
}

#[tokio::test]
async fn summary_returns_extract_for_exact_name() {
    let state = test_helpers::test_app_state_with_extracts(&[("Betelgeuse", "A red supergiant in Orion.")]);
    let Json(body) = summary(State(state), query("Betelgeuse")).await;
    assert_eq!(body.extract.as_deref(), Some("A red supergiant in Orion."));
}

#[tokio::test]
async fn summary_falls_back_to_cleaned_name() {
    let state = test_helpers::test_app_state_with_extracts(&[("Andromeda Galaxy", "The nearest large galaxy.")]);
    let Json(body) = summary(State(state), query("M Andromeda Galaxy")).await;
    assert_eq!(body.extract.as_deref(), Some("The nearest large galaxy."));
}

#[tokio::test]
async fn summary_miss_is_null_extract() {
    let state = test_helpers::test_app_state();
    let Json(body) = summary(State(state), query("Nonexistent Thing")).await;
    assert_eq!(body, Summary { extract: None });
}

#[tokio::test]
async fn summary_unknown_object_is_null_extract() {
    let state = test_helpers::test_app_state_with_extracts(&[("Unknown Object", "should never be asked")]);
    let Json(body) = summary(State(state), query(sky::consts::UNKNOWN_OBJECT)).await;
    assert_eq!(body.extract, None);
}

#[test]
fn summary_serializes_null_extract() {
    let json = serde_json::to_string(&Summary { extract: None }).unwrap();
    assert_eq!(json, r#"{"extract":null}"#);
}
