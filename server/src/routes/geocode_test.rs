use super::*;
use crate::state::test_helpers::{self, FakeGeocoder};

fn reverse_query(lat: f64, lon: f64) -> Query<ReverseQuery> {
    Query(ReverseQuery { lat, lon })
}

fn search_query(q: &str) -> Query<SearchQuery> {
    Query(SearchQuery { q: q.to_string() })
}

// =============================================================================
// reverse
// =============================================================================

#[tokio::test]
async fn reverse_returns_settlement_name() {
    let state = test_helpers::test_app_state_with_geocoder(FakeGeocoder {
        reverse_name: Some("Lisbon".into()),
        ..FakeGeocoder::default()
    });
    let Json(body) = reverse(State(state), reverse_query(38.72, -9.14)).await.unwrap();
    assert_eq!(body, PlaceName { name: "Lisbon".into() });
}

#[tokio::test]
async fn reverse_without_settlement_is_unnamed_place() {
    let state = test_helpers::test_app_state();
    let Json(body) = reverse(State(state), reverse_query(0.0, -30.0)).await.unwrap();
    assert_eq!(body.name, UNNAMED_PLACE);
}

#[tokio::test]
async fn reverse_rejects_out_of_range_coordinates() {
    let state = test_helpers::test_app_state();
    let status = reverse(State(state.clone()), reverse_query(91.0, 0.0)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let status = reverse(State(state), reverse_query(0.0, f64::NAN)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reverse_upstream_failure_is_bad_gateway() {
    let state = test_helpers::test_app_state_with_geocoder(FakeGeocoder { fail: true, ..FakeGeocoder::default() });
    let status = reverse(State(state), reverse_query(10.0, 10.0)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

// =============================================================================
// search
// =============================================================================

#[tokio::test]
async fn search_returns_first_place() {
    let mut geocoder = FakeGeocoder::default();
    geocoder.places.insert("tokyo".into(), test_helpers::place("Tokyo", 35.6762, 139.6503));
    let state = test_helpers::test_app_state_with_geocoder(geocoder);

    let Json(place) = search(State(state), search_query("  Tokyo ")).await.unwrap();
    assert_eq!(place.name, "Tokyo");
    assert!((place.latitude - 35.6762).abs() < 1e-9);
}

#[tokio::test]
async fn search_blank_query_is_bad_request() {
    let state = test_helpers::test_app_state();
    let status = search(State(state), search_query("   ")).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_without_match_is_not_found() {
    let state = test_helpers::test_app_state();
    let status = search(State(state), search_query("Atlantis")).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_upstream_failure_is_bad_gateway() {
    let state = test_helpers::test_app_state_with_geocoder(FakeGeocoder { fail: true, ..FakeGeocoder::default() });
    let status = search(State(state), search_query("Oslo")).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
