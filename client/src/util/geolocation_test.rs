use super::*;
use crate::state::location::{GEOLOCATION_UNSUPPORTED, LOCATION_DENIED, LocationState};

#[test]
fn errors_map_to_location_outcomes() {
    assert_eq!(GeoError::Unsupported.outcome(), GeoOutcome::Unsupported);
    assert_eq!(GeoError::Denied.outcome(), GeoOutcome::Denied);
}

#[test]
fn mapped_outcomes_produce_banner_texts() {
    let mut state = LocationState::default();
    assert_eq!(state.apply_geolocation(GeoError::Unsupported.outcome()), Err(GEOLOCATION_UNSUPPORTED));
    assert_eq!(state.apply_geolocation(GeoError::Denied.outcome()), Err(LOCATION_DENIED));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn position_is_unsupported_off_browser() {
    let fut = current_position();
    let mut fut = std::pin::pin!(fut);
    let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
    assert_eq!(fut.as_mut().poll(&mut cx), std::task::Poll::Ready(Err(GeoError::Unsupported)));
}
