use super::*;
use crate::config::ServerConfig;

#[test]
fn from_config_builds_with_defaults() {
    let config = ServerConfig::from_lookup(|_| None).unwrap();
    assert!(AppState::from_config(&config).is_ok());
}

#[tokio::test]
async fn test_helpers_fakes_answer_from_tables() {
    let state = test_helpers::test_app_state_with_extracts(&[("Vega", "A bright star.")]);
    let text = state.encyclopedia.extract("Vega").await.unwrap();
    assert_eq!(text.as_deref(), Some("A bright star."));
    assert_eq!(state.geocoder.reverse(0.0, 0.0).await.unwrap(), None);
}
