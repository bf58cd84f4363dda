use super::*;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_env_is_empty() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.nominatim_base_url, DEFAULT_NOMINATIM_BASE_URL);
    assert_eq!(cfg.wikipedia_api_url, DEFAULT_WIKIPEDIA_API_URL);
    assert_eq!(cfg.user_agent, DEFAULT_LOOKUP_USER_AGENT);
    assert_eq!(
        cfg.timeouts,
        LookupTimeouts {
            request_secs: DEFAULT_LOOKUP_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_LOOKUP_CONNECT_TIMEOUT_SECS,
        }
    );
    assert!(cfg.assets_dir.ends_with("public"));
}

#[test]
fn overrides_are_parsed() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("ASSETS_DIR", "/srv/astro"),
        ("NOMINATIM_BASE_URL", "http://geo.test/"),
        ("WIKIPEDIA_API_URL", "http://wiki.test/w/api.php"),
        ("LOOKUP_USER_AGENT", "tester/1.0"),
        ("LOOKUP_REQUEST_TIMEOUT_SECS", "42"),
        ("LOOKUP_CONNECT_TIMEOUT_SECS", "7"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/astro"));
    assert_eq!(cfg.nominatim_base_url, "http://geo.test");
    assert_eq!(cfg.wikipedia_api_url, "http://wiki.test/w/api.php");
    assert_eq!(cfg.user_agent, "tester/1.0");
    assert_eq!(cfg.timeouts, LookupTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn invalid_port_errors() {
    let err = config_from(&[("PORT", "not-a-port")]).unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));
}

#[test]
fn blank_user_agent_errors() {
    let err = config_from(&[("LOOKUP_USER_AGENT", "  ")]).unwrap_err().to_string();
    assert!(err.contains("LOOKUP_USER_AGENT"));
}

#[test]
fn unparseable_or_zero_timeouts_fall_back_to_defaults() {
    let cfg = config_from(&[("LOOKUP_REQUEST_TIMEOUT_SECS", "soon"), ("LOOKUP_CONNECT_TIMEOUT_SECS", "0")]).unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LOOKUP_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_LOOKUP_CONNECT_TIMEOUT_SECS);
}

#[test]
fn blank_base_url_falls_back_to_default() {
    let cfg = config_from(&[("NOMINATIM_BASE_URL", "")]).unwrap();
    assert_eq!(cfg.nominatim_base_url, DEFAULT_NOMINATIM_BASE_URL);
}
