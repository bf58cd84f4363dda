use super::*;

#[test]
fn default_config_points_at_bundled_engine() {
    let config = EngineConfig::default();
    assert_eq!(config.script_url, "/stellarium-web-engine/build/stellarium-web-engine.js");
    assert_eq!(config.wasm_file, "/stellarium-web-engine/build/stellarium-web-engine.wasm");
    assert_eq!(config.sky_data_base, "/test-skydata/");
}

#[test]
fn data_sources_cover_every_module() {
    let sources = EngineConfig::default().data_sources();
    assert_eq!(sources.len(), 10);
    for module in [
        Module::Stars,
        Module::SkyCultures,
        Module::Dsos,
        Module::Landscapes,
        Module::MilkyWay,
        Module::MinorPlanets,
        Module::Planets,
        Module::Comets,
        Module::Satellites,
    ] {
        assert!(sources.iter().any(|s| s.module == module), "missing {module:?}");
    }
}

#[test]
fn data_sources_carry_expected_keys() {
    let sources = EngineConfig::default().data_sources();
    let key_of = |url: &str| sources.iter().find(|s| s.url == url).and_then(|s| s.key);
    assert_eq!(key_of("/test-skydata/skycultures/western"), Some("western"));
    assert_eq!(key_of("/test-skydata/landscapes/guereins"), Some("guereins"));
    assert_eq!(key_of("/test-skydata/mpcorb.dat"), Some("mpc_asteroids"));
    assert_eq!(key_of("/test-skydata/CometEls.txt"), Some("mpc_comets"));
    assert_eq!(key_of("/test-skydata/tle_satellite.jsonl.gz"), Some("jsonl/sat"));
    assert_eq!(key_of("/test-skydata/stars"), None);
}

#[test]
fn planets_module_gets_moon_and_sun() {
    let sources = EngineConfig::default().data_sources();
    let planet_keys: Vec<_> = sources
        .iter()
        .filter(|s| s.module == Module::Planets)
        .filter_map(|s| s.key)
        .collect();
    assert_eq!(planet_keys, vec!["moon", "sun"]);
}

#[test]
fn data_sources_respect_custom_base_without_double_slash() {
    let config = EngineConfig { sky_data_base: "https://cdn.test/sky".to_owned(), ..EngineConfig::default() };
    let sources = config.data_sources();
    assert_eq!(sources[0].url, "https://cdn.test/sky/stars");
}

#[test]
fn fonts_are_regular_and_bold() {
    let fonts = EngineConfig::default().fonts();
    assert_eq!(fonts[0].name, "regular");
    assert_eq!(fonts[0].url, "/static/fonts/Roboto-Regular.ttf");
    assert_eq!(fonts[1].name, "bold");
    assert!((fonts[1].scale - 1.38).abs() < f64::EPSILON);
}

#[test]
fn module_property_names_match_engine_core() {
    assert_eq!(Module::MinorPlanets.property(), "minor_planets");
    assert_eq!(Module::SkyCultures.property(), "skycultures");
    assert_eq!(Module::MilkyWay.property(), "milkyway");
}
