//! Data sources and fonts registered with the engine at startup.
//!
//! Registration is one-shot and order-independent: every source names the
//! engine module that consumes it, a URL under the sky data base, and an
//! optional key the module uses to tell sibling sources apart.

use crate::consts::{ENGINE_SCRIPT_URL, ENGINE_WASM_URL, FONT_SCALE, SKY_DATA_BASE_URL};

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

/// Engine core modules that accept data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Stars,
    SkyCultures,
    Dsos,
    Landscapes,
    MilkyWay,
    MinorPlanets,
    Planets,
    Comets,
    Satellites,
}

impl Module {
    /// Property name of the module on the engine core.
    #[must_use]
    pub fn property(self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::SkyCultures => "skycultures",
            Self::Dsos => "dsos",
            Self::Landscapes => "landscapes",
            Self::MilkyWay => "milkyway",
            Self::MinorPlanets => "minor_planets",
            Self::Planets => "planets",
            Self::Comets => "comets",
            Self::Satellites => "satellites",
        }
    }
}

/// A named asset feed for one engine module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub module: Module,
    pub url: String,
    pub key: Option<&'static str>,
}

/// A font registered by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub name: &'static str,
    pub url: &'static str,
    pub scale: f64,
}

/// Where the loader script, binary and sky data live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub script_url: String,
    pub wasm_file: String,
    pub sky_data_base: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            script_url: ENGINE_SCRIPT_URL.to_owned(),
            wasm_file: ENGINE_WASM_URL.to_owned(),
            sky_data_base: SKY_DATA_BASE_URL.to_owned(),
        }
    }
}

impl EngineConfig {
    /// Every data source, resolved against `sky_data_base`.
    #[must_use]
    pub fn data_sources(&self) -> Vec<DataSource> {
        const TABLE: [(Module, &str, Option<&str>); 10] = [
            (Module::Stars, "stars", None),
            (Module::SkyCultures, "skycultures/western", Some("western")),
            (Module::Dsos, "dso", None),
            (Module::Landscapes, "landscapes/guereins", Some("guereins")),
            (Module::MilkyWay, "surveys/milkyway", None),
            (Module::MinorPlanets, "mpcorb.dat", Some("mpc_asteroids")),
            (Module::Planets, "surveys/sso/moon", Some("moon")),
            (Module::Planets, "surveys/sso/sun", Some("sun")),
            (Module::Comets, "CometEls.txt", Some("mpc_comets")),
            (Module::Satellites, "tle_satellite.jsonl.gz", Some("jsonl/sat")),
        ];
        let base = self.sky_data_base.trim_end_matches('/');
        TABLE
            .iter()
            .map(|&(module, path, key)| DataSource { module, url: format!("{base}/{path}"), key })
            .collect()
    }

    /// Fonts registered by name after the data sources.
    #[must_use]
    pub fn fonts(&self) -> [Font; 2] {
        [
            Font { name: "regular", url: "/static/fonts/Roboto-Regular.ttf", scale: FONT_SCALE },
            Font { name: "bold", url: "/static/fonts/Roboto-Bold.ttf", scale: FONT_SCALE },
        ]
    }
}
