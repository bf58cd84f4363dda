//! Command/query interface to the sky engine.
//!
//! Pages and components never hold a reference into the engine's object
//! graph. They talk to an implementation of [`SkyEngine`]: the browser
//! binding in `web`, or the in-memory `fake` in tests.

use crate::layer::Layer;
use crate::object::ObjectSnapshot;
use crate::observer::Observer;
use crate::source::{DataSource, EngineConfig, Font};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Failures while bringing the engine up. `Display` is the banner text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The loader script failed to load.
    #[error("Failed to load Stellarium script")]
    ScriptLoad,

    /// The script loaded but did not install its global entry point.
    #[error("Stellarium engine missing")]
    MissingGlobal,

    /// The engine threw while registering data sources or fonts.
    #[error("Failed to initialise Stellarium data")]
    Init(String),
}

impl EngineError {
    /// Extra context for logs; empty for the variants that carry none.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Init(detail) => detail,
            Self::ScriptLoad | Self::MissingGlobal => "",
        }
    }
}

/// Everything the UI may tell or ask the engine.
pub trait SkyEngine {
    /// Move the observer.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Init`] if the engine rejects the write.
    fn set_observer(&mut self, observer: &Observer) -> Result<(), EngineError>;

    /// Register one data source with its module.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Init`] if the module is missing or throws.
    fn add_data_source(&mut self, source: &DataSource) -> Result<(), EngineError>;

    /// Register a named font.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Init`] if the engine throws.
    fn set_font(&mut self, font: &Font) -> Result<(), EngineError>;

    /// Current `visible` flag of a layer; `None` when the layer is absent.
    fn layer_visible(&self, layer: Layer) -> Option<bool>;

    /// Write a layer's `visible` flag. Returns `false` when the layer is absent.
    fn set_layer_visible(&mut self, layer: Layer, visible: bool) -> bool;

    /// Snapshot of the currently selected object.
    fn selection(&self) -> Option<ObjectSnapshot>;

    /// Convert an ICRF position to CIRS for the current observer.
    fn icrf_to_cirs(&self, v: [f64; 3]) -> Option<[f64; 3]>;
}

/// One-shot startup: observer, data sources, fonts.
///
/// # Errors
///
/// Stops at the first registration the engine rejects.
pub fn configure<E: SkyEngine + ?Sized>(
    engine: &mut E,
    observer: &Observer,
    config: &EngineConfig,
) -> Result<(), EngineError> {
    engine.set_observer(observer)?;
    for source in config.data_sources() {
        engine.add_data_source(&source)?;
    }
    for font in config.fonts() {
        engine.set_font(&font)?;
    }
    Ok(())
}
