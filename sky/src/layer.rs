//! Boolean visibility layers exposed by the engine core.
//!
//! Each layer is a sub-object of the core carrying a `visible` flag. The flag
//! lives in the engine, not here: toggling reads the current value through
//! [`SkyEngine::layer_visible`] and writes the negation back. The UI learns
//! about the new value from the engine's own change notification.

use crate::engine::SkyEngine;

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;

/// Layers the map page offers toggles for, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Constellations,
    Atmosphere,
    Landscape,
    AzimuthalGrid,
    EquatorialGrid,
    DeepSky,
}

impl Layer {
    pub const ALL: [Layer; 6] = [
        Layer::Constellations,
        Layer::Atmosphere,
        Layer::Landscape,
        Layer::AzimuthalGrid,
        Layer::EquatorialGrid,
        Layer::DeepSky,
    ];

    /// Property path from the engine core to the object owning `visible`.
    #[must_use]
    pub fn path(self) -> &'static [&'static str] {
        match self {
            Self::Constellations => &["constellations"],
            Self::Atmosphere => &["atmosphere"],
            Self::Landscape => &["landscapes"],
            Self::AzimuthalGrid => &["lines", "azimuthal"],
            Self::EquatorialGrid => &["lines", "equatorial"],
            Self::DeepSky => &["dsos"],
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Constellations => "Constellations",
            Self::Atmosphere => "Atmosphere",
            Self::Landscape => "Landscape",
            Self::AzimuthalGrid => "Azimuth grid",
            Self::EquatorialGrid => "Equator grid",
            Self::DeepSky => "Deep-sky",
        }
    }

    /// Button icon served from the static symbols directory.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Constellations => "/static/imgs/symbols/btn-cst-lines.svg",
            Self::Atmosphere => "/static/imgs/symbols/btn-atmosphere.svg",
            Self::Landscape => "/static/imgs/symbols/btn-landscape.svg",
            Self::AzimuthalGrid => "/static/imgs/symbols/btn-azimuthal-grid.svg",
            Self::EquatorialGrid => "/static/imgs/symbols/btn-equatorial-grid.svg",
            Self::DeepSky => "/static/imgs/symbols/btn-nebulae.svg",
        }
    }
}

/// Flip a layer's flag on the engine.
///
/// Returns the value written, or `None` when the engine does not expose the
/// layer (the toggle is then a no-op).
pub fn toggle<E: SkyEngine + ?Sized>(engine: &mut E, layer: Layer) -> Option<bool> {
    let next = !engine.layer_visible(layer)?;
    engine.set_layer_visible(layer, next).then_some(next)
}

/// Read every layer flag, skipping layers the engine does not expose.
pub fn snapshot<E: SkyEngine + ?Sized>(engine: &E) -> Vec<(Layer, bool)> {
    Layer::ALL
        .iter()
        .filter_map(|&layer| engine.layer_visible(layer).map(|visible| (layer, visible)))
        .collect()
}
