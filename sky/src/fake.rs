//! In-memory [`SkyEngine`] for tests.
//!
//! Records every command and emits the attribute names a real engine would
//! pass to its change callback.

use std::collections::BTreeMap;

use crate::engine::{EngineError, SkyEngine};
use crate::layer::Layer;
use crate::object::ObjectSnapshot;
use crate::observer::Observer;
use crate::source::{DataSource, Font, Module};

#[derive(Debug, Clone)]
pub struct FakeEngine {
    observer: Option<Observer>,
    sources: Vec<DataSource>,
    fonts: Vec<String>,
    layers: BTreeMap<Layer, bool>,
    selection: Option<ObjectSnapshot>,
    converts_frames: bool,
    failing_module: Option<Module>,
    changes: Vec<String>,
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeEngine {
    /// Every layer present; constellations hidden, everything else visible.
    #[must_use]
    pub fn new() -> Self {
        let layers = Layer::ALL
            .iter()
            .map(|&layer| (layer, layer != Layer::Constellations))
            .collect();
        Self {
            observer: None,
            sources: Vec::new(),
            fonts: Vec::new(),
            layers,
            selection: None,
            converts_frames: true,
            failing_module: None,
            changes: Vec::new(),
        }
    }

    #[must_use]
    pub fn without_layer(mut self, layer: Layer) -> Self {
        self.layers.remove(&layer);
        self
    }

    #[must_use]
    pub fn without_frame_conversion(mut self) -> Self {
        self.converts_frames = false;
        self
    }

    #[must_use]
    pub fn failing_module(mut self, module: Module) -> Self {
        self.failing_module = Some(module);
        self
    }

    /// Change the selection the way a click on the sky would.
    pub fn select(&mut self, obj: Option<ObjectSnapshot>) {
        self.selection = obj;
        self.changes.push("selection".to_owned());
    }

    /// Drain recorded change notifications.
    pub fn take_changes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.changes)
    }

    #[must_use]
    pub fn observer(&self) -> Option<&Observer> {
        self.observer.as_ref()
    }

    #[must_use]
    pub fn sources(&self) -> &[DataSource] {
        &self.sources
    }

    #[must_use]
    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }
}

impl SkyEngine for FakeEngine {
    fn set_observer(&mut self, observer: &Observer) -> Result<(), EngineError> {
        self.observer = Some(observer.clone());
        self.changes.push("observer".to_owned());
        Ok(())
    }

    fn add_data_source(&mut self, source: &DataSource) -> Result<(), EngineError> {
        if self.failing_module == Some(source.module) {
            return Err(EngineError::Init(format!("{}.addDataSource threw", source.module.property())));
        }
        self.sources.push(source.clone());
        Ok(())
    }

    fn set_font(&mut self, font: &Font) -> Result<(), EngineError> {
        self.fonts.push(font.name.to_owned());
        Ok(())
    }

    fn layer_visible(&self, layer: Layer) -> Option<bool> {
        self.layers.get(&layer).copied()
    }

    fn set_layer_visible(&mut self, layer: Layer, visible: bool) -> bool {
        match self.layers.get_mut(&layer) {
            Some(flag) => {
                *flag = visible;
                self.changes.push("visible".to_owned());
                true
            }
            None => false,
        }
    }

    fn selection(&self) -> Option<ObjectSnapshot> {
        self.selection.clone()
    }

    fn icrf_to_cirs(&self, v: [f64; 3]) -> Option<[f64; 3]> {
        self.converts_frames.then_some(v)
    }
}
