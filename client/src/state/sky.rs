//! Sky map view state: engine readiness, banner, layers, selection.
//!
//! DESIGN
//! ======
//! The engine handle itself lives in the map host component; this module
//! holds only what the view renders. Description lookups are tagged with a
//! monotonically increasing token so a slow response for an earlier
//! selection can never overwrite the current one.
//!
//! Selection lifecycle:
//! `None` (idle) -> `Loading` -> `Found` | `Missing` -> `None` on close.
//! A selection whose name yields no lookup terms goes straight to `Missing`.

use sky::change::Change;
use sky::details::Detail;
use sky::layer::Layer;
use sky::object::ObjectSnapshot;
use sky::naming::lookup_terms;

#[cfg(test)]
#[path = "sky_test.rs"]
mod sky_test;

/// Encyclopedia text for the selected object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Description {
    Loading,
    Found(String),
    Missing,
}

/// The selected object as rendered in the info panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub token: u64,
    pub name: String,
    pub details: Vec<Detail>,
    pub description: Description,
}

/// A description lookup the host should start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lookup {
    pub token: u64,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkyState {
    pub ready: bool,
    pub error: Option<String>,
    pub revision: u64,
    pub layers: Vec<(Layer, bool)>,
    pub selection: Option<Selection>,
    next_token: u64,
}

impl SkyState {
    /// Engine finished startup; the layer panel may render.
    pub fn engine_ready(&mut self, layers: Vec<(Layer, bool)>) {
        self.ready = true;
        self.layers = layers;
        self.revision += 1;
    }

    /// Replace the banner.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Apply an engine change notification. Returns `false` for ignored changes.
    ///
    /// The caller supplies fresh layer flags since any refresh may reflect
    /// a layer write made elsewhere.
    pub fn apply_change(&mut self, change: &Change, layers: Vec<(Layer, bool)>) -> bool {
        if !change.refreshes() {
            return false;
        }
        self.revision += 1;
        self.layers = layers;
        true
    }

    /// Replace the selection from an engine snapshot.
    ///
    /// `None` clears the panel. Returns the lookup to start, if any.
    pub fn select(&mut self, snapshot: Option<&ObjectSnapshot>, details: Vec<Detail>) -> Option<Lookup> {
        self.next_token += 1;
        let token = self.next_token;

        let Some(snapshot) = snapshot else {
            self.selection = None;
            return None;
        };

        let name = snapshot.display_name();
        let wants_lookup = !lookup_terms(&name).is_empty();
        let description = if wants_lookup { Description::Loading } else { Description::Missing };
        self.selection = Some(Selection { token, name: name.clone(), details, description });

        wants_lookup.then_some(Lookup { token, name })
    }

    /// Deliver a lookup result. Stale tokens are dropped; returns whether
    /// the result was applied.
    pub fn resolve(&mut self, token: u64, extract: Option<String>) -> bool {
        let Some(selection) = self.selection.as_mut().filter(|s| s.token == token) else {
            return false;
        };
        selection.description = match extract.filter(|t| !t.trim().is_empty()) {
            Some(text) => Description::Found(text),
            None => Description::Missing,
        };
        true
    }

    /// Close the info panel. Any in-flight lookup becomes stale.
    pub fn close(&mut self) {
        self.next_token += 1;
        self.selection = None;
    }

    /// Current flag for `layer`, if the engine exposes it.
    pub fn layer_flag(&self, layer: Layer) -> Option<bool> {
        self.layers.iter().find(|(l, _)| *l == layer).map(|(_, on)| *on)
    }

    /// Record a completed toggle.
    pub fn set_layer_flag(&mut self, layer: Layer, visible: bool) {
        match self.layers.iter_mut().find(|(l, _)| *l == layer) {
            Some(entry) => entry.1 = visible,
            None => self.layers.push((layer, visible)),
        }
    }
}
