//! Typed command/query surface over the Stellarium Web Engine.
//!
//! The engine itself is a JavaScript loader plus a WebAssembly binary that
//! owns all astronomy: star positions, frame conversions, rendering. This
//! crate never reimplements any of that. It describes what the UI is allowed
//! to ask of the engine and tell it, so that pages hold typed values instead
//! of raw references into the engine's object graph.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The [`engine::SkyEngine`] trait, startup configuration, errors |
//! | [`observer`] | Observer location fed to the engine |
//! | [`source`] | Data sources and fonts registered at startup |
//! | [`layer`] | Boolean visibility layers and the toggle command |
//! | [`change`] | Classification of engine change notifications |
//! | [`object`] | Typed snapshot of a selected object and its kind |
//! | [`naming`] | Display names and encyclopedia lookup terms |
//! | [`coords`] | Spherical helpers and coordinate/distance formatting |
//! | [`details`] | Per-object detail rows for the info panel |
//! | [`consts`] | Asset paths and fixed strings |
//! | `web` | Browser bindings (feature `web`) |
//! | `fake` | In-memory engine (tests, feature `fake`) |

pub mod change;
pub mod consts;
pub mod coords;
pub mod details;
pub mod engine;
#[cfg(any(test, feature = "fake"))]
pub mod fake;
pub mod layer;
pub mod naming;
pub mod object;
pub mod observer;
pub mod source;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{EngineError, SkyEngine};
pub use observer::Observer;
