//! Client-side state modules.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state as plain structs held in `RwSignal`s. Only the
//! theme flag in `ui` is shared across pages via context. Seed data for the
//! static pages lives beside the state that filters and orders it.

pub mod community;
pub mod dashboard;
pub mod events;
pub mod location;
pub mod profile;
pub mod sky;
pub mod ui;
