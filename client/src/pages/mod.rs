//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its view-local state as `RwSignal`s created on mount and
//! delegates rendering details to `components`. Nothing but the theme
//! survives navigation.

pub mod community;
pub mod dashboard;
pub mod events;
pub mod home;
pub mod map;
pub mod profile;
