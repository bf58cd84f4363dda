//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout chrome (navbar, footer, star background) reads the shared theme
//! from Leptos context. Page widgets receive their page-local signals as
//! props. The map components talk to the sky engine only through the
//! `sky` crate.

pub mod calendar;
pub mod event_modal;
pub mod footer;
pub mod layer_toggle;
pub mod location_drawer;
pub mod navbar;
pub mod object_panel;
pub mod post_card;
pub mod sky_host;
pub mod star_background;
