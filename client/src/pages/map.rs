//! Interactive star map page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the page-scoped `LocationState` and `SkyState` signals to the
//! sky host, the location drawer, and the object panel. Both signals are
//! dropped on navigation, so returning to the map starts from New York with
//! a fresh engine.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::location_drawer::LocationDrawer;
use crate::components::object_panel::ObjectPanel;
use crate::components::sky_host::SkyHost;
use crate::state::location::LocationState;
use crate::state::sky::SkyState;

#[component]
pub fn MapPage() -> impl IntoView {
    provide_context(RwSignal::new(LocationState::default()));
    provide_context(RwSignal::new(SkyState::default()));

    view! {
        <Title text="Stellarium - Astronomy Enthusiast"/>
        <Meta name="description" content="Interactive Stellarium Web Engine"/>
        <div class="map-page">
            <SkyHost/>
            <LocationDrawer/>
            <ObjectPanel/>
        </div>
    }
}
