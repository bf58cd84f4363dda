//! Observer location drawer on the map page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Edits `LocationState`; the sky host watches the observer and pushes every
//! change to the engine. City search and device geolocation run as local
//! tasks and report failures through the map banner in `SkyState`. Each new
//! attempt clears the previous banner.

use leptos::prelude::*;

use crate::state::location::{LocationState, parse_latitude, parse_longitude};
use crate::state::sky::SkyState;

#[component]
pub fn LocationDrawer() -> impl IntoView {
    let location = expect_context::<RwSignal<LocationState>>();
    let sky = expect_context::<RwSignal<SkyState>>();

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(query) = location.with_untracked(LocationState::search_query) else {
            return;
        };
        sky.update(SkyState::clear_error);
        #[cfg(feature = "hydrate")]
        {
            location.update(|l| l.searching = true);
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::search_city(&query).await;
                if let Some(Err(message)) = location.try_update(|l| l.apply_city_search(outcome)) {
                    sky.update(|s| s.show_error(message));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = query;
    };

    let on_locate = move |_| {
        sky.update(SkyState::clear_error);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = locate().await;
            if let Some(Err(message)) = location.try_update(|l| l.apply_geolocation(outcome)) {
                sky.update(|s| s.show_error(message));
            }
        });
    };

    view! {
        <div class="location-drawer" class:location-drawer--open=move || location.with(|l| l.drawer_open)>
            <button class="btn location-drawer__toggle" on:click=move |_| location.update(LocationState::toggle_drawer)>
                {move || location.with(LocationState::toggle_label)}
            </button>

            <Show when=move || location.with(|l| l.drawer_open)>
                <div class="location-drawer__body">
                    <h3 class="location-drawer__title">
                        {move || format!("Observer – {}", location.with(|l| l.observer.name.clone()))}
                    </h3>

                    <form class="location-drawer__search" on:submit=on_search>
                        <input
                            class="input"
                            type="text"
                            placeholder="Search city"
                            prop:value=move || location.with(|l| l.query.clone())
                            on:input=move |ev| location.update(|l| l.query = event_target_value(&ev))
                        />
                        <button class="btn" type="submit" disabled=move || location.with(|l| l.searching)>
                            "Go"
                        </button>
                    </form>

                    <label class="location-drawer__field">
                        "Custom label"
                        <input
                            class="input"
                            type="text"
                            prop:value=move || location.with(|l| l.observer.name.clone())
                            on:input=move |ev| location.update(|l| l.set_label(&event_target_value(&ev)))
                        />
                    </label>

                    <div class="location-drawer__coords">
                        <label class="location-drawer__field">
                            "Latitude"
                            <input
                                class="input"
                                type="number"
                                step="any"
                                prop:value=move || location.with(|l| l.observer.latitude.to_string())
                                on:input=move |ev| {
                                    if let Some(v) = parse_latitude(&event_target_value(&ev)) {
                                        location.update(|l| l.observer.latitude = v);
                                    }
                                }
                            />
                        </label>
                        <label class="location-drawer__field">
                            "Longitude"
                            <input
                                class="input"
                                type="number"
                                step="any"
                                prop:value=move || location.with(|l| l.observer.longitude.to_string())
                                on:input=move |ev| {
                                    if let Some(v) = parse_longitude(&event_target_value(&ev)) {
                                        location.update(|l| l.observer.longitude = v);
                                    }
                                }
                            />
                        </label>
                    </div>

                    <button class="btn location-drawer__locate" on:click=on_locate>
                        "📍 Use Current Position"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Device position plus a reverse-geocoded name. A failed name lookup still
/// yields the position.
#[cfg(feature = "hydrate")]
async fn locate() -> crate::state::location::GeoOutcome {
    use crate::state::location::GeoOutcome;

    let (latitude, longitude) = match crate::util::geolocation::current_position().await {
        Ok(position) => position,
        Err(err) => return err.outcome(),
    };
    let name = match crate::net::api::reverse_geocode(latitude, longitude).await {
        Ok(name) => Some(name),
        Err(e) => {
            log::warn!("reverse geocode failed: {e}");
            None
        }
    };
    GeoOutcome::Located { latitude, longitude, name }
}
