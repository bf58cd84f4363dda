//! Canvas host for the sky engine.
//!
//! ARCHITECTURE
//! ============
//! On hydration the host injects the engine loader and binds it to the
//! canvas. Once the engine reports ready it is configured from the current
//! observer, its change stream is subscribed, and the live handle is kept in
//! a local `StoredValue`. From then on:
//!
//! - observer edits in `LocationState` are pushed with `set_observer`;
//! - layer buttons go through `sky::layer::toggle`;
//! - a `selection` change snapshots the object, builds its detail rows, and
//!   starts a tokened encyclopedia lookup.
//!
//! Dropping the component disposes the stored mount, which removes the
//! injected script. Server rendering only emits the canvas and the loading
//! overlay.

use leptos::prelude::*;
use sky::layer::Layer;

use crate::components::layer_toggle::LayerToggle;
use crate::state::location::LocationState;
use crate::state::sky::SkyState;

#[cfg(feature = "hydrate")]
use sky::{
    change::Change,
    engine::{EngineError, SkyEngine},
    source::EngineConfig,
    web::{EngineMount, StelHandle},
};

#[component]
pub fn SkyHost() -> impl IntoView {
    let location = expect_context::<RwSignal<LocationState>>();
    let sky = expect_context::<RwSignal<SkyState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(not(feature = "hydrate"))]
    let _ = location;

    #[cfg(feature = "hydrate")]
    let engine = StoredValue::new_local(None::<StelHandle>);

    #[cfg(feature = "hydrate")]
    {
        let mount_guard = StoredValue::new_local(None::<EngineMount>);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if mount_guard.with_value(Option::is_some) {
                return;
            }

            let config = EngineConfig::default();
            let ready_config = config.clone();
            let on_ready = move |handle: StelHandle| start_engine(handle, &ready_config, engine, location, sky);
            let on_error = move |err: EngineError| report(sky, &err);
            match sky::web::mount(&config, canvas, on_ready, on_error) {
                Ok(guard) => mount_guard.set_value(Some(guard)),
                Err(err) => report(sky, &err),
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let observer = Memo::new(move |_| location.with(|l| l.observer.clone()));
        Effect::new(move || {
            let observer = observer.get();
            engine.update_value(|slot| {
                if let Some(handle) = slot.as_mut() {
                    if let Err(err) = handle.set_observer(&observer) {
                        log::warn!("observer update rejected: {}", err.detail());
                    }
                }
            });
        });
    }

    let on_toggle = Callback::new(move |layer: Layer| {
        #[cfg(feature = "hydrate")]
        engine.update_value(|slot| {
            if let Some(visible) = slot.as_mut().and_then(|handle| sky::layer::toggle(handle, layer)) {
                sky.update(|s| s.set_layer_flag(layer, visible));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = layer;
    });

    let toggles = move || {
        Layer::ALL
            .iter()
            .map(|&layer| {
                let active = Signal::derive(move || sky.with(|s| s.layer_flag(layer).unwrap_or(false)));
                view! { <LayerToggle layer=layer active=active on_toggle=on_toggle/> }
            })
            .collect_view()
    };

    view! {
        <div class="sky-host">
            <canvas node_ref=canvas_ref class="sky-host__canvas"></canvas>

            <Show when=move || sky.with(|s| !s.ready && s.error.is_none())>
                <div class="sky-host__loading">"Loading sky…"</div>
            </Show>

            {move || {
                sky.with(|s| s.error.clone())
                    .map(|message| view! { <div class="sky-host__error" role="alert">"⚠️ " {message}</div> })
            }}

            <Show when=move || sky.with(|s| s.ready)>
                <div class="sky-host__layers">{toggles}</div>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn report(sky: RwSignal<SkyState>, err: &EngineError) {
    log::warn!("sky engine: {err} {}", err.detail());
    sky.update(|s| s.show_error(err.to_string()));
}

/// `onReady` body: configure, subscribe, publish the handle.
#[cfg(feature = "hydrate")]
fn start_engine(
    mut handle: StelHandle,
    config: &EngineConfig,
    engine: StoredValue<Option<StelHandle>, LocalStorage>,
    location: RwSignal<LocationState>,
    sky: RwSignal<SkyState>,
) {
    let observer = location.with_untracked(|l| l.observer.clone());
    if let Err(err) = sky::engine::configure(&mut handle, &observer, config) {
        report(sky, &err);
        return;
    }

    let listener = handle.clone();
    if let Err(err) = handle.on_change(move |change| on_engine_change(&listener, &change, sky)) {
        report(sky, &err);
        return;
    }

    let layers = sky::layer::snapshot(&handle);
    engine.set_value(Some(handle));
    sky.update(|s| s.engine_ready(layers));
}

#[cfg(feature = "hydrate")]
fn on_engine_change(handle: &StelHandle, change: &Change, sky: RwSignal<SkyState>) {
    if !change.refreshes() {
        return;
    }
    let layers = sky::layer::snapshot(handle);
    sky.update(|s| {
        s.apply_change(change, layers);
    });
    if *change != Change::Selection {
        return;
    }

    let snapshot = handle.selection();
    let details = snapshot
        .as_ref()
        .map(|obj| sky::details::object_details(obj, handle))
        .unwrap_or_default();
    let Some(lookup) = sky.try_update(|s| s.select(snapshot.as_ref(), details)).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        let extract = crate::net::api::fetch_summary(&lookup.name).await;
        sky.update(|s| {
            s.resolve(lookup.token, extract);
        });
    });
}
