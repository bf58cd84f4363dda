//! Icon button bound to one engine visibility layer.

use leptos::prelude::*;
use sky::layer::Layer;

/// Layer button. `active` mirrors the engine flag; clicks go to `on_toggle`.
#[component]
pub fn LayerToggle(layer: Layer, #[prop(into)] active: Signal<bool>, on_toggle: Callback<Layer>) -> impl IntoView {
    view! {
        <button
            class="layer-toggle"
            class:layer-toggle--active=move || active.get()
            title=layer.label()
            aria-pressed=move || if active.get() { "true" } else { "false" }
            on:click=move |_| on_toggle.run(layer)
        >
            <img class="layer-toggle__icon" src=layer.icon() alt=""/>
            <span class="layer-toggle__label">{layer.label()}</span>
        </button>
    }
}
