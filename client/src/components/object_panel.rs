//! Info panel for the object selected in the sky.
//!
//! DESIGN
//! ======
//! Rendered from `SkyState::selection` only. The description area shows a
//! loading line while the encyclopedia lookup is in flight and disappears
//! when the lookup found nothing.

use leptos::prelude::*;

use crate::state::sky::{Description, SkyState};

#[component]
pub fn ObjectPanel() -> impl IntoView {
    let sky = expect_context::<RwSignal<SkyState>>();

    move || {
        sky.with(|state| state.selection.clone()).map(|selection| {
            let about = match selection.description {
                Description::Loading => Some(view! { <p class="object-panel__loading">"Loading description..."</p> }.into_any()),
                Description::Found(text) => Some(view! { <p class="object-panel__text">{text}</p> }.into_any()),
                Description::Missing => None,
            };
            let rows = selection
                .details
                .into_iter()
                .map(|detail| {
                    view! {
                        <div class="object-panel__row">
                            <span class="object-panel__key">{detail.key}</span>
                            <span class="object-panel__value">{detail.value}</span>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <aside class="object-panel">
                    <header class="object-panel__header">
                        <h2 class="object-panel__name">{selection.name}</h2>
                        <button class="object-panel__close" on:click=move |_| sky.update(SkyState::close) title="Close">
                            "✕"
                        </button>
                    </header>
                    {about.map(|body| view! {
                        <section class="object-panel__section">
                            <h3>"About"</h3>
                            {body}
                        </section>
                    })}
                    <section class="object-panel__section">
                        <h3>"Astronomical Data"</h3>
                        {rows}
                    </section>
                </aside>
            }
        })
    }
}
