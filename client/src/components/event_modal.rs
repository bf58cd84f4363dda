//! Modal dialog with the full details of one celestial event.

use leptos::prelude::*;

use crate::state::events::Event;
use crate::util::calendar::long_date;

/// Event details dialog. Both the ✕ and the Close button fire `on_close`.
#[component]
pub fn EventModal(event: Event, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog event-modal"
                role="dialog"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <header class="dialog__header">
                    <span class="event-modal__icon">{event.icon.glyph()}</span>
                    <h2 class="dialog__title">{event.title}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close">"✕"</button>
                </header>
                <dl class="event-modal__facts">
                    <dt>"Date"</dt>
                    <dd>{long_date(event.date)}</dd>
                    <dt>"Time"</dt>
                    <dd>{event.time}</dd>
                </dl>
                <p class="event-modal__description">{event.description}</p>
                <footer class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Close"</button>
                </footer>
            </div>
        </div>
    }
}
