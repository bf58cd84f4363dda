//! Events page: calendar and list views over the seed events.
//!
//! DESIGN
//! ======
//! `EventsState` holds the visible month, the selected day, and the open
//! modal. The calendar grid comes from `util::calendar` so server and
//! browser render the same month.

use leptos::prelude::*;

use crate::components::calendar::MonthCalendar;
use crate::components::event_modal::EventModal;
use crate::state::events::{Event, EventsState, EventsTab, NO_EVENTS_ON_DATE, event_dates, seed_events};

#[component]
pub fn EventsPage() -> impl IntoView {
    let events = StoredValue::new(seed_events());
    let state = RwSignal::new(events.with_value(|e| EventsState::new(e)));
    let marked = events.with_value(|e| event_dates(e));

    let on_close = Callback::new(move |()| state.update(EventsState::close));
    let open = move |id: u32| state.update(|s| s.open(id));

    let tab_button = move |tab: EventsTab, label: &'static str| {
        view! {
            <button
                class="tabs__trigger"
                class:tabs__trigger--active=move || state.with(|s| s.tab == tab)
                on:click=move |_| state.update(|s| s.tab = tab)
            >
                {label}
            </button>
        }
    };

    let on_date = move || {
        let (selected, empty) = state.with(|s| events.with_value(|e| (s.selected_events(e), s.shows_empty_state(e))));
        view! {
            {selected.into_iter().map(|event| view! { <EventRow event=event on_details=open/> }).collect_view()}
            <Show when=move || empty>
                <p class="muted">{NO_EVENTS_ON_DATE}</p>
            </Show>
        }
    };

    view! {
        <div class="events">
            <div class="tabs">
                {tab_button(EventsTab::Calendar, "📅 Calendar View")}
                {tab_button(EventsTab::List, "☰ List View")}
            </div>

            <Show
                when=move || state.with(|s| s.tab == EventsTab::Calendar)
                fallback=move || {
                    view! {
                        <div class="card">
                            <h3 class="card__title">"All Upcoming Events"</h3>
                            <p class="muted">"Browse the complete list of scheduled celestial events"</p>
                            <ul class="event-list">
                                {events
                                    .get_value()
                                    .into_iter()
                                    .map(|event| view! { <li><EventRow event=event on_details=open/></li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                }
            >
                <div class="card events__calendar">
                    <h3 class="card__title">"Event Calendar"</h3>
                    <p class="muted">"Select a date to view scheduled celestial events"</p>
                    <div class="events__calendar-body">
                        <MonthCalendar state=state marked=marked.clone()/>
                        <section class="events__on-date">
                            <h3>{move || state.with(EventsState::heading)}</h3>
                            {on_date}
                        </section>
                    </div>
                </div>
            </Show>

            {move || {
                state
                    .with(|s| events.with_value(|e| s.opened(e).cloned()))
                    .map(|event| view! { <EventModal event=event on_close=on_close/> })
            }}
        </div>
    }
}

#[component]
fn EventRow(event: Event, #[prop(into)] on_details: Callback<u32>) -> impl IntoView {
    let id = event.id;
    view! {
        <article class="event-row">
            <span class="event-row__icon">{event.icon.glyph()}</span>
            <span class="event-row__body">
                <h4>{event.title}</h4>
                <p class="muted">{event.time}</p>
            </span>
            <button class="btn btn--ghost" on:click=move |_| on_details.run(id)>"Details"</button>
        </article>
    }
}
