//! Month grid for the events page.
//!
//! Days carrying an event are marked; clicking a day selects it. Padding
//! cells before the first and after the last day are blank.

use std::collections::BTreeSet;

use leptos::prelude::*;
use time::Date;

use crate::state::events::EventsState;
use crate::util::calendar::WEEKDAY_LABELS;

#[component]
pub fn MonthCalendar(state: RwSignal<EventsState>, marked: BTreeSet<Date>) -> impl IntoView {
    let marked = StoredValue::new(marked);

    let cells = move || {
        let current = state.get();
        current
            .month
            .grid()
            .into_iter()
            .map(|cell| match cell {
                None => view! { <span class="calendar__cell calendar__cell--blank"></span> }.into_any(),
                Some(day) => {
                    let has_event = marked.with_value(|m| m.contains(&day));
                    let selected = current.selected_date == Some(day);
                    view! {
                        <button
                            class="calendar__cell"
                            class:calendar__cell--event=has_event
                            class:calendar__cell--selected=selected
                            on:click=move |_| state.update(|s| s.select_date(day))
                        >
                            {day.day()}
                        </button>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    view! {
        <div class="calendar">
            <div class="calendar__header">
                <button class="btn calendar__nav" on:click=move |_| state.update(EventsState::prev_month) title="Previous month">
                    "‹"
                </button>
                <span class="calendar__title">{move || state.get().month.title()}</span>
                <button class="btn calendar__nav" on:click=move |_| state.update(EventsState::next_month) title="Next month">
                    "›"
                </button>
            </div>
            <div class="calendar__weekdays">
                {WEEKDAY_LABELS.iter().map(|&label| view! { <span>{label}</span> }).collect_view()}
            </div>
            <div class="calendar__grid">{cells}</div>
        </div>
    }
}
