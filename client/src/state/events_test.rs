use super::*;

#[test]
fn solstice_date_has_one_event() {
    let events = seed_events();
    let found = events_on(&events, date!(2025 - 06 - 21));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Summer Solstice Sunrise");
}

#[test]
fn day_after_solstice_shows_empty_state() {
    let events = seed_events();
    let mut state = EventsState::new(&events);
    state.select_date(date!(2025 - 06 - 22));
    assert!(state.selected_events(&events).is_empty());
    assert!(state.shows_empty_state(&events));
    assert_eq!(NO_EVENTS_ON_DATE, "No events on this date");
}

#[test]
fn no_selection_means_no_empty_state_and_dash_heading() {
    let events = seed_events();
    let state = EventsState::new(&events);
    assert!(state.selected_events(&events).is_empty());
    assert!(!state.shows_empty_state(&events));
    assert_eq!(state.heading(), "Events on —");
}

#[test]
fn heading_uses_long_date() {
    let events = seed_events();
    let mut state = EventsState::new(&events);
    state.select_date(date!(2025 - 08 - 12));
    assert_eq!(state.heading(), "Events on August 12, 2025");
    assert_eq!(state.selected_events(&events)[0].title, "Perseid Meteor Shower Peak");
}

#[test]
fn calendar_opens_on_first_event_month() {
    let events = seed_events();
    let state = EventsState::new(&events);
    assert_eq!(state.tab, EventsTab::Calendar);
    assert_eq!(state.month.first_day(), date!(2025 - 06 - 01));
}

#[test]
fn month_navigation_moves_view_only() {
    let events = seed_events();
    let mut state = EventsState::new(&events);
    state.select_date(date!(2025 - 06 - 21));
    state.next_month();
    assert_eq!(state.month.first_day(), date!(2025 - 07 - 01));
    state.prev_month();
    state.prev_month();
    assert_eq!(state.month.first_day(), date!(2025 - 05 - 01));
    assert_eq!(state.selected_date, Some(date!(2025 - 06 - 21)));
}

#[test]
fn selecting_outside_month_follows_the_date() {
    let events = seed_events();
    let mut state = EventsState::new(&events);
    state.select_date(date!(2025 - 10 - 17));
    assert_eq!(state.month.first_day(), date!(2025 - 10 - 01));
}

#[test]
fn event_dates_mark_all_four_days() {
    let dates = event_dates(&seed_events());
    assert_eq!(dates.len(), 4);
    assert!(dates.contains(&date!(2025 - 09 - 07)));
}

#[test]
fn modal_open_and_close() {
    let events = seed_events();
    let mut state = EventsState::new(&events);
    assert!(state.opened(&events).is_none());
    state.open(3);
    assert_eq!(state.opened(&events).map(|e| e.title), Some("Last-Quarter Moon"));
    state.close();
    assert!(state.opened(&events).is_none());
}

#[test]
fn open_unknown_id_finds_nothing() {
    let events = seed_events();
    let mut state = EventsState::new(&events);
    state.open(99);
    assert!(state.opened(&events).is_none());
}
