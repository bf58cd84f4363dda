//! Celestial events: seed list, date filtering, calendar/list view state.

use std::collections::BTreeSet;

use time::Date;
use time::macros::date;

use crate::util::calendar::{MonthView, long_date};

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

/// Empty-state text for a selected date without events.
pub const NO_EVENTS_ON_DATE: &str = "No events on this date";

/// Glyph shown beside an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventIcon {
    Sun,
    Star,
    Moon,
    Telescope,
}

impl EventIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "☀",
            Self::Star => "★",
            Self::Moon => "☾",
            Self::Telescope => "🔭",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub date: Date,
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: EventIcon,
}

pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            date: date!(2025 - 06 - 21),
            time: "05:00 IST",
            title: "Summer Solstice Sunrise",
            description: "The Sun reaches its highest position in the sky marking the beginning of astronomical summer.",
            icon: EventIcon::Sun,
        },
        Event {
            id: 2,
            date: date!(2025 - 08 - 12),
            time: "22:30 IST",
            title: "Perseid Meteor Shower Peak",
            description: "One of the year's most prolific meteor showers, producing up to 100 meteors per hour at its peak.",
            icon: EventIcon::Star,
        },
        Event {
            id: 3,
            date: date!(2025 - 09 - 07),
            time: "03:17 IST",
            title: "Last-Quarter Moon",
            description: "The Moon is three-quarters of the way through its orbit and appears half-illuminated.",
            icon: EventIcon::Moon,
        },
        Event {
            id: 4,
            date: date!(2025 - 10 - 17),
            time: "20:15 IST",
            title: "Partial Lunar Eclipse",
            description: "Earth's shadow obscures part of the Moon creating a dramatic celestial event visible from India.",
            icon: EventIcon::Telescope,
        },
    ]
}

/// Events falling on `date`, in list order.
pub fn events_on(events: &[Event], date: Date) -> Vec<Event> {
    events.iter().filter(|e| e.date == date).cloned().collect()
}

/// Dates that carry at least one event.
pub fn event_dates(events: &[Event]) -> BTreeSet<Date> {
    events.iter().map(|e| e.date).collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventsTab {
    #[default]
    Calendar,
    List,
}

/// Events page state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventsState {
    pub tab: EventsTab,
    pub month: MonthView,
    pub selected_date: Option<Date>,
    pub open_event: Option<u32>,
}

impl EventsState {
    /// Calendar opens on the month of the earliest seed event.
    pub fn new(events: &[Event]) -> Self {
        let anchor = events.iter().map(|e| e.date).min().unwrap_or(date!(2025 - 01 - 01));
        Self { tab: EventsTab::Calendar, month: MonthView::of(anchor), selected_date: None, open_event: None }
    }

    pub fn select_date(&mut self, date: Date) {
        self.selected_date = Some(date);
        if !self.month.contains(date) {
            self.month = MonthView::of(date);
        }
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
    }

    pub fn prev_month(&mut self) {
        self.month = self.month.prev();
    }

    pub fn open(&mut self, id: u32) {
        self.open_event = Some(id);
    }

    pub fn close(&mut self) {
        self.open_event = None;
    }

    /// Events for the selected date; empty when nothing is selected.
    pub fn selected_events(&self, events: &[Event]) -> Vec<Event> {
        self.selected_date.map(|d| events_on(events, d)).unwrap_or_default()
    }

    /// Whether to show the "no events" message.
    pub fn shows_empty_state(&self, events: &[Event]) -> bool {
        self.selected_date.is_some() && self.selected_events(events).is_empty()
    }

    /// Header above the per-date list.
    pub fn heading(&self) -> String {
        match self.selected_date {
            Some(d) => format!("Events on {}", long_date(d)),
            None => "Events on —".to_owned(),
        }
    }

    pub fn opened<'a>(&self, events: &'a [Event]) -> Option<&'a Event> {
        let id = self.open_event?;
        events.iter().find(|e| e.id == id)
    }
}
