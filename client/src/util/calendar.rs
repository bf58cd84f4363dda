//! Month grid math for the events calendar.
//!
//! Weeks start on Sunday. Grid cells before the first and after the last
//! day of the month are `None` so every row has seven cells.

use time::{Date, Month};

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// A displayed month, anchored on its first day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthView {
    first: Date,
}

impl MonthView {
    /// The month containing `date`.
    pub fn of(date: Date) -> Self {
        let first = Date::from_calendar_date(date.year(), date.month(), 1).unwrap_or(date);
        Self { first }
    }

    pub fn first_day(self) -> Date {
        self.first
    }

    pub fn year(self) -> i32 {
        self.first.year()
    }

    pub fn month(self) -> Month {
        self.first.month()
    }

    /// Every day of the month in order.
    pub fn days(self) -> Vec<Date> {
        let mut days = Vec::with_capacity(31);
        let mut day = Some(self.first);
        while let Some(d) = day.filter(|d| d.month() == self.first.month()) {
            days.push(d);
            day = d.next_day();
        }
        days
    }

    pub fn next(self) -> Self {
        self.days()
            .last()
            .and_then(|last| last.next_day())
            .map_or(self, Self::of)
    }

    pub fn prev(self) -> Self {
        self.first.previous_day().map_or(self, Self::of)
    }

    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Seven-column grid with blank leading and trailing cells.
    pub fn grid(self) -> Vec<Option<Date>> {
        let lead = usize::from(self.first.weekday().number_days_from_sunday());
        let mut cells: Vec<Option<Date>> = std::iter::repeat_n(None, lead).collect();
        cells.extend(self.days().into_iter().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
    }

    /// Header text such as `June 2025`.
    pub fn title(self) -> String {
        format!("{} {}", self.month(), self.year())
    }
}

/// Long US-style date such as `June 21, 2025`.
pub fn long_date(date: Date) -> String {
    format!("{} {}, {}", date.month(), date.day(), date.year())
}
