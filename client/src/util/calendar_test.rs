use super::*;
use time::macros::date;

#[test]
fn of_anchors_on_first_day() {
    let view = MonthView::of(date!(2025 - 06 - 21));
    assert_eq!(view.first_day(), date!(2025 - 06 - 01));
    assert_eq!(view.month(), Month::June);
    assert_eq!(view.year(), 2025);
}

#[test]
fn days_cover_whole_month() {
    assert_eq!(MonthView::of(date!(2025 - 06 - 01)).days().len(), 30);
    assert_eq!(MonthView::of(date!(2024 - 02 - 10)).days().len(), 29);
    assert_eq!(MonthView::of(date!(2025 - 02 - 10)).days().len(), 28);
    assert_eq!(MonthView::of(date!(2025 - 12 - 31)).days().len(), 31);
}

#[test]
fn next_and_prev_cross_year_boundaries() {
    let december = MonthView::of(date!(2025 - 12 - 05));
    assert_eq!(december.next().first_day(), date!(2026 - 01 - 01));
    assert_eq!(december.next().prev(), december);

    let january = MonthView::of(date!(2025 - 01 - 15));
    assert_eq!(january.prev().first_day(), date!(2024 - 12 - 01));
}

#[test]
fn grid_pads_to_full_weeks() {
    // 2025-06-01 is a Sunday: no leading blanks, 30 days, 5 trailing blanks.
    let june = MonthView::of(date!(2025 - 06 - 01)).grid();
    assert_eq!(june.len(), 35);
    assert_eq!(june[0], Some(date!(2025 - 06 - 01)));
    assert_eq!(june[29], Some(date!(2025 - 06 - 30)));
    assert!(june[30..].iter().all(Option::is_none));

    // 2025-08-01 is a Friday: five leading blanks.
    let august = MonthView::of(date!(2025 - 08 - 01)).grid();
    assert!(august[..5].iter().all(Option::is_none));
    assert_eq!(august[5], Some(date!(2025 - 08 - 01)));
    assert_eq!(august.len() % 7, 0);
}

#[test]
fn contains_checks_year_and_month() {
    let view = MonthView::of(date!(2025 - 09 - 07));
    assert!(view.contains(date!(2025 - 09 - 30)));
    assert!(!view.contains(date!(2024 - 09 - 07)));
    assert!(!view.contains(date!(2025 - 10 - 01)));
}

#[test]
fn titles_and_long_dates() {
    assert_eq!(MonthView::of(date!(2025 - 10 - 17)).title(), "October 2025");
    assert_eq!(long_date(date!(2025 - 06 - 21)), "June 21, 2025");
    assert_eq!(long_date(date!(2025 - 09 - 07)), "September 7, 2025");
}
