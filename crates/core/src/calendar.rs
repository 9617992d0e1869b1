//! Date arithmetic and date rendering used by listings and keyboards

use chrono::{Duration, NaiveDate};

pub const TODAY_LABEL: &str = "Сегодня";
pub const TOMORROW_LABEL: &str = "Завтра";

/// Full date as shown in listing headers, e.g. `05.03.2026`
pub fn pretty_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Day and month as shown inside listings and on day buttons, e.g. `05.03`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%d.%m").to_string()
}

/// `today + offset` days
pub fn offset_date(today: NaiveDate, offset: i64) -> NaiveDate {
    today + Duration::days(offset)
}

/// Every date of a window of `span` days starting at `today`
pub fn guide_window(today: NaiveDate, span: u32) -> Vec<NaiveDate> {
    (0..i64::from(span))
        .map(|offset| offset_date(today, offset))
        .collect()
}

/// Last date (inclusive) of a window of `span` days starting at `today`
pub fn window_end(today: NaiveDate, span: u32) -> NaiveDate {
    offset_date(today, i64::from(span.max(1)) - 1)
}

/// Button label for a day `offset` days from today
pub fn day_label(offset: i64, date: NaiveDate) -> String {
    match offset {
        0 => TODAY_LABEL.to_string(),
        1 => TOMORROW_LABEL.to_string(),
        _ => short_date(date),
    }
}
