//! Listing text for HTML parse mode
//!
//! Every formatter turns an empty row set into a fixed "nothing scheduled"
//! line instead of an empty listing.

use chrono::{NaiveDate, NaiveTime};
use teloxide::utils::html::escape;
use tvguide_core::calendar::{pretty_date, short_date};
use tvguide_core::models::{ChannelDayRow, DayListingRow, GenreListingRow};

fn bold(text: &str) -> String {
    format!("<b>{}</b>", escape(text))
}

fn clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// All channels for one day
///
/// Rows arrive sorted by time, so a channel heading is printed whenever the
/// channel changes from the previous row.
pub fn format_day_listing(date: NaiveDate, rows: &[DayListingRow]) -> String {
    let pretty = pretty_date(date);
    if rows.is_empty() {
        return format!("На {pretty} передач нет.");
    }

    let mut response = format!("{}\n\n", bold(&format!("Программа на {pretty}:")));
    let mut current: Option<&str> = None;

    for row in rows {
        if current != Some(row.channel.as_str()) {
            response.push_str(&format!("\n{}\n", bold(&row.channel)));
            current = Some(&row.channel);
        }
        response.push_str(&format!(
            "  {} | {} ({})\n",
            clock(row.start_time),
            escape(&row.title),
            escape(&row.genre)
        ));
    }

    response
}

/// One genre across the week
pub fn format_genre_listing(genre: &str, rows: &[GenreListingRow]) -> String {
    if rows.is_empty() {
        return format!("Нет передач в жанре {}", bold(genre));
    }

    let mut response = format!("{}\n\n", bold(&format!("{genre} на неделе:")));
    for row in rows {
        response.push_str(&format!(
            "{} | {} | {} | {}\n",
            short_date(row.date),
            escape(&row.channel),
            clock(row.start_time),
            escape(&row.title)
        ));
    }

    response
}

/// One channel on one day
pub fn format_channel_day_listing(channel: &str, date: NaiveDate, rows: &[ChannelDayRow]) -> String {
    let pretty = pretty_date(date);
    if rows.is_empty() {
        return format!("На {pretty} на {} ничего нет.", bold(channel));
    }

    let mut response = format!("{}\n\n", bold(&format!("{channel} — {pretty}:")));
    for row in rows {
        response.push_str(&format!(
            "{} | {} ({})\n",
            clock(row.start_time),
            escape(&row.title),
            escape(&row.genre)
        ));
    }

    response
}
