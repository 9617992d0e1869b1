//! Timezone handling utilities
//!
//! The guide has no per-user timezone; a single IANA zone decides which
//! calendar day counts as "today".

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{GuideError, GuideResult};

/// Parse an IANA timezone string (e.g., "Europe/Moscow", "UTC")
///
/// # Examples
///
/// ```
/// use tvguide_core::timezone::parse_timezone;
///
/// let tz = parse_timezone("Europe/Moscow").unwrap();
/// assert_eq!(tz.name(), "Europe/Moscow");
/// ```
pub fn parse_timezone(tz_str: &str) -> GuideResult<Tz> {
    tz_str
        .parse::<Tz>()
        .map_err(|_| GuideError::InvalidTimezone(tz_str.to_string()))
}

/// Calendar date of a UTC instant as seen in `tz`
pub fn local_date(utc_time: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    utc_time.with_timezone(tz).date_naive()
}

/// Get the default timezone (UTC)
pub fn default_timezone() -> Tz {
    Tz::UTC
}
