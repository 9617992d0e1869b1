//! Inline keyboard callback payloads
//!
//! Telegram hands callback data back as an opaque string of at most 64
//! bytes. The bot only ever sees it as a [`CallbackPayload`]: strings are
//! produced by [`CallbackPayload::encode`] and parsed once at the boundary.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{GuideError, GuideResult};

/// Separator between payload fields. Names must not contain it.
pub const DELIMITER: char = ':';

/// Telegram's limit on `callback_data`
pub const MAX_CALLBACK_BYTES: usize = 64;

const GENRE_TAG: &str = "genre";
const CHANNEL_TAG: &str = "chan";
const DAY_TAG: &str = "day";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Context carried by an inline button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackPayload {
    /// Week listing for a genre
    Genre(String),
    /// Day picker for a channel
    Channel(String),
    /// Listing for one channel on one date
    ChannelDay { channel: String, date: NaiveDate },
}

impl CallbackPayload {
    /// Render the payload as callback data
    ///
    /// Fails when a name contains the delimiter or the result would not fit
    /// in Telegram's callback data limit.
    pub fn encode(&self) -> GuideResult<String> {
        let data = match self {
            Self::Genre(genre) => {
                validate_name(genre)?;
                format!("{GENRE_TAG}{DELIMITER}{genre}")
            }
            Self::Channel(channel) => {
                validate_name(channel)?;
                format!("{CHANNEL_TAG}{DELIMITER}{channel}")
            }
            Self::ChannelDay { channel, date } => {
                validate_name(channel)?;
                format!(
                    "{DAY_TAG}{DELIMITER}{channel}{DELIMITER}{}",
                    date.format(DATE_FORMAT)
                )
            }
        };

        if data.len() > MAX_CALLBACK_BYTES {
            return Err(GuideError::InvalidCatalog(format!(
                "payload '{data}' is longer than {MAX_CALLBACK_BYTES} bytes"
            )));
        }

        Ok(data)
    }
}

impl FromStr for CallbackPayload {
    type Err = GuideError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let invalid = || GuideError::InvalidPayload(data.to_string());

        let (tag, rest) = data.split_once(DELIMITER).ok_or_else(invalid)?;
        if rest.is_empty() {
            return Err(invalid());
        }

        match tag {
            GENRE_TAG => Ok(Self::Genre(rest.to_string())),
            CHANNEL_TAG => Ok(Self::Channel(rest.to_string())),
            DAY_TAG => {
                // Date is always the last field
                let (channel, date) = rest.rsplit_once(DELIMITER).ok_or_else(invalid)?;
                if channel.is_empty() {
                    return Err(invalid());
                }
                let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| invalid())?;
                Ok(Self::ChannelDay {
                    channel: channel.to_string(),
                    date,
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for CallbackPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Genre(genre) => write!(f, "genre '{genre}'"),
            Self::Channel(channel) => write!(f, "channel '{channel}'"),
            Self::ChannelDay { channel, date } => write!(f, "channel '{channel}' on {date}"),
        }
    }
}

/// Check that a channel or genre name can be embedded in a payload
pub fn validate_name(name: &str) -> GuideResult<()> {
    if name.trim().is_empty() {
        return Err(GuideError::InvalidCatalog("empty name".to_string()));
    }
    if name.contains(DELIMITER) {
        return Err(GuideError::InvalidCatalog(format!(
            "'{name}' contains '{DELIMITER}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_encode_uses_wire_prefixes() {
        assert_eq!(
            CallbackPayload::Genre("Фильм".into()).encode().unwrap(),
            "genre:Фильм"
        );
        assert_eq!(
            CallbackPayload::Channel("Россия 1".into()).encode().unwrap(),
            "chan:Россия 1"
        );
        assert_eq!(
            CallbackPayload::ChannelDay {
                channel: "Первый канал".into(),
                date: date(2026, 2, 9),
            }
            .encode()
            .unwrap(),
            "day:Первый канал:2026-02-09"
        );
    }

    #[test]
    fn test_parse_day_payload() {
        let payload: CallbackPayload = "day:НТВ:2026-02-09".parse().unwrap();
        assert_eq!(
            payload,
            CallbackPayload::ChannelDay {
                channel: "НТВ".into(),
                date: date(2026, 2, 9),
            }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for data in [
            "",
            "genre",
            "genre:",
            "chan:",
            "day:НТВ",
            "day::2026-02-09",
            "day:НТВ:09.02.2026",
            "day:НТВ:2026-02-30",
            "edit_3",
            "unknown:value",
        ] {
            assert!(
                data.parse::<CallbackPayload>().is_err(),
                "'{data}' should not parse"
            );
        }
    }

    #[test]
    fn test_encode_rejects_delimiter_in_name() {
        let result = CallbackPayload::Channel("Канал: плюс".into()).encode();
        assert!(matches!(result, Err(GuideError::InvalidCatalog(_))));
    }

    #[test]
    fn test_encode_rejects_oversized_payload() {
        // 40 Cyrillic letters are 80 bytes of UTF-8
        let long_name = "Ж".repeat(40);
        let result = CallbackPayload::Genre(long_name).encode();
        assert!(matches!(result, Err(GuideError::InvalidCatalog(_))));
    }

    #[test]
    fn test_encoded_payload_parses_back() {
        let payload = CallbackPayload::ChannelDay {
            channel: "СТС".into(),
            date: date(2026, 12, 31),
        };
        let parsed: CallbackPayload = payload.encode().unwrap().parse().unwrap();
        assert_eq!(parsed, payload);
    }
}
