//! Reply and inline keyboards

use chrono::NaiveDate;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};
use tvguide_core::calendar::{TODAY_LABEL, TOMORROW_LABEL, day_label, guide_window};
use tvguide_core::{CallbackPayload, GuideResult};

const MENU_PER_ROW: usize = 2;
const PICKER_PER_ROW: usize = 2;
const DAYS_PER_ROW: usize = 3;

/// Buttons of the main reply keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Today,
    Tomorrow,
    ByGenre,
    ByChannel,
    Help,
}

impl MenuButton {
    /// Menu order
    pub const ALL: [Self; 5] = [
        Self::Today,
        Self::Tomorrow,
        Self::ByGenre,
        Self::ByChannel,
        Self::Help,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Today => TODAY_LABEL,
            Self::Tomorrow => TOMORROW_LABEL,
            Self::ByGenre => "По жанру",
            Self::ByChannel => "По каналу",
            Self::Help => "Помощь",
        }
    }

    /// Recognize the text a reply keyboard button sends
    pub fn from_label(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL.into_iter().find(|button| button.label() == text)
    }
}

/// Split buttons into rows of `per_row`
pub fn chunked_rows<T>(buttons: Vec<T>, per_row: usize) -> Vec<Vec<T>> {
    let per_row = per_row.max(1);
    let mut rows = Vec::with_capacity(buttons.len().div_ceil(per_row));
    let mut row = Vec::with_capacity(per_row);

    for button in buttons {
        row.push(button);
        if row.len() == per_row {
            rows.push(std::mem::replace(&mut row, Vec::with_capacity(per_row)));
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }

    rows
}

/// Main menu shown under the input field
pub fn main_menu() -> KeyboardMarkup {
    let buttons = MenuButton::ALL
        .into_iter()
        .map(|button| KeyboardButton::new(button.label()))
        .collect();

    KeyboardMarkup::new(chunked_rows(buttons, MENU_PER_ROW)).resize_keyboard()
}

/// One button per genre
pub fn genre_keyboard(genres: &[String]) -> GuideResult<InlineKeyboardMarkup> {
    let buttons = genres
        .iter()
        .map(|genre| {
            let data = CallbackPayload::Genre(genre.clone()).encode()?;
            Ok(InlineKeyboardButton::callback(genre.clone(), data))
        })
        .collect::<GuideResult<Vec<_>>>()?;

    Ok(InlineKeyboardMarkup::new(chunked_rows(buttons, PICKER_PER_ROW)))
}

/// One button per channel
pub fn channel_keyboard(channels: &[String]) -> GuideResult<InlineKeyboardMarkup> {
    let buttons = channels
        .iter()
        .map(|channel| {
            let data = CallbackPayload::Channel(channel.clone()).encode()?;
            Ok(InlineKeyboardButton::callback(channel.clone(), data))
        })
        .collect::<GuideResult<Vec<_>>>()?;

    Ok(InlineKeyboardMarkup::new(chunked_rows(buttons, PICKER_PER_ROW)))
}

/// Day picker for `channel` covering `span` days from `today`
pub fn day_keyboard(channel: &str, today: NaiveDate, span: u32) -> GuideResult<InlineKeyboardMarkup> {
    let buttons = guide_window(today, span)
        .into_iter()
        .zip(0_i64..)
        .map(|(date, offset)| {
            let data = CallbackPayload::ChannelDay {
                channel: channel.to_string(),
                date,
            }
            .encode()?;
            Ok(InlineKeyboardButton::callback(day_label(offset, date), data))
        })
        .collect::<GuideResult<Vec<_>>>()?;

    Ok(InlineKeyboardMarkup::new(chunked_rows(buttons, DAYS_PER_ROW)))
}
