//! Core domain models for the TV guide
//!
//! Rows returned by the listing queries over the `channels` and `programs`
//! tables.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Row of the per-day listing across all channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[derive(sqlx::FromRow)]
pub struct DayListingRow {
    pub channel: String,
    pub title: String,
    pub start_time: NaiveTime,
    pub genre: String,
}

/// Row of the week listing for one genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[derive(sqlx::FromRow)]
pub struct GenreListingRow {
    pub channel: String,
    pub title: String,
    pub start_time: NaiveTime,
    pub date: NaiveDate,
}

/// Row of the listing for one channel on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[derive(sqlx::FromRow)]
pub struct ChannelDayRow {
    pub title: String,
    pub start_time: NaiveTime,
    pub genre: String,
}
