//! Catalog configuration and schedule planning
//!
//! The guide serves synthetic filler data: a fixed channel list whose
//! programs are regenerated on every start. Planning is pure; the random
//! source is passed in so tests can seed it.

use chrono::{NaiveDate, NaiveTime};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::calendar::{guide_window, window_end};
use crate::callback::CallbackPayload;
use crate::error::{GuideError, GuideResult};

const CHANNELS: [&str; 5] = ["Первый канал", "Россия 1", "НТВ", "ТНТ", "СТС"];
const GENRES: [&str; 6] = ["Фильм", "Сериал", "Новости", "Шоу", "Детское", "Спорт"];
const TITLES: [&str; 7] = [
    "Утро",
    "Вести",
    "Комеди Клаб",
    "Дом-2",
    "Спорт",
    "Мультики",
    "Кино",
];
const HOUR_SLOTS: [u32; 5] = [9, 12, 15, 18, 21];

/// Number of days served, today included
pub const DAY_SPAN: u32 = 8;

/// Everything the seeder needs to regenerate the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Channel names in display order
    pub channels: Vec<String>,
    /// Genre names in display order
    pub genres: Vec<String>,
    /// Pool of program titles
    pub titles: Vec<String>,
    /// Daily start times, identical for every channel
    pub hour_slots: Vec<NaiveTime>,
    /// Length of the seeded window in days
    pub day_span: u32,
}

/// One program to be inserted by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedProgram {
    /// Index into [`Catalog::channels`]
    pub channel_index: usize,
    pub title: String,
    pub genre: String,
    pub start_time: NaiveTime,
    pub date: NaiveDate,
}

impl Catalog {
    /// The guide's built-in catalog
    pub fn standard() -> Self {
        Self {
            channels: CHANNELS.iter().map(ToString::to_string).collect(),
            genres: GENRES.iter().map(ToString::to_string).collect(),
            titles: TITLES.iter().map(ToString::to_string).collect(),
            hour_slots: HOUR_SLOTS
                .iter()
                .filter_map(|&hour| NaiveTime::from_hms_opt(hour, 0, 0))
                .collect(),
            day_span: DAY_SPAN,
        }
    }

    /// Last date covered when seeding starts at `today`
    pub fn last_day(&self, today: NaiveDate) -> NaiveDate {
        window_end(today, self.day_span)
    }

    /// Reject catalogs whose names cannot travel in callback data, or whose
    /// pools are empty
    pub fn validate(&self) -> GuideResult<()> {
        if self.channels.is_empty() || self.genres.is_empty() || self.titles.is_empty() {
            return Err(GuideError::InvalidCatalog(
                "channels, genres and titles must not be empty".to_string(),
            ));
        }
        if self.hour_slots.is_empty() || self.day_span == 0 {
            return Err(GuideError::InvalidCatalog(
                "at least one hour slot and one day are required".to_string(),
            ));
        }

        // Day payloads are the longest; every ISO date has the same width
        for channel in &self.channels {
            CallbackPayload::ChannelDay {
                channel: channel.clone(),
                date: NaiveDate::default(),
            }
            .encode()?;
        }
        for genre in &self.genres {
            CallbackPayload::Genre(genre.clone()).encode()?;
        }

        Ok(())
    }

    /// Number of programs a full seed produces
    pub fn expected_program_count(&self) -> usize {
        self.channels.len() * self.hour_slots.len() * self.day_span as usize
    }
}

/// Plan one program per (date, channel, hour slot) of the window starting at
/// `today`, picking title and genre uniformly from the catalog pools
pub fn plan_schedule<R>(catalog: &Catalog, today: NaiveDate, rng: &mut R) -> Vec<PlannedProgram>
where
    R: Rng + ?Sized,
{
    let mut plan = Vec::with_capacity(catalog.expected_program_count());

    for date in guide_window(today, catalog.day_span) {
        for channel_index in 0..catalog.channels.len() {
            for &start_time in &catalog.hour_slots {
                let (Some(title), Some(genre)) =
                    (catalog.titles.choose(rng), catalog.genres.choose(rng))
                else {
                    return plan;
                };

                plan.push(PlannedProgram {
                    channel_index,
                    title: title.clone(),
                    genre: genre.clone(),
                    start_time,
                    date,
                });
            }
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
    }

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.channels.len(), 5);
        assert_eq!(catalog.genres.len(), 6);
        assert_eq!(catalog.titles.len(), 7);
        assert_eq!(catalog.hour_slots.len(), 5);
        assert_eq!(catalog.day_span, 8);
        assert_eq!(catalog.expected_program_count(), 200);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_plan_covers_every_slot_once() {
        let catalog = Catalog::standard();
        let plan = plan_schedule(&catalog, today(), &mut StdRng::seed_from_u64(7));

        assert_eq!(plan.len(), catalog.expected_program_count());

        let keys: HashSet<_> = plan
            .iter()
            .map(|p| (p.date, p.channel_index, p.start_time))
            .collect();
        assert_eq!(keys.len(), plan.len());

        assert_eq!(plan.first().map(|p| p.date), Some(today()));
        assert_eq!(plan.last().map(|p| p.date), Some(catalog.last_day(today())));
    }

    #[test]
    fn test_plan_draws_only_from_pools() {
        let catalog = Catalog::standard();
        let plan = plan_schedule(&catalog, today(), &mut StdRng::seed_from_u64(99));

        for program in &plan {
            assert!(catalog.genres.contains(&program.genre));
            assert!(catalog.titles.contains(&program.title));
            assert!(catalog.hour_slots.contains(&program.start_time));
        }
    }

    #[test]
    fn test_plan_is_reproducible_with_same_seed() {
        let catalog = Catalog::standard();
        let first = plan_schedule(&catalog, today(), &mut StdRng::seed_from_u64(2026));
        let second = plan_schedule(&catalog, today(), &mut StdRng::seed_from_u64(2026));
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_rejects_delimiter() {
        let mut catalog = Catalog::standard();
        catalog.channels.push("Муз:ТВ".to_string());
        assert!(matches!(
            catalog.validate(),
            Err(GuideError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_pools() {
        let mut catalog = Catalog::standard();
        catalog.titles.clear();
        assert!(catalog.validate().is_err());
        assert!(plan_schedule(&catalog, today(), &mut StdRng::seed_from_u64(1)).is_empty());
    }
}
