//! Startup catalog seeding

use anyhow::Result;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tvguide_core::{Catalog, plan_schedule};

use crate::db::GuideDb;

/// What a seeding run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub channels: i64,
    pub programs: i64,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

/// Random source for filler data; a fixed seed makes the schedule reproducible
pub fn schedule_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

/// Wipe the store and fill it with a fresh schedule starting at `today`
///
/// Must finish before the dispatcher starts handling updates.
pub async fn seed_catalog(
    db: &GuideDb,
    catalog: &Catalog,
    today: NaiveDate,
    seed: Option<u64>,
) -> Result<SeedSummary> {
    catalog.validate()?;

    let plan = plan_schedule(catalog, today, &mut schedule_rng(seed));
    db.reseed(catalog, &plan).await?;

    let summary = SeedSummary {
        channels: db.channel_count().await?,
        programs: db.program_count().await?,
        first_day: today,
        last_day: catalog.last_day(today),
    };

    tracing::info!(
        "Catalog seeded: {} channels, {} programs from {} to {}",
        summary.channels,
        summary.programs,
        summary.first_day,
        summary.last_day
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn empty_db() -> GuideDb {
        let db = GuideDb::new(tvguide_shared::init_memory_db().await.unwrap());
        db.init_schema().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_seed_catalog_summary() {
        let db = empty_db().await;
        let today = NaiveDate::from_ymd_opt(2026, 2, 25).unwrap();

        let summary = seed_catalog(&db, &Catalog::standard(), today, Some(1))
            .await
            .unwrap();

        assert_eq!(summary.channels, 5);
        assert_eq!(summary.programs, 200);
        assert_eq!(summary.last_day, NaiveDate::from_ymd_opt(2026, 3, 4).unwrap());
    }

    #[tokio::test]
    async fn test_same_seed_same_schedule() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 25).unwrap();
        let first = empty_db().await;
        let second = empty_db().await;

        seed_catalog(&first, &Catalog::standard(), today, Some(77)).await.unwrap();
        seed_catalog(&second, &Catalog::standard(), today, Some(77)).await.unwrap();

        assert_eq!(
            first.programs_on_date(today).await.unwrap(),
            second.programs_on_date(today).await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_invalid_catalog_is_not_seeded() {
        let db = empty_db().await;
        let mut catalog = Catalog::standard();
        catalog.genres.push("Док:фильм".to_string());

        let today = NaiveDate::from_ymd_opt(2026, 2, 25).unwrap();
        assert!(seed_catalog(&db, &catalog, today, None).await.is_err());
        assert_eq!(db.program_count().await.unwrap(), 0);
    }
}
