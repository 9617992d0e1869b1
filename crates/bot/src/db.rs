//! Database operations for the bot
//!
//! Owns the `channels` and `programs` tables: schema creation, the startup
//! reseed and the read queries behind every listing.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tvguide_core::models::{ChannelDayRow, DayListingRow, GenreListingRow};
use tvguide_core::{Catalog, GuideError, GuideResult, PlannedProgram};

/// Bot database handle
#[derive(Clone)]
pub struct GuideDb {
    pool: SqlitePool,
}

impl GuideDb {
    /// Create a new database handle
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the tables and indexes if they do not exist yet
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS channels (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS programs (
                id INTEGER PRIMARY KEY,
                channel_id INTEGER NOT NULL REFERENCES channels (id),
                title TEXT NOT NULL,
                genre TEXT NOT NULL,
                start_time TEXT NOT NULL,
                date TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_programs_date ON programs (date)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_programs_genre_date ON programs (genre, date)")
            .execute(&self.pool)
            .await?;

        tracing::debug!("Schema ready");
        Ok(())
    }

    /// Replace the whole catalog with `catalog.channels` and `plan`
    ///
    /// Runs in one transaction, so readers see either the old catalog or the
    /// complete new one.
    pub async fn reseed(&self, catalog: &Catalog, plan: &[PlannedProgram]) -> GuideResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM programs").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM channels").execute(&mut *tx).await?;

        let mut channel_ids = Vec::with_capacity(catalog.channels.len());
        for name in &catalog.channels {
            let id = sqlx::query("INSERT INTO channels (name) VALUES (?)")
                .bind(name)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid();
            channel_ids.push(id);
        }

        for program in plan {
            let channel_id = *channel_ids.get(program.channel_index).ok_or_else(|| {
                GuideError::InvalidCatalog(format!(
                    "planned program references channel #{}",
                    program.channel_index
                ))
            })?;

            sqlx::query(
                r#"
                INSERT INTO programs (channel_id, title, genre, start_time, date)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(channel_id)
            .bind(&program.title)
            .bind(&program.genre)
            .bind(program.start_time)
            .bind(program.date)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Every program airing on `date`, earliest first
    pub async fn programs_on_date(&self, date: NaiveDate) -> Result<Vec<DayListingRow>, sqlx::Error> {
        sqlx::query_as::<_, DayListingRow>(
            r#"
            SELECT c.name AS channel, p.title, p.start_time, p.genre
            FROM programs p
            JOIN channels c ON p.channel_id = c.id
            WHERE p.date = ?
            ORDER BY p.start_time, c.id
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
    }

    /// Programs of one genre between `from` and `to` inclusive, by date then time
    pub async fn programs_by_genre_in_range(
        &self,
        genre: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<GenreListingRow>, sqlx::Error> {
        sqlx::query_as::<_, GenreListingRow>(
            r#"
            SELECT c.name AS channel, p.title, p.start_time, p.date
            FROM programs p
            JOIN channels c ON p.channel_id = c.id
            WHERE p.genre = ? AND p.date BETWEEN ? AND ?
            ORDER BY p.date, p.start_time, c.id
            "#,
        )
        .bind(genre)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
    }

    /// Channel names in insertion order
    pub async fn channel_names(&self) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT name FROM channels ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    /// Programs of one channel on `date`, earliest first
    pub async fn programs_for_channel_on_date(
        &self,
        channel: &str,
        date: NaiveDate,
    ) -> Result<Vec<ChannelDayRow>, sqlx::Error> {
        sqlx::query_as::<_, ChannelDayRow>(
            r#"
            SELECT p.title, p.start_time, p.genre
            FROM programs p
            JOIN channels c ON p.channel_id = c.id
            WHERE c.name = ? AND p.date = ?
            ORDER BY p.start_time
            "#,
        )
        .bind(channel)
        .bind(date)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn channel_count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM channels")
            .fetch_one(&self.pool)
            .await
    }

    pub async fn program_count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM programs")
            .fetch_one(&self.pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveTime};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tvguide_core::plan_schedule;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 10).unwrap()
    }

    async fn seeded_db(seed: u64) -> (GuideDb, Catalog) {
        let pool = tvguide_shared::init_memory_db().await.unwrap();
        let db = GuideDb::new(pool);
        db.init_schema().await.unwrap();

        let catalog = Catalog::standard();
        let plan = plan_schedule(&catalog, today(), &mut StdRng::seed_from_u64(seed));
        db.reseed(&catalog, &plan).await.unwrap();

        (db, catalog)
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = tvguide_shared::init_memory_db().await.unwrap();
        let db = GuideDb::new(pool);

        db.init_schema().await.unwrap();
        db.init_schema().await.unwrap();

        assert_eq!(db.program_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_every_seeded_day_has_full_grid() {
        let (db, catalog) = seeded_db(1).await;

        for offset in 0..i64::from(catalog.day_span) {
            let rows = db.programs_on_date(today() + Duration::days(offset)).await.unwrap();
            assert_eq!(rows.len(), 25, "day +{offset}");
        }

        assert!(db.programs_on_date(today() + Duration::days(8)).await.unwrap().is_empty());
        assert!(db.programs_on_date(today() - Duration::days(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_day_rows_sorted_by_time() {
        let (db, _) = seeded_db(2).await;

        let rows = db.programs_on_date(today()).await.unwrap();
        assert!(rows.windows(2).all(|w| w[0].start_time <= w[1].start_time));
        assert_eq!(rows[0].start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(rows[0].channel, "Первый канал");
    }

    #[tokio::test]
    async fn test_values_come_from_catalog() {
        let (db, catalog) = seeded_db(3).await;

        let programs: Vec<(String, String, NaiveTime)> =
            sqlx::query_as("SELECT title, genre, start_time FROM programs")
                .fetch_all(&db.pool)
                .await
                .unwrap();

        assert_eq!(programs.len(), 200);
        for (title, genre, start_time) in &programs {
            assert!(catalog.genres.contains(genre));
            assert!(catalog.hour_slots.contains(start_time));
            assert!(catalog.titles.contains(title));
        }
    }

    #[tokio::test]
    async fn test_genre_rows_match_day_rows() {
        let (db, catalog) = seeded_db(4).await;
        let last_day = catalog.last_day(today());

        let mut expected = Vec::new();
        for offset in 0..i64::from(catalog.day_span) {
            let date = today() + Duration::days(offset);
            for row in db.programs_on_date(date).await.unwrap() {
                if row.genre == "Фильм" {
                    expected.push((date, row.start_time, row.channel, row.title));
                }
            }
        }

        let rows = db
            .programs_by_genre_in_range("Фильм", today(), last_day)
            .await
            .unwrap();
        let actual: Vec<_> = rows
            .into_iter()
            .map(|r| (r.date, r.start_time, r.channel, r.title))
            .collect();

        assert_eq!(actual, expected);
        assert!(actual.len() <= 200);
        assert!(
            actual
                .windows(2)
                .all(|w| (w[0].0, w[0].1) <= (w[1].0, w[1].1))
        );
    }

    #[tokio::test]
    async fn test_genre_range_is_inclusive() {
        let (db, catalog) = seeded_db(5).await;

        let mut total = 0;
        for genre in &catalog.genres {
            total += db
                .programs_by_genre_in_range(genre, today(), catalog.last_day(today()))
                .await
                .unwrap()
                .len();
        }
        assert_eq!(total, 200);

        let single_day: usize = {
            let mut n = 0;
            for genre in &catalog.genres {
                n += db
                    .programs_by_genre_in_range(genre, today(), today())
                    .await
                    .unwrap()
                    .len();
            }
            n
        };
        assert_eq!(single_day, 25);
    }

    #[tokio::test]
    async fn test_channel_names_in_insertion_order() {
        let (db, catalog) = seeded_db(6).await;

        assert_eq!(db.channel_names().await.unwrap(), catalog.channels);
    }

    #[tokio::test]
    async fn test_channel_day_has_one_row_per_slot() {
        let (db, catalog) = seeded_db(7).await;

        let rows = db
            .programs_for_channel_on_date("НТВ", today() + Duration::days(3))
            .await
            .unwrap();
        let times: Vec<_> = rows.iter().map(|r| r.start_time).collect();
        assert_eq!(times, catalog.hour_slots);

        assert!(
            db.programs_for_channel_on_date("НТВ", today() + Duration::days(8))
                .await
                .unwrap()
                .is_empty()
        );
        assert!(
            db.programs_for_channel_on_date("Муз-ТВ", today())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_reseed_twice_keeps_counts() {
        let (db, catalog) = seeded_db(8).await;
        let channels_once = db.channel_count().await.unwrap();
        let programs_once = db.program_count().await.unwrap();

        let plan = plan_schedule(&catalog, today(), &mut StdRng::seed_from_u64(9));
        db.reseed(&catalog, &plan).await.unwrap();

        assert_eq!(db.channel_count().await.unwrap(), channels_once);
        assert_eq!(db.program_count().await.unwrap(), programs_once);
        assert_eq!(channels_once, 5);
        assert_eq!(programs_once, 200);
    }

    #[tokio::test]
    async fn test_reseed_rejects_dangling_channel_index() {
        let (db, catalog) = seeded_db(10).await;

        let mut plan = plan_schedule(&catalog, today(), &mut StdRng::seed_from_u64(11));
        plan[0].channel_index = 42;

        let result = db.reseed(&catalog, &plan).await;
        assert!(matches!(result, Err(GuideError::InvalidCatalog(_))));

        // Rolled back: the previous catalog is still complete
        assert_eq!(db.program_count().await.unwrap(), 200);
    }
}
