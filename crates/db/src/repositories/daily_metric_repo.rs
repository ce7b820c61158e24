//! Repository for the `daily_metrics` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use vitals_core::types::DbId;

use crate::models::daily_metric::{DailyMetric, UpsertDailyMetric};

const COLUMNS: &str = "id, profile_id, metric_date, steps, sleep_minutes, active_energy_kcal, \
    synced_at, created_at, updated_at";

pub struct DailyMetricRepo;

impl DailyMetricRepo {
    /// Record a sync for one day. Fields absent from `input` keep their
    /// stored value; `synced_at` is always bumped.
    pub async fn upsert(
        pool: &PgPool,
        profile_id: DbId,
        date: NaiveDate,
        input: &UpsertDailyMetric,
    ) -> Result<DailyMetric, sqlx::Error> {
        let query = format!(
            "INSERT INTO daily_metrics (profile_id, metric_date, steps, sleep_minutes, active_energy_kcal) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT ON CONSTRAINT uq_daily_metrics_profile_date DO UPDATE SET \
                steps = COALESCE(EXCLUDED.steps, daily_metrics.steps), \
                sleep_minutes = COALESCE(EXCLUDED.sleep_minutes, daily_metrics.sleep_minutes), \
                active_energy_kcal = COALESCE(EXCLUDED.active_energy_kcal, daily_metrics.active_energy_kcal), \
                synced_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DailyMetric>(&query)
            .bind(profile_id)
            .bind(date)
            .bind(input.steps)
            .bind(input.sleep_minutes)
            .bind(input.active_energy_kcal)
            .fetch_one(pool)
            .await
    }

    pub async fn get_for_date(
        pool: &PgPool,
        profile_id: DbId,
        date: NaiveDate,
    ) -> Result<Option<DailyMetric>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM daily_metrics WHERE profile_id = $1 AND metric_date = $2"
        );
        sqlx::query_as::<_, DailyMetric>(&query)
            .bind(profile_id)
            .bind(date)
            .fetch_optional(pool)
            .await
    }
}
