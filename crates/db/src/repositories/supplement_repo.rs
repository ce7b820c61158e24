//! Repository for supplement schedules and intake markers.

use chrono::NaiveDate;
use sqlx::PgPool;
use vitals_core::calendar::DaysMask;
use vitals_core::types::DbId;

use crate::models::supplement::{ReplaceSupplements, SupplementSchedule};

const COLUMNS: &str = "id, profile_id, name, dose, target_minute, days_mask, is_enabled, \
    created_at, updated_at";

pub struct SupplementRepo;

impl SupplementRepo {
    /// Replace the profile's whole schedule. Intake markers of removed
    /// entries cascade away with them.
    pub async fn replace_schedule(
        pool: &PgPool,
        profile_id: DbId,
        input: &ReplaceSupplements,
    ) -> Result<Vec<SupplementSchedule>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM supplement_schedules WHERE profile_id = $1")
            .bind(profile_id)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO supplement_schedules \
                (profile_id, name, dose, target_minute, days_mask, is_enabled) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let mut rows = Vec::with_capacity(input.entries.len());
        for entry in &input.entries {
            let row = sqlx::query_as::<_, SupplementSchedule>(&query)
                .bind(profile_id)
                .bind(&entry.name)
                .bind(&entry.dose)
                .bind(entry.target_minute)
                .bind(entry.days_mask.unwrap_or(DaysMask::EVERY_DAY.bits()))
                .bind(entry.is_enabled.unwrap_or(true))
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }

        tx.commit().await?;
        Ok(rows)
    }

    pub async fn list_for_profile(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Vec<SupplementSchedule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM supplement_schedules WHERE profile_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, SupplementSchedule>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Find one schedule entry, scoped to its profile.
    pub async fn find_for_profile(
        pool: &PgPool,
        supplement_id: DbId,
        profile_id: DbId,
    ) -> Result<Option<SupplementSchedule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM supplement_schedules WHERE id = $1 AND profile_id = $2"
        );
        sqlx::query_as::<_, SupplementSchedule>(&query)
            .bind(supplement_id)
            .bind(profile_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a supplement taken on `date`.
    ///
    /// Returns `true` if a new marker was written, `false` if it was already
    /// marked.
    pub async fn mark_taken(
        pool: &PgPool,
        supplement_id: DbId,
        profile_id: DbId,
        date: NaiveDate,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO supplement_intakes (supplement_id, profile_id, intake_date) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_supplement_intakes_supplement_date DO NOTHING",
        )
        .bind(supplement_id)
        .bind(profile_id)
        .bind(date)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Ids of supplements marked taken on `date`.
    pub async fn taken_ids_for_date(
        pool: &PgPool,
        profile_id: DbId,
        date: NaiveDate,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT supplement_id FROM supplement_intakes \
             WHERE profile_id = $1 AND intake_date = $2 \
             ORDER BY supplement_id",
        )
        .bind(profile_id)
        .bind(date)
        .fetch_all(pool)
        .await
    }
}
