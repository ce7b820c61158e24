//! Repository for the `checkins` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use vitals_core::types::DbId;

use crate::models::checkin::{Checkin, CreateCheckin};

const COLUMNS: &str = "id, profile_id, checkin_date, kind, mood, note, created_at, updated_at";

pub struct CheckinRepo;

impl CheckinRepo {
    /// Log a checkin. A second checkin for the same slot violates
    /// `uq_checkins_profile_date_kind`.
    pub async fn create(
        pool: &PgPool,
        profile_id: DbId,
        input: &CreateCheckin,
    ) -> Result<Checkin, sqlx::Error> {
        let query = format!(
            "INSERT INTO checkins (profile_id, checkin_date, kind, mood, note) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Checkin>(&query)
            .bind(profile_id)
            .bind(input.checkin_date)
            .bind(&input.kind)
            .bind(input.mood)
            .bind(&input.note)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_date(
        pool: &PgPool,
        profile_id: DbId,
        date: NaiveDate,
    ) -> Result<Vec<Checkin>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM checkins \
             WHERE profile_id = $1 AND checkin_date = $2 \
             ORDER BY kind"
        );
        sqlx::query_as::<_, Checkin>(&query)
            .bind(profile_id)
            .bind(date)
            .fetch_all(pool)
            .await
    }
}
