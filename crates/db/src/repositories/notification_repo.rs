//! Repository for the `notifications` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use vitals_core::inbox::{ExistingDay, GenerationPlan};
use vitals_core::types::DbId;

use crate::models::notification::Notification;

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, profile_id, generated_for, kind, discriminator, dedup_key, title, \
    body, severity, read_at, created_at, updated_at";

/// Provides inbox reads, read-state updates, and generation persistence.
pub struct NotificationRepo;

impl NotificationRepo {
    /// List notifications for a profile, newest first.
    ///
    /// When `unread_only` is `true`, only notifications with a null `read_at`
    /// are returned.
    pub async fn list_for_profile(
        pool: &PgPool,
        profile_id: DbId,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let filter = if unread_only {
            "AND read_at IS NULL"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE profile_id = $1 {filter} \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(profile_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Get the number of unread notifications for a profile.
    pub async fn unread_count(pool: &PgPool, profile_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE profile_id = $1 AND read_at IS NULL",
        )
        .bind(profile_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Mark the given notifications as read.
    ///
    /// Ids that belong to another profile or are already read are skipped.
    /// Returns the number actually marked.
    pub async fn mark_read(
        pool: &PgPool,
        profile_id: DbId,
        ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET read_at = NOW() \
             WHERE profile_id = $1 AND id = ANY($2) AND read_at IS NULL",
        )
        .bind(profile_id)
        .bind(ids)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Mark all unread notifications as read for a profile.
    ///
    /// Returns the number of notifications that were marked read.
    pub async fn mark_all_read(pool: &PgPool, profile_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET read_at = NOW() \
             WHERE profile_id = $1 AND read_at IS NULL",
        )
        .bind(profile_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Run the dedup/cap decision and store its output atomically.
    ///
    /// Takes a transaction-scoped advisory lock on `profile_id`, so concurrent
    /// runs for one profile see each other's inserts. `plan` receives the keys
    /// and count already stored for `date` and returns what to create. Each
    /// insert is `ON CONFLICT DO NOTHING` against `uq_notifications_identity`;
    /// only rows actually written are returned.
    pub async fn persist_generated<F>(
        pool: &PgPool,
        profile_id: DbId,
        date: NaiveDate,
        plan: F,
    ) -> Result<(Vec<Notification>, GenerationPlan), sqlx::Error>
    where
        F: FnOnce(&ExistingDay) -> GenerationPlan,
    {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(profile_id)
            .execute(&mut *tx)
            .await?;

        let keys: Vec<String> = sqlx::query_scalar(
            "SELECT dedup_key FROM notifications WHERE profile_id = $1 AND generated_for = $2",
        )
        .bind(profile_id)
        .bind(date)
        .fetch_all(&mut *tx)
        .await?;

        let plan = plan(&ExistingDay::from_keys(keys));

        let query = format!(
            "INSERT INTO notifications \
                (profile_id, generated_for, kind, discriminator, dedup_key, title, body, severity) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT ON CONSTRAINT uq_notifications_identity DO NOTHING \
             RETURNING {COLUMNS}"
        );
        let mut created = Vec::with_capacity(plan.to_create.len());
        for candidate in &plan.to_create {
            let row = sqlx::query_as::<_, Notification>(&query)
                .bind(profile_id)
                .bind(date)
                .bind(candidate.kind.as_str())
                .bind(candidate.discriminator)
                .bind(candidate.dedup_key())
                .bind(&candidate.title)
                .bind(&candidate.body)
                .bind(candidate.severity.as_str())
                .fetch_optional(&mut *tx)
                .await?;
            if let Some(row) = row {
                created.push(row);
            }
        }

        tx.commit().await?;
        Ok((created, plan))
    }
}
