//! Repository for the `user_settings` table.

use sqlx::PgPool;
use vitals_core::types::DbId;

use crate::models::settings::{ReplaceSettings, UserSettings};

const COLUMNS: &str = "id, owner_id, time_zone, quiet_start_minute, quiet_end_minute, \
    notifications_max_per_day, min_sleep_minutes, min_steps, min_active_energy_kcal, \
    morning_checkin_minute, evening_checkin_minute, vitamins_minute, created_at, updated_at";

/// Per-owner preference overrides.
pub struct SettingsRepo;

impl SettingsRepo {
    /// The owner's stored overrides, if any were ever saved.
    pub async fn get_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Option<UserSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_settings WHERE owner_id = $1");
        sqlx::query_as::<_, UserSettings>(&query)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace every override column for the owner, creating the row if needed.
    pub async fn upsert(
        pool: &PgPool,
        owner_id: DbId,
        input: &ReplaceSettings,
    ) -> Result<UserSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_settings \
                (owner_id, time_zone, quiet_start_minute, quiet_end_minute, \
                 notifications_max_per_day, min_sleep_minutes, min_steps, \
                 min_active_energy_kcal, morning_checkin_minute, \
                 evening_checkin_minute, vitamins_minute) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             ON CONFLICT ON CONSTRAINT uq_user_settings_owner DO UPDATE SET \
                time_zone = EXCLUDED.time_zone, \
                quiet_start_minute = EXCLUDED.quiet_start_minute, \
                quiet_end_minute = EXCLUDED.quiet_end_minute, \
                notifications_max_per_day = EXCLUDED.notifications_max_per_day, \
                min_sleep_minutes = EXCLUDED.min_sleep_minutes, \
                min_steps = EXCLUDED.min_steps, \
                min_active_energy_kcal = EXCLUDED.min_active_energy_kcal, \
                morning_checkin_minute = EXCLUDED.morning_checkin_minute, \
                evening_checkin_minute = EXCLUDED.evening_checkin_minute, \
                vitamins_minute = EXCLUDED.vitamins_minute \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSettings>(&query)
            .bind(owner_id)
            .bind(&input.time_zone)
            .bind(input.quiet_start_minute)
            .bind(input.quiet_end_minute)
            .bind(input.notifications_max_per_day)
            .bind(input.min_sleep_minutes)
            .bind(input.min_steps)
            .bind(input.min_active_energy_kcal)
            .bind(input.morning_checkin_minute)
            .bind(input.evening_checkin_minute)
            .bind(input.vitamins_minute)
            .fetch_one(pool)
            .await
    }
}
