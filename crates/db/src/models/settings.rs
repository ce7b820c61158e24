//! Preference overrides stored per owner.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitals_core::settings::SettingsOverrides;
use vitals_core::types::{DbId, MinuteOfDay, Timestamp};

/// A row from the `user_settings` table. `None` means "use the default".
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSettings {
    pub id: DbId,
    pub owner_id: DbId,
    pub time_zone: Option<String>,
    pub quiet_start_minute: Option<MinuteOfDay>,
    pub quiet_end_minute: Option<MinuteOfDay>,
    pub notifications_max_per_day: Option<i16>,
    pub min_sleep_minutes: Option<i32>,
    pub min_steps: Option<i32>,
    pub min_active_energy_kcal: Option<i32>,
    pub morning_checkin_minute: Option<MinuteOfDay>,
    pub evening_checkin_minute: Option<MinuteOfDay>,
    pub vitamins_minute: Option<MinuteOfDay>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&UserSettings> for SettingsOverrides {
    fn from(row: &UserSettings) -> Self {
        SettingsOverrides {
            time_zone: row.time_zone.clone(),
            quiet_start_minute: row.quiet_start_minute,
            quiet_end_minute: row.quiet_end_minute,
            notifications_max_per_day: row.notifications_max_per_day,
            min_sleep_minutes: row.min_sleep_minutes,
            min_steps: row.min_steps,
            min_active_energy_kcal: row.min_active_energy_kcal,
            morning_checkin_minute: row.morning_checkin_minute,
            evening_checkin_minute: row.evening_checkin_minute,
            vitamins_minute: row.vitamins_minute,
        }
    }
}

/// DTO for replacing the caller's overrides.
///
/// This is a full replacement: an omitted field is stored as `NULL` and
/// reverts to the system default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplaceSettings {
    pub time_zone: Option<String>,
    pub quiet_start_minute: Option<MinuteOfDay>,
    pub quiet_end_minute: Option<MinuteOfDay>,
    pub notifications_max_per_day: Option<i16>,
    pub min_sleep_minutes: Option<i32>,
    pub min_steps: Option<i32>,
    pub min_active_energy_kcal: Option<i32>,
    pub morning_checkin_minute: Option<MinuteOfDay>,
    pub evening_checkin_minute: Option<MinuteOfDay>,
    pub vitamins_minute: Option<MinuteOfDay>,
}

impl From<&ReplaceSettings> for SettingsOverrides {
    fn from(input: &ReplaceSettings) -> Self {
        SettingsOverrides {
            time_zone: input.time_zone.clone(),
            quiet_start_minute: input.quiet_start_minute,
            quiet_end_minute: input.quiet_end_minute,
            notifications_max_per_day: input.notifications_max_per_day,
            min_sleep_minutes: input.min_sleep_minutes,
            min_steps: input.min_steps,
            min_active_energy_kcal: input.min_active_energy_kcal,
            morning_checkin_minute: input.morning_checkin_minute,
            evening_checkin_minute: input.evening_checkin_minute,
            vitamins_minute: input.vitamins_minute,
        }
    }
}
