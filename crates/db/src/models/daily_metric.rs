//! Synced daily metric aggregates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vitals_core::inbox::context::DailyTotals;
use vitals_core::types::{DbId, Timestamp};

/// A row from the `daily_metrics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyMetric {
    pub id: DbId,
    pub profile_id: DbId,
    pub metric_date: NaiveDate,
    pub steps: Option<i64>,
    pub sleep_minutes: Option<i32>,
    pub active_energy_kcal: Option<f64>,
    pub synced_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&DailyMetric> for DailyTotals {
    fn from(row: &DailyMetric) -> Self {
        DailyTotals {
            steps: row.steps,
            sleep_minutes: row.sleep_minutes,
            active_energy_kcal: row.active_energy_kcal,
        }
    }
}

/// DTO for a metric sync. Fields left out keep their stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertDailyMetric {
    #[validate(range(min = 0))]
    pub steps: Option<i64>,
    #[validate(range(min = 0, max = 1440))]
    pub sleep_minutes: Option<i32>,
    #[validate(range(min = 0.0))]
    pub active_energy_kcal: Option<f64>,
}
