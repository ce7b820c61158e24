//! Supplement schedule and intake models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vitals_core::calendar::DaysMask;
use vitals_core::error::CoreError;
use vitals_core::inbox::context::ScheduledSupplement;
use vitals_core::types::{DbId, MinuteOfDay, Timestamp};

/// A row from the `supplement_schedules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SupplementSchedule {
    pub id: DbId,
    pub profile_id: DbId,
    pub name: String,
    pub dose: Option<String>,
    pub target_minute: Option<MinuteOfDay>,
    pub days_mask: i16,
    pub is_enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<&SupplementSchedule> for ScheduledSupplement {
    type Error = CoreError;

    fn try_from(row: &SupplementSchedule) -> Result<Self, Self::Error> {
        Ok(ScheduledSupplement {
            supplement_id: row.id,
            name: row.name.clone(),
            dose: row.dose.clone(),
            target_minute: row.target_minute,
            days_mask: DaysMask::from_bits(row.days_mask)?,
            is_enabled: row.is_enabled,
        })
    }
}

/// A row from the `supplement_intakes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SupplementIntake {
    pub id: DbId,
    pub supplement_id: DbId,
    pub profile_id: DbId,
    pub intake_date: NaiveDate,
    pub taken_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for one schedule entry.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSupplement {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 100))]
    pub dose: Option<String>,
    #[validate(range(min = 0, max = 1439))]
    pub target_minute: Option<MinuteOfDay>,
    #[validate(range(min = 0, max = 127))]
    pub days_mask: Option<i16>,
    pub is_enabled: Option<bool>,
}

/// DTO replacing a profile's whole supplement schedule.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceSupplements {
    #[validate(length(max = 50), nested)]
    pub entries: Vec<CreateSupplement>,
}

/// DTO marking a supplement as taken.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkTaken {
    pub date: NaiveDate,
}
