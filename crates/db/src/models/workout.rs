//! Workout plan, plan item, and completion models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vitals_core::calendar::DaysMask;
use vitals_core::error::CoreError;
use vitals_core::inbox::context::{CompletionRecord, ScheduledWorkout};
use vitals_core::types::{DbId, MinuteOfDay, Timestamp};

/// A row from the `workout_plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutPlan {
    pub id: DbId,
    pub owner_id: DbId,
    pub profile_id: DbId,
    pub name: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `workout_plan_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutPlanItem {
    pub id: DbId,
    pub plan_id: DbId,
    pub kind: String,
    pub target_minute: MinuteOfDay,
    /// Bit 0 = Monday ... bit 6 = Sunday.
    pub days_mask: i16,
    pub duration_minutes: i32,
    pub intensity: Option<String>,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<&WorkoutPlanItem> for ScheduledWorkout {
    type Error = CoreError;

    fn try_from(item: &WorkoutPlanItem) -> Result<Self, Self::Error> {
        Ok(ScheduledWorkout {
            item_id: item.id,
            kind: item.kind.clone(),
            target_minute: item.target_minute,
            days_mask: DaysMask::from_bits(item.days_mask)?,
            duration_minutes: item.duration_minutes,
            intensity: item.intensity.clone(),
            note: item.note.clone(),
        })
    }
}

/// A row from the `workout_completions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutCompletion {
    pub id: DbId,
    pub owner_id: DbId,
    pub profile_id: DbId,
    pub completion_date: NaiveDate,
    pub plan_item_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&WorkoutCompletion> for CompletionRecord {
    fn from(row: &WorkoutCompletion) -> Self {
        CompletionRecord {
            plan_item_id: row.plan_item_id,
            status: row.status.clone(),
        }
    }
}

/// An active plan together with its items.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutPlanWithItems {
    #[serde(flatten)]
    pub plan: WorkoutPlan,
    pub items: Vec<WorkoutPlanItem>,
}

/// DTO for one item of a replacement plan.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWorkoutItem {
    #[validate(length(min = 1, max = 50))]
    pub kind: String,
    #[validate(range(min = 0, max = 1439))]
    pub target_minute: MinuteOfDay,
    #[validate(range(min = 0, max = 127))]
    pub days_mask: i16,
    #[validate(range(min = 0, max = 1440))]
    pub duration_minutes: i32,
    #[validate(length(max = 50))]
    pub intensity: Option<String>,
    #[validate(length(max = 2000))]
    pub note: Option<String>,
}

/// DTO replacing the profile's active plan wholesale.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceWorkoutPlan {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 50), nested)]
    pub items: Vec<CreateWorkoutItem>,
}

/// DTO for recording the outcome of one plan item on one day.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordCompletion {
    pub completion_date: NaiveDate,
    pub plan_item_id: DbId,
    /// `done` or `skipped`.
    pub status: String,
}
