//! Read-only inputs to one generation run.
//!
//! The API layer loads these from storage and hands them to the planner.
//! Builders only ever borrow a [`GenerationContext`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::DaysMask;
use crate::inbox::kinds::CheckinKind;
use crate::settings::EffectiveSettings;
use crate::types::{DbId, MinuteOfDay, Timestamp};

/// Completion status that suppresses a workout reminder.
pub const COMPLETION_STATUS_DONE: &str = "done";

/// Completion status for a deliberately skipped workout.
pub const COMPLETION_STATUS_SKIPPED: &str = "skipped";

/// All valid completion statuses.
pub const VALID_COMPLETION_STATUSES: &[&str] = &[COMPLETION_STATUS_DONE, COMPLETION_STATUS_SKIPPED];

/// One item of the profile's active workout plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledWorkout {
    pub item_id: DbId,
    pub kind: String,
    pub target_minute: MinuteOfDay,
    pub days_mask: DaysMask,
    pub duration_minutes: i32,
    pub intensity: Option<String>,
    pub note: Option<String>,
}

/// A recorded outcome for one plan item on the evaluated date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRecord {
    pub plan_item_id: DbId,
    pub status: String,
}

impl CompletionRecord {
    pub fn is_done(&self) -> bool {
        self.status == COMPLETION_STATUS_DONE
    }
}

/// One entry of the profile's supplement schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledSupplement {
    pub supplement_id: DbId,
    pub name: String,
    pub dose: Option<String>,
    /// Falls back to the effective vitamins minute when absent.
    pub target_minute: Option<MinuteOfDay>,
    pub days_mask: DaysMask,
    pub is_enabled: bool,
}

/// Synced daily aggregates. A `None` field was not synced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    pub steps: Option<i64>,
    pub sleep_minutes: Option<i32>,
    pub active_energy_kcal: Option<f64>,
}

/// Everything one generation run looks at.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub profile_id: DbId,
    /// Profile-local calendar day being evaluated.
    pub date: NaiveDate,
    /// The evaluation instant.
    pub now: Timestamp,
    pub settings: EffectiveSettings,
    /// Checkin slots already logged for `date`.
    pub checkins: Vec<CheckinKind>,
    /// Items of the active plan; empty when no plan is configured.
    pub workouts: Vec<ScheduledWorkout>,
    /// Completion records for `date`.
    pub completions: Vec<CompletionRecord>,
    pub supplements: Vec<ScheduledSupplement>,
    /// Supplement ids marked taken on `date`.
    pub supplements_taken: Vec<DbId>,
    pub totals: Option<DailyTotals>,
}

impl GenerationContext {
    /// A context with no collaborator data, only the request and settings.
    pub fn new(
        profile_id: DbId,
        date: NaiveDate,
        now: Timestamp,
        settings: EffectiveSettings,
    ) -> Self {
        Self {
            profile_id,
            date,
            now,
            settings,
            checkins: Vec::new(),
            workouts: Vec::new(),
            completions: Vec::new(),
            supplements: Vec::new(),
            supplements_taken: Vec::new(),
            totals: None,
        }
    }

    pub fn has_checkin(&self, kind: CheckinKind) -> bool {
        self.checkins.contains(&kind)
    }

    pub fn is_workout_done(&self, item_id: DbId) -> bool {
        self.completions
            .iter()
            .any(|c| c.plan_item_id == item_id && c.is_done())
    }

    pub fn is_supplement_taken(&self, supplement_id: DbId) -> bool {
        self.supplements_taken.contains(&supplement_id)
    }
}
