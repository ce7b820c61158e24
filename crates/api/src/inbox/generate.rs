//! One generation run for one profile and day.
//!
//! Collaborator reads are independent and run concurrently. Any failure
//! aborts the run before the persistence transaction starts, so nothing is
//! written. The dedup/cap decision itself runs inside
//! [`NotificationRepo::persist_generated`], after the profile's advisory lock
//! is held.

use chrono::NaiveDate;
use sqlx::PgPool;
use vitals_core::inbox::context::{CompletionRecord, DailyTotals, ScheduledSupplement, ScheduledWorkout};
use vitals_core::inbox::kinds::CheckinKind;
use vitals_core::inbox::{plan_generation, GenerationContext, GenerationPlan, GenerationPolicy};
use vitals_core::settings::{resolve_settings, EffectiveSettings, SettingsDefaults, SettingsOverrides};
use vitals_core::types::{DbId, Timestamp};
use vitals_db::models::notification::Notification;
use vitals_db::repositories::{
    CheckinRepo, DailyMetricRepo, NotificationRepo, SettingsRepo, SupplementRepo, WorkoutRepo,
};

use crate::error::AppResult;

/// What one run created, plus the planner's counters.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub created: Vec<Notification>,
    pub plan: GenerationPlan,
}

/// Resolve the owner's effective settings against the system defaults.
pub async fn load_effective_settings(
    pool: &PgPool,
    owner_id: DbId,
) -> Result<EffectiveSettings, sqlx::Error> {
    let stored = SettingsRepo::get_for_owner(pool, owner_id).await?;
    let overrides = stored.as_ref().map(SettingsOverrides::from);
    Ok(resolve_settings(overrides.as_ref(), &SettingsDefaults::SYSTEM))
}

/// Gather every snapshot the builders read for `(profile_id, date)`.
pub async fn load_context(
    pool: &PgPool,
    owner_id: DbId,
    profile_id: DbId,
    date: NaiveDate,
    now: Timestamp,
) -> AppResult<GenerationContext> {
    let (settings, checkins, items, completions, supplements, taken, metrics) = tokio::try_join!(
        load_effective_settings(pool, owner_id),
        CheckinRepo::list_for_date(pool, profile_id, date),
        WorkoutRepo::list_active_items(pool, profile_id),
        WorkoutRepo::list_completions(pool, profile_id, date, date),
        SupplementRepo::list_for_profile(pool, profile_id),
        SupplementRepo::taken_ids_for_date(pool, profile_id, date),
        DailyMetricRepo::get_for_date(pool, profile_id, date),
    )?;

    let mut ctx = GenerationContext::new(profile_id, date, now, settings);
    ctx.checkins = checkins
        .iter()
        .map(|c| c.kind.parse::<CheckinKind>())
        .collect::<Result<_, _>>()?;
    ctx.workouts = items
        .iter()
        .map(ScheduledWorkout::try_from)
        .collect::<Result<_, _>>()?;
    ctx.completions = completions.iter().map(CompletionRecord::from).collect();
    ctx.supplements = supplements
        .iter()
        .map(ScheduledSupplement::try_from)
        .collect::<Result<_, _>>()?;
    ctx.supplements_taken = taken;
    ctx.totals = metrics.as_ref().map(DailyTotals::from);
    Ok(ctx)
}

/// Run generation for a profile the caller has already been checked to own.
pub async fn run(
    pool: &PgPool,
    policy: &GenerationPolicy,
    owner_id: DbId,
    profile_id: DbId,
    date: NaiveDate,
    now: Timestamp,
) -> AppResult<GenerationOutcome> {
    let ctx = load_context(pool, owner_id, profile_id, date, now).await?;

    let (created, plan) = NotificationRepo::persist_generated(pool, profile_id, date, |existing| {
        plan_generation(&ctx, existing, policy)
    })
    .await?;

    tracing::info!(
        profile_id,
        %date,
        proposed = plan.proposed,
        created = created.len(),
        duplicates = plan.duplicates,
        quiet_suppressed = plan.quiet_suppressed,
        capped = plan.capped,
        "Inbox generation finished"
    );

    Ok(GenerationOutcome { created, plan })
}
