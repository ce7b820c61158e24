//! Candidate builders.
//!
//! Each builder inspects one signal in a [`GenerationContext`] and proposes
//! zero or more [`Candidate`]s for the evaluated day. Builders are pure and
//! independent: they never see each other's output.

use chrono::Duration;
use chrono_tz::Tz;

use crate::calendar::{end_of_local_day, format_minute, local_instant};
use crate::inbox::context::GenerationContext;
use crate::inbox::kinds::{CheckinKind, NotificationKind};
use crate::inbox::policy::GenerationPolicy;
use crate::inbox::Candidate;
use crate::types::MinuteOfDay;

/// Run every builder and collect their candidates in a fixed order.
pub fn build_candidates(ctx: &GenerationContext, policy: &GenerationPolicy) -> Vec<Candidate> {
    let tz = ctx.settings.time_zone;
    let mut out = Vec::new();

    out.extend(low_sleep(ctx, tz, policy.sleep_cutoff_minute));
    out.extend(low_steps(ctx, tz, policy.activity_cutoff_minute));
    out.extend(low_active_energy(ctx, tz, policy.activity_cutoff_minute));
    out.extend(morning_checkin(ctx, tz));
    out.extend(evening_checkin(ctx, tz));
    out.extend(workouts(ctx, tz, policy.workout_lead_minutes));
    out.extend(vitamins(ctx, tz));

    out
}

// ---------------------------------------------------------------------------
// Checkins
// ---------------------------------------------------------------------------

pub fn morning_checkin(ctx: &GenerationContext, tz: Tz) -> Option<Candidate> {
    checkin_reminder(
        ctx,
        tz,
        CheckinKind::Morning,
        ctx.settings.morning_checkin_minute,
    )
}

pub fn evening_checkin(ctx: &GenerationContext, tz: Tz) -> Option<Candidate> {
    checkin_reminder(
        ctx,
        tz,
        CheckinKind::Evening,
        ctx.settings.evening_checkin_minute,
    )
}

fn checkin_reminder(
    ctx: &GenerationContext,
    tz: Tz,
    slot: CheckinKind,
    target: MinuteOfDay,
) -> Option<Candidate> {
    if ctx.has_checkin(slot) || ctx.now < local_instant(ctx.date, target, tz) {
        return None;
    }

    let (kind, title) = match slot {
        CheckinKind::Morning => (NotificationKind::MorningCheckin, "Morning check-in"),
        CheckinKind::Evening => (NotificationKind::EveningCheckin, "Evening check-in"),
    };
    Some(Candidate::new(
        kind,
        None,
        title.to_string(),
        format!(
            "You haven't logged your {} check-in yet. It was due at {}.",
            slot.as_str(),
            format_minute(target)
        ),
    ))
}

// ---------------------------------------------------------------------------
// Vitamins
// ---------------------------------------------------------------------------

/// One candidate per enabled, due, untaken supplement.
///
/// A supplement is due from its target minute until the end of the local
/// day.
pub fn vitamins(ctx: &GenerationContext, tz: Tz) -> Vec<Candidate> {
    let day_end = end_of_local_day(ctx.date, tz);

    ctx.supplements
        .iter()
        .filter(|s| s.is_enabled && s.days_mask.includes_date(ctx.date))
        .filter(|s| !ctx.is_supplement_taken(s.supplement_id))
        .filter_map(|s| {
            let target = s.target_minute.unwrap_or(ctx.settings.vitamins_minute);
            let opens = local_instant(ctx.date, target, tz);
            if ctx.now < opens || ctx.now >= day_end {
                return None;
            }
            let body = match &s.dose {
                Some(dose) => format!("Take {dose} of {} and mark it as taken.", s.name),
                None => format!("Take your {} and mark it as taken.", s.name),
            };
            Some(Candidate::new(
                NotificationKind::Vitamins,
                Some(s.supplement_id),
                format!("Time for {}", s.name),
                body,
            ))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Workouts
// ---------------------------------------------------------------------------

/// One candidate per scheduled plan item whose window contains `now`.
///
/// The window is `[target - lead, target + duration]`, inclusive at both
/// ends. A `done` completion for the item on the evaluated date suppresses
/// the reminder.
pub fn workouts(ctx: &GenerationContext, tz: Tz, lead_minutes: i64) -> Vec<Candidate> {
    let mut due: Vec<_> = ctx
        .workouts
        .iter()
        .filter(|w| w.days_mask.includes_date(ctx.date))
        .filter(|w| !ctx.is_workout_done(w.item_id))
        .filter(|w| {
            let start = local_instant(ctx.date, w.target_minute, tz);
            let opens = start - Duration::minutes(lead_minutes);
            let closes = start + Duration::minutes(i64::from(w.duration_minutes.max(0)));
            ctx.now >= opens && ctx.now <= closes
        })
        .collect();
    due.sort_by_key(|w| (w.target_minute, w.item_id));

    due.into_iter()
        .map(|w| {
            let mut body = format!("{} min", w.duration_minutes);
            if let Some(intensity) = &w.intensity {
                body.push(' ');
                body.push_str(intensity);
            }
            body.push(' ');
            body.push_str(&w.kind);
            body.push_str(" session.");
            if let Some(note) = w.note.as_deref().filter(|n| !n.is_empty()) {
                body.push(' ');
                body.push_str(note);
            }
            Candidate::new(
                NotificationKind::Workout,
                Some(w.item_id),
                format!("{} at {}", capitalize(&w.kind), format_minute(w.target_minute)),
                body,
            )
        })
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Metric thresholds
// ---------------------------------------------------------------------------

fn past_cutoff(ctx: &GenerationContext, tz: Tz, cutoff: MinuteOfDay) -> bool {
    ctx.now >= local_instant(ctx.date, cutoff, tz)
}

pub fn low_steps(ctx: &GenerationContext, tz: Tz, cutoff: MinuteOfDay) -> Option<Candidate> {
    let steps = ctx.totals.as_ref()?.steps?;
    let min = i64::from(ctx.settings.min_steps);
    if steps >= min || !past_cutoff(ctx, tz, cutoff) {
        return None;
    }
    Some(Candidate::new(
        NotificationKind::LowSteps,
        None,
        "Low step count".to_string(),
        format!("{steps} steps today, below your goal of {min}."),
    ))
}

pub fn low_sleep(ctx: &GenerationContext, tz: Tz, cutoff: MinuteOfDay) -> Option<Candidate> {
    let slept = ctx.totals.as_ref()?.sleep_minutes?;
    let min = ctx.settings.min_sleep_minutes;
    if slept >= min || !past_cutoff(ctx, tz, cutoff) {
        return None;
    }
    Some(Candidate::new(
        NotificationKind::LowSleep,
        None,
        "Short sleep".to_string(),
        format!(
            "You slept {}h{:02}m, below your {}h{:02}m target.",
            slept / 60,
            slept % 60,
            min / 60,
            min % 60
        ),
    ))
}

pub fn low_active_energy(
    ctx: &GenerationContext,
    tz: Tz,
    cutoff: MinuteOfDay,
) -> Option<Candidate> {
    let kcal = ctx.totals.as_ref()?.active_energy_kcal?;
    let min = ctx.settings.min_active_energy_kcal;
    if kcal >= f64::from(min) || !past_cutoff(ctx, tz, cutoff) {
        return None;
    }
    Some(Candidate::new(
        NotificationKind::LowActiveEnergy,
        None,
        "Low activity".to_string(),
        format!("{kcal:.0} kcal of active energy today, below your goal of {min} kcal."),
    ))
}
