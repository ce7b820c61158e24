//! Quiet-hours suppression and daily-cap truncation.

use crate::calendar::QuietWindow;
use crate::inbox::kinds::Severity;
use crate::inbox::policy::GenerationPolicy;
use crate::inbox::Candidate;
use crate::types::MinuteOfDay;

/// Remove `info` candidates when `now_minute` falls inside the quiet window.
///
/// Warnings always pass. Returns the survivors and the number suppressed.
pub fn suppress_quiet_hours(
    candidates: Vec<Candidate>,
    window: Option<QuietWindow>,
    now_minute: MinuteOfDay,
) -> (Vec<Candidate>, usize) {
    if !window.is_some_and(|w| w.contains(now_minute)) {
        return (candidates, 0);
    }

    let before = candidates.len();
    let kept: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| c.severity == Severity::Warning)
        .collect();
    let suppressed = before - kept.len();
    (kept, suppressed)
}

/// Order candidates by the policy's priority and keep only as many as the
/// remaining daily budget allows.
///
/// `existing_count` is the number of notifications already stored for the
/// profile and day. Ordering is stable within a priority group. Returns the
/// survivors and the number dropped.
pub fn apply_daily_cap(
    mut candidates: Vec<Candidate>,
    existing_count: usize,
    max_per_day: i16,
    policy: &GenerationPolicy,
) -> (Vec<Candidate>, usize) {
    let max = usize::try_from(max_per_day).unwrap_or(0);
    let budget = max.saturating_sub(existing_count);

    candidates.sort_by_key(|c| policy.rank(c.kind.group()));
    let dropped = candidates.len().saturating_sub(budget);
    candidates.truncate(budget);
    (candidates, dropped)
}
