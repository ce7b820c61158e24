//! Tunable knobs of the generation pipeline.

use std::collections::HashSet;

use crate::calendar::validate_minute_of_day;
use crate::error::CoreError;
use crate::inbox::kinds::KindGroup;
use crate::types::MinuteOfDay;

/// Default lead time before a workout's target minute.
pub const DEFAULT_WORKOUT_LEAD_MINUTES: i64 = 30;

/// Default local minute after which step and active-energy shortfalls are
/// reported (20:00).
pub const DEFAULT_ACTIVITY_CUTOFF_MINUTE: MinuteOfDay = 20 * 60;

/// Sleep is final once synced, so it is reported from the start of the day.
pub const DEFAULT_SLEEP_CUTOFF_MINUTE: MinuteOfDay = 0;

/// Generation policy shared by every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPolicy {
    /// Cap-filter priority, highest first. Always a permutation of
    /// [`KindGroup::ALL`].
    pub priority: Vec<KindGroup>,
    /// How many minutes before a workout's target the reminder opens.
    pub workout_lead_minutes: i64,
    /// Local minute from which low-steps / low-active-energy may fire.
    pub activity_cutoff_minute: MinuteOfDay,
    /// Local minute from which low-sleep may fire.
    pub sleep_cutoff_minute: MinuteOfDay,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            priority: KindGroup::ALL.to_vec(),
            workout_lead_minutes: DEFAULT_WORKOUT_LEAD_MINUTES,
            activity_cutoff_minute: DEFAULT_ACTIVITY_CUTOFF_MINUTE,
            sleep_cutoff_minute: DEFAULT_SLEEP_CUTOFF_MINUTE,
        }
    }
}

impl GenerationPolicy {
    /// Position of `group` in the priority order (0 = highest).
    pub fn rank(&self, group: KindGroup) -> usize {
        self.priority
            .iter()
            .position(|g| *g == group)
            .unwrap_or(self.priority.len())
    }

    /// Check the policy's numeric fields.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.workout_lead_minutes < 0 {
            return Err(CoreError::Validation(format!(
                "workout lead must not be negative, got {}",
                self.workout_lead_minutes
            )));
        }
        validate_minute_of_day("activity cutoff", self.activity_cutoff_minute)?;
        validate_minute_of_day("sleep cutoff", self.sleep_cutoff_minute)?;
        Ok(())
    }
}

/// Parse a comma-separated priority list such as `"metrics,checkin"`.
///
/// Groups not named are appended in their default order, so a partial list
/// only promotes the groups it names. Duplicates and unknown names are
/// rejected.
pub fn parse_priority(raw: &str) -> Result<Vec<KindGroup>, CoreError> {
    let mut seen = HashSet::new();
    let mut order = Vec::with_capacity(KindGroup::ALL.len());

    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let group: KindGroup = name.parse()?;
        if !seen.insert(group) {
            return Err(CoreError::Validation(format!(
                "Priority group '{name}' listed more than once"
            )));
        }
        order.push(group);
    }

    for group in KindGroup::ALL {
        if seen.insert(group) {
            order.push(group);
        }
    }

    Ok(order)
}
