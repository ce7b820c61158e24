//! Inbox notification generation.
//!
//! A generation run takes a [`GenerationContext`] plus what is already stored
//! for the profile and day, and decides which notifications to create now:
//!
//! 1. [`builders`] propose candidates from each signal.
//! 2. [`dedup`] drops candidates whose identity is already stored.
//! 3. [`filter`] removes quiet-hour `info` candidates, then truncates to the
//!    daily cap by priority.
//!
//! The result is a [`GenerationPlan`]; persisting it is the caller's job.

pub mod builders;
pub mod context;
pub mod dedup;
pub mod filter;
pub mod kinds;
pub mod policy;

use std::collections::HashSet;

use serde::Serialize;

use crate::calendar::local_minute;
use crate::types::DbId;

pub use context::GenerationContext;
pub use kinds::{NotificationKind, Severity};
pub use policy::GenerationPolicy;

/// A notification proposed by a builder, not yet filtered or stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub kind: NotificationKind,
    /// Distinguishes several notifications of one kind on one day
    /// (plan item id, supplement id).
    pub discriminator: Option<DbId>,
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

impl Candidate {
    /// Build a candidate; severity follows from the kind.
    pub fn new(
        kind: NotificationKind,
        discriminator: Option<DbId>,
        title: String,
        body: String,
    ) -> Self {
        Self {
            kind,
            discriminator,
            title,
            body,
            severity: kind.severity(),
        }
    }

    pub fn dedup_key(&self) -> String {
        dedup::dedup_key(self.kind, self.discriminator)
    }
}

/// What is already stored for the profile and evaluated day.
#[derive(Debug, Clone, Default)]
pub struct ExistingDay {
    /// Dedup keys of stored notifications.
    pub keys: HashSet<String>,
    /// Number of stored notifications (counts against the daily cap).
    pub count: usize,
}

impl ExistingDay {
    pub fn from_keys<I: IntoIterator<Item = String>>(keys: I) -> Self {
        let keys: HashSet<String> = keys.into_iter().collect();
        let count = keys.len();
        Self { keys, count }
    }
}

/// The outcome of planning one generation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationPlan {
    /// Candidates to persist, in priority order.
    pub to_create: Vec<Candidate>,
    /// Candidates proposed by builders.
    pub proposed: usize,
    /// Dropped because their identity is already stored.
    pub duplicates: usize,
    /// Dropped by quiet hours.
    pub quiet_suppressed: usize,
    /// Dropped by the daily cap.
    pub capped: usize,
}

/// Decide which notifications to create for `ctx`.
pub fn plan_generation(
    ctx: &GenerationContext,
    existing: &ExistingDay,
    policy: &GenerationPolicy,
) -> GenerationPlan {
    let candidates = builders::build_candidates(ctx, policy);
    let proposed = candidates.len();

    let (fresh, duplicates) = dedup::drop_existing(candidates, &existing.keys);

    let now_minute = local_minute(ctx.now, ctx.settings.time_zone);
    let (audible, quiet_suppressed) =
        filter::suppress_quiet_hours(fresh, ctx.settings.quiet_window, now_minute);

    let (to_create, capped) = filter::apply_daily_cap(
        audible,
        existing.count,
        ctx.settings.notifications_max_per_day,
        policy,
    );

    GenerationPlan {
        to_create,
        proposed,
        duplicates,
        quiet_suppressed,
        capped,
    }
}
