//! Notification kinds, severities, and priority groups.
//!
//! The string forms are stored in the `notifications.kind` and
//! `notifications.severity` columns and must stay stable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// How urgent a notification is. Only `Info` is subject to quiet hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[serde(rename = "checkin_morning")]
    MorningCheckin,
    #[serde(rename = "checkin_evening")]
    EveningCheckin,
    Vitamins,
    Workout,
    LowSteps,
    LowSleep,
    LowActiveEnergy,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 7] = [
        NotificationKind::MorningCheckin,
        NotificationKind::EveningCheckin,
        NotificationKind::Vitamins,
        NotificationKind::Workout,
        NotificationKind::LowSteps,
        NotificationKind::LowSleep,
        NotificationKind::LowActiveEnergy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::MorningCheckin => "checkin_morning",
            NotificationKind::EveningCheckin => "checkin_evening",
            NotificationKind::Vitamins => "vitamins",
            NotificationKind::Workout => "workout",
            NotificationKind::LowSteps => "low_steps",
            NotificationKind::LowSleep => "low_sleep",
            NotificationKind::LowActiveEnergy => "low_active_energy",
        }
    }

    /// The priority group this kind is ranked in when the daily cap bites.
    pub fn group(self) -> KindGroup {
        match self {
            NotificationKind::LowSteps
            | NotificationKind::LowSleep
            | NotificationKind::LowActiveEnergy => KindGroup::Metrics,
            NotificationKind::MorningCheckin | NotificationKind::EveningCheckin => {
                KindGroup::Checkin
            }
            NotificationKind::Workout => KindGroup::Workout,
            NotificationKind::Vitamins => KindGroup::Vitamins,
        }
    }

    pub fn severity(self) -> Severity {
        match self.group() {
            KindGroup::Metrics => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NotificationKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown notification kind: '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Priority group
// ---------------------------------------------------------------------------

/// Coarse grouping of kinds used by the cap filter's priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KindGroup {
    Metrics,
    Checkin,
    Workout,
    Vitamins,
}

impl KindGroup {
    pub const ALL: [KindGroup; 4] = [
        KindGroup::Metrics,
        KindGroup::Checkin,
        KindGroup::Workout,
        KindGroup::Vitamins,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KindGroup::Metrics => "metrics",
            KindGroup::Checkin => "checkin",
            KindGroup::Workout => "workout",
            KindGroup::Vitamins => "vitamins",
        }
    }
}

impl FromStr for KindGroup {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KindGroup::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown priority group: '{s}'. Valid groups: metrics, checkin, workout, vitamins"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Checkin kind
// ---------------------------------------------------------------------------

/// The two daily checkin slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckinKind {
    Morning,
    Evening,
}

impl CheckinKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckinKind::Morning => "morning",
            CheckinKind::Evening => "evening",
        }
    }
}

impl FromStr for CheckinKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(CheckinKind::Morning),
            "evening" => Ok(CheckinKind::Evening),
            other => Err(CoreError::Validation(format!(
                "Unknown checkin kind: '{other}'. Valid kinds: morning, evening"
            ))),
        }
    }
}
