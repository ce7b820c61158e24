//! Settings resolution: stored preference overrides merged onto an explicit
//! defaults table.
//!
//! Every notification builder reads an [`EffectiveSettings`], never the raw
//! overrides. Resolution itself cannot fail: a missing overrides row, or a
//! stored value that no longer passes validation, falls back to the default
//! for that field.

use chrono_tz::Tz;
use serde::Serialize;

use crate::calendar::{is_valid_minute, validate_minute_of_day, QuietWindow};
use crate::error::CoreError;
use crate::types::MinuteOfDay;

/// Upper bound for `notifications_max_per_day`.
pub const MAX_NOTIFICATIONS_PER_DAY_LIMIT: i16 = 10;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Immutable fallback values for every effective setting.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDefaults {
    pub time_zone: Tz,
    pub quiet_window: Option<QuietWindow>,
    pub notifications_max_per_day: i16,
    pub min_sleep_minutes: i32,
    pub min_steps: i32,
    pub min_active_energy_kcal: i32,
    pub morning_checkin_minute: MinuteOfDay,
    pub evening_checkin_minute: MinuteOfDay,
    pub vitamins_minute: MinuteOfDay,
}

impl SettingsDefaults {
    /// The system-wide defaults table.
    pub const SYSTEM: SettingsDefaults = SettingsDefaults {
        time_zone: Tz::UTC,
        quiet_window: None,
        notifications_max_per_day: 5,
        min_sleep_minutes: 7 * 60,
        min_steps: 6000,
        min_active_energy_kcal: 300,
        morning_checkin_minute: 9 * 60,
        evening_checkin_minute: 21 * 60,
        vitamins_minute: 9 * 60,
    };
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

/// A user's stored preference overrides. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub time_zone: Option<String>,
    pub quiet_start_minute: Option<MinuteOfDay>,
    pub quiet_end_minute: Option<MinuteOfDay>,
    pub notifications_max_per_day: Option<i16>,
    pub min_sleep_minutes: Option<i32>,
    pub min_steps: Option<i32>,
    pub min_active_energy_kcal: Option<i32>,
    pub morning_checkin_minute: Option<MinuteOfDay>,
    pub evening_checkin_minute: Option<MinuteOfDay>,
    pub vitamins_minute: Option<MinuteOfDay>,
}

/// Validate overrides before they are written.
///
/// Rejects unknown time zones, minutes outside `0..=1439`, a quiet window
/// with only one bound, a daily cap outside `0..=10`, and negative
/// thresholds.
pub fn validate_overrides(overrides: &SettingsOverrides) -> Result<(), CoreError> {
    if let Some(tz) = &overrides.time_zone {
        parse_time_zone(tz)?;
    }

    if overrides.quiet_start_minute.is_some() != overrides.quiet_end_minute.is_some() {
        return Err(CoreError::Validation(
            "quiet_start_minute and quiet_end_minute must be set together".to_string(),
        ));
    }

    let minutes = [
        ("quiet_start_minute", overrides.quiet_start_minute),
        ("quiet_end_minute", overrides.quiet_end_minute),
        ("morning_checkin_minute", overrides.morning_checkin_minute),
        ("evening_checkin_minute", overrides.evening_checkin_minute),
        ("vitamins_minute", overrides.vitamins_minute),
    ];
    for (field, value) in minutes {
        if let Some(minute) = value {
            validate_minute_of_day(field, minute)?;
        }
    }

    if let Some(max) = overrides.notifications_max_per_day {
        if !(0..=MAX_NOTIFICATIONS_PER_DAY_LIMIT).contains(&max) {
            return Err(CoreError::Validation(format!(
                "notifications_max_per_day must be between 0 and {MAX_NOTIFICATIONS_PER_DAY_LIMIT}, got {max}"
            )));
        }
    }

    let thresholds = [
        ("min_sleep_minutes", overrides.min_sleep_minutes),
        ("min_steps", overrides.min_steps),
        ("min_active_energy_kcal", overrides.min_active_energy_kcal),
    ];
    for (field, value) in thresholds {
        if let Some(v) = value {
            if v < 0 {
                return Err(CoreError::Validation(format!(
                    "{field} must not be negative, got {v}"
                )));
            }
        }
    }

    Ok(())
}

/// Parse an IANA time zone identifier such as `Europe/Berlin`.
pub fn parse_time_zone(name: &str) -> Result<Tz, CoreError> {
    name.parse::<Tz>()
        .map_err(|_| CoreError::Validation(format!("Unknown time zone: '{name}'")))
}

// ---------------------------------------------------------------------------
// Effective settings
// ---------------------------------------------------------------------------

/// Overrides merged onto defaults. All fields are guaranteed valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveSettings {
    pub time_zone: Tz,
    pub quiet_window: Option<QuietWindow>,
    pub notifications_max_per_day: i16,
    pub min_sleep_minutes: i32,
    pub min_steps: i32,
    pub min_active_energy_kcal: i32,
    pub morning_checkin_minute: MinuteOfDay,
    pub evening_checkin_minute: MinuteOfDay,
    pub vitamins_minute: MinuteOfDay,
}

/// Merge `overrides` (if any) onto `defaults`.
pub fn resolve_settings(
    overrides: Option<&SettingsOverrides>,
    defaults: &SettingsDefaults,
) -> EffectiveSettings {
    let Some(o) = overrides else {
        return from_defaults(defaults);
    };

    let time_zone = o
        .time_zone
        .as_deref()
        .and_then(|name| parse_time_zone(name).ok())
        .unwrap_or(defaults.time_zone);

    let quiet_window = QuietWindow::from_bounds(o.quiet_start_minute, o.quiet_end_minute)
        .or(defaults.quiet_window);

    let notifications_max_per_day = o
        .notifications_max_per_day
        .filter(|m| (0..=MAX_NOTIFICATIONS_PER_DAY_LIMIT).contains(m))
        .unwrap_or(defaults.notifications_max_per_day);

    EffectiveSettings {
        time_zone,
        quiet_window,
        notifications_max_per_day,
        min_sleep_minutes: non_negative(o.min_sleep_minutes, defaults.min_sleep_minutes),
        min_steps: non_negative(o.min_steps, defaults.min_steps),
        min_active_energy_kcal: non_negative(
            o.min_active_energy_kcal,
            defaults.min_active_energy_kcal,
        ),
        morning_checkin_minute: minute_or(o.morning_checkin_minute, defaults.morning_checkin_minute),
        evening_checkin_minute: minute_or(o.evening_checkin_minute, defaults.evening_checkin_minute),
        vitamins_minute: minute_or(o.vitamins_minute, defaults.vitamins_minute),
    }
}

fn from_defaults(d: &SettingsDefaults) -> EffectiveSettings {
    EffectiveSettings {
        time_zone: d.time_zone,
        quiet_window: d.quiet_window,
        notifications_max_per_day: d.notifications_max_per_day,
        min_sleep_minutes: d.min_sleep_minutes,
        min_steps: d.min_steps,
        min_active_energy_kcal: d.min_active_energy_kcal,
        morning_checkin_minute: d.morning_checkin_minute,
        evening_checkin_minute: d.evening_checkin_minute,
        vitamins_minute: d.vitamins_minute,
    }
}

fn non_negative(value: Option<i32>, default: i32) -> i32 {
    value.filter(|v| *v >= 0).unwrap_or(default)
}

fn minute_or(value: Option<MinuteOfDay>, default: MinuteOfDay) -> MinuteOfDay {
    value.filter(|m| is_valid_minute(*m)).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn missing_row_yields_defaults() {
        let s = resolve_settings(None, &SettingsDefaults::SYSTEM);
        assert_eq!(s.time_zone, Tz::UTC);
        assert_eq!(s.quiet_window, None);
        assert_eq!(s.notifications_max_per_day, 5);
        assert_eq!(s.min_steps, 6000);
        assert_eq!(s.morning_checkin_minute, 540);
    }

    #[test]
    fn empty_overrides_equal_defaults() {
        let empty = SettingsOverrides::default();
        assert_eq!(
            resolve_settings(Some(&empty), &SettingsDefaults::SYSTEM),
            resolve_settings(None, &SettingsDefaults::SYSTEM)
        );
    }

    #[test]
    fn overrides_replace_only_set_fields() {
        let o = SettingsOverrides {
            time_zone: Some("Europe/Berlin".into()),
            min_steps: Some(10_000),
            quiet_start_minute: Some(22 * 60),
            quiet_end_minute: Some(7 * 60),
            ..Default::default()
        };
        let s = resolve_settings(Some(&o), &SettingsDefaults::SYSTEM);
        assert_eq!(s.time_zone, chrono_tz::Europe::Berlin);
        assert_eq!(s.min_steps, 10_000);
        assert_eq!(s.min_sleep_minutes, 420);
        assert_eq!(
            s.quiet_window,
            Some(QuietWindow {
                start_minute: 1320,
                end_minute: 420
            })
        );
    }

    #[test]
    fn invalid_stored_values_fall_back() {
        let o = SettingsOverrides {
            time_zone: Some("Mars/Olympus".into()),
            notifications_max_per_day: Some(42),
            min_steps: Some(-5),
            vitamins_minute: Some(2000),
            quiet_start_minute: Some(60),
            ..Default::default()
        };
        let s = resolve_settings(Some(&o), &SettingsDefaults::SYSTEM);
        assert_eq!(s, resolve_settings(None, &SettingsDefaults::SYSTEM));
    }

    #[test]
    fn custom_defaults_table_is_honoured() {
        let defaults = SettingsDefaults {
            notifications_max_per_day: 2,
            ..SettingsDefaults::SYSTEM
        };
        let s = resolve_settings(None, &defaults);
        assert_eq!(s.notifications_max_per_day, 2);
    }

    #[test]
    fn validate_accepts_full_valid_overrides() {
        let o = SettingsOverrides {
            time_zone: Some("America/New_York".into()),
            quiet_start_minute: Some(0),
            quiet_end_minute: Some(1439),
            notifications_max_per_day: Some(0),
            min_sleep_minutes: Some(0),
            min_steps: Some(8000),
            min_active_energy_kcal: Some(500),
            morning_checkin_minute: Some(480),
            evening_checkin_minute: Some(1320),
            vitamins_minute: Some(600),
        };
        assert!(validate_overrides(&o).is_ok());
    }

    #[test]
    fn validate_rejects_half_quiet_window() {
        let o = SettingsOverrides {
            quiet_start_minute: Some(1320),
            ..Default::default()
        };
        assert_matches!(validate_overrides(&o), Err(CoreError::Validation(_)));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let cases = [
            SettingsOverrides {
                time_zone: Some("Nowhere/Special".into()),
                ..Default::default()
            },
            SettingsOverrides {
                notifications_max_per_day: Some(11),
                ..Default::default()
            },
            SettingsOverrides {
                morning_checkin_minute: Some(1440),
                ..Default::default()
            },
            SettingsOverrides {
                min_active_energy_kcal: Some(-1),
                ..Default::default()
            },
        ];
        for o in cases {
            assert_matches!(validate_overrides(&o), Err(CoreError::Validation(_)));
        }
    }
}
