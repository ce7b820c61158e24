//! Calendar helpers: minute-of-day arithmetic, weekday masks, quiet windows,
//! and conversion between profile-local wall-clock times and UTC instants.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{MinuteOfDay, Timestamp};

// ---------------------------------------------------------------------------
// Minute-of-day
// ---------------------------------------------------------------------------

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: i16 = 1440;

/// Largest valid minute-of-day value (23:59).
pub const LAST_MINUTE_OF_DAY: MinuteOfDay = MINUTES_PER_DAY - 1;

/// Whether `minute` is a valid minute-of-day.
pub fn is_valid_minute(minute: MinuteOfDay) -> bool {
    (0..MINUTES_PER_DAY).contains(&minute)
}

/// Validate that `minute` lies in `0..=1439`.
///
/// `field` names the offending input in the error message.
pub fn validate_minute_of_day(field: &str, minute: MinuteOfDay) -> Result<(), CoreError> {
    if is_valid_minute(minute) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be a minute of day between 0 and {LAST_MINUTE_OF_DAY}, got {minute}"
        )))
    }
}

/// Render a minute-of-day as `HH:MM`.
pub fn format_minute(minute: MinuteOfDay) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// The local minute-of-day of `now` in `tz`.
pub fn local_minute(now: Timestamp, tz: Tz) -> MinuteOfDay {
    let local = now.with_timezone(&tz);
    // hour <= 23 and minute <= 59, so the result always fits.
    (local.hour() * 60 + local.minute()) as MinuteOfDay
}

/// The UTC instant at which the wall clock in `tz` shows `minute` on `date`.
///
/// Ambiguous wall-clock times (autumn DST overlap) resolve to the earlier
/// instant. Non-existent times (spring DST gap) resolve to the first instant
/// after the gap.
pub fn local_instant(date: NaiveDate, minute: MinuteOfDay, tz: Tz) -> Timestamp {
    let naive = date.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(minute));
    resolve_local(naive, tz)
}

/// The UTC instant at which `date` ends (local midnight of the next day).
pub fn end_of_local_day(date: NaiveDate, tz: Tz) -> Timestamp {
    let next = date.succ_opt().unwrap_or(date);
    resolve_local(next.and_time(NaiveTime::MIN), tz)
}

/// Longest DST gap in the tz database (Antarctica/Troll, two hours).
const MAX_GAP_MINUTES: i64 = 120;

fn resolve_local(naive: NaiveDateTime, tz: Tz) -> Timestamp {
    // The first wall-clock minute that exists again is the end of the gap.
    (0..=MAX_GAP_MINUTES)
        .find_map(|step| {
            tz.from_local_datetime(&(naive + Duration::minutes(step)))
                .earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

// ---------------------------------------------------------------------------
// Days mask
// ---------------------------------------------------------------------------

/// A 7-bit set of weekdays: bit 0 = Monday ... bit 6 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct DaysMask(u8);

impl DaysMask {
    /// Every day of the week.
    pub const EVERY_DAY: DaysMask = DaysMask(0b111_1111);

    /// Build a mask from raw bits, rejecting anything outside the low 7 bits.
    pub fn from_bits(bits: i16) -> Result<Self, CoreError> {
        if (0..=0b111_1111).contains(&bits) {
            Ok(DaysMask(bits as u8))
        } else {
            Err(CoreError::Validation(format!(
                "days_mask must be between 0 and 127, got {bits}"
            )))
        }
    }

    /// Build a mask containing exactly the given weekdays.
    pub fn from_weekdays(days: &[Weekday]) -> Self {
        DaysMask(
            days.iter()
                .fold(0u8, |acc, d| acc | (1 << d.num_days_from_monday())),
        )
    }

    pub fn bits(self) -> i16 {
        i16::from(self.0)
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_monday()) != 0
    }

    /// Whether the mask schedules anything on `date`.
    pub fn includes_date(self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }
}

impl TryFrom<i16> for DaysMask {
    type Error = CoreError;

    fn try_from(bits: i16) -> Result<Self, Self::Error> {
        DaysMask::from_bits(bits)
    }
}

impl From<DaysMask> for i16 {
    fn from(mask: DaysMask) -> Self {
        mask.bits()
    }
}

// ---------------------------------------------------------------------------
// Quiet window
// ---------------------------------------------------------------------------

/// A half-open `[start, end)` range of local minutes-of-day.
///
/// When `end < start` the window wraps past midnight (e.g. 22:00-07:00).
/// When `start == end` the window is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuietWindow {
    pub start_minute: MinuteOfDay,
    pub end_minute: MinuteOfDay,
}

impl QuietWindow {
    /// Build a window from two optional bounds.
    ///
    /// Returns `None` unless both bounds are present and valid.
    pub fn from_bounds(start: Option<MinuteOfDay>, end: Option<MinuteOfDay>) -> Option<Self> {
        match (start, end) {
            (Some(start_minute), Some(end_minute))
                if is_valid_minute(start_minute) && is_valid_minute(end_minute) =>
            {
                Some(QuietWindow {
                    start_minute,
                    end_minute,
                })
            }
            _ => None,
        }
    }

    pub fn contains(&self, minute: MinuteOfDay) -> bool {
        if self.start_minute <= self.end_minute {
            minute >= self.start_minute && minute < self.end_minute
        } else {
            minute >= self.start_minute || minute < self.end_minute
        }
    }
}
