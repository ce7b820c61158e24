//! Checkin entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vitals_core::types::{DbId, Timestamp};

/// A row from the `checkins` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Checkin {
    pub id: DbId,
    pub profile_id: DbId,
    pub checkin_date: NaiveDate,
    /// `morning` or `evening`.
    pub kind: String,
    pub mood: Option<i16>,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for logging a checkin.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCheckin {
    pub checkin_date: NaiveDate,
    pub kind: String,
    #[validate(range(min = 1, max = 5))]
    pub mood: Option<i16>,
    #[validate(length(max = 2000))]
    pub note: Option<String>,
}
