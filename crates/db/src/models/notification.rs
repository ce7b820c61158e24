//! Inbox notification model.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use vitals_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub profile_id: DbId,
    pub generated_for: NaiveDate,
    pub kind: String,
    pub discriminator: Option<DbId>,
    #[serde(skip_serializing)]
    pub dedup_key: String,
    pub title: String,
    pub body: String,
    /// `info` or `warning`.
    pub severity: String,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
