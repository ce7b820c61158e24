//! Profile entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vitals_core::types::{DbId, Timestamp};

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub owner_id: DbId,
    pub display_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a profile. The owner comes from the authenticated caller.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfile {
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,
}
