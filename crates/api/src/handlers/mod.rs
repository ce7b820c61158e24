pub mod checkin;
pub mod inbox;
pub mod metric;
pub mod profile;
pub mod settings;
pub mod supplement;
pub mod workout;

use sqlx::PgPool;
use vitals_core::error::CoreError;
use vitals_core::types::DbId;
use vitals_db::models::profile::Profile;
use vitals_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};

/// Load a profile owned by `owner_id`.
///
/// A foreign profile yields the same `NotFound` as a missing one.
pub async fn ensure_profile_owned(
    pool: &PgPool,
    profile_id: DbId,
    owner_id: DbId,
) -> AppResult<Profile> {
    ProfileRepo::find_owned(pool, profile_id, owner_id)
        .await?
        .ok_or(AppError::Core(CoreError::profile_not_found(profile_id)))
}
