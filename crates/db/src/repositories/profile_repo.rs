//! Repository for the `profiles` table.

use sqlx::PgPool;
use vitals_core::types::DbId;

use crate::models::profile::{CreateProfile, Profile};

const COLUMNS: &str = "id, owner_id, display_name, created_at, updated_at";

/// Provides CRUD operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a profile owned by `owner_id`.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateProfile,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (owner_id, display_name) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(owner_id)
            .bind(&input.display_name)
            .fetch_one(pool)
            .await
    }

    /// Find a profile only if it belongs to `owner_id`.
    ///
    /// A profile owned by someone else is indistinguishable from a missing one.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_for_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE owner_id = $1 ORDER BY id");
        sqlx::query_as::<_, Profile>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }
}
