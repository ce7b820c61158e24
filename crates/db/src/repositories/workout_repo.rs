//! Repository for workout plans, plan items, and completions.

use chrono::NaiveDate;
use sqlx::PgPool;
use vitals_core::types::DbId;

use crate::models::workout::{
    RecordCompletion, ReplaceWorkoutPlan, WorkoutCompletion, WorkoutPlan, WorkoutPlanItem,
    WorkoutPlanWithItems,
};

const PLAN_COLUMNS: &str = "id, owner_id, profile_id, name, is_active, created_at, updated_at";

const ITEM_COLUMNS: &str = "id, plan_id, kind, target_minute, days_mask, duration_minutes, \
    intensity, note, created_at, updated_at";

const COMPLETION_COLUMNS: &str =
    "id, owner_id, profile_id, completion_date, plan_item_id, status, created_at, updated_at";

pub struct WorkoutRepo;

impl WorkoutRepo {
    // -----------------------------------------------------------------------
    // Plans
    // -----------------------------------------------------------------------

    /// Deactivate the profile's current plan and insert `input` as the new
    /// active plan, all within one transaction.
    pub async fn replace_plan(
        pool: &PgPool,
        owner_id: DbId,
        profile_id: DbId,
        input: &ReplaceWorkoutPlan,
    ) -> Result<WorkoutPlanWithItems, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE workout_plans SET is_active = false \
             WHERE profile_id = $1 AND is_active",
        )
        .bind(profile_id)
        .execute(&mut *tx)
        .await?;

        let plan_query = format!(
            "INSERT INTO workout_plans (owner_id, profile_id, name) \
             VALUES ($1, $2, $3) \
             RETURNING {PLAN_COLUMNS}"
        );
        let plan = sqlx::query_as::<_, WorkoutPlan>(&plan_query)
            .bind(owner_id)
            .bind(profile_id)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;

        let item_query = format!(
            "INSERT INTO workout_plan_items \
                (plan_id, kind, target_minute, days_mask, duration_minutes, intensity, note) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {ITEM_COLUMNS}"
        );
        let mut items = Vec::with_capacity(input.items.len());
        for item in &input.items {
            let row = sqlx::query_as::<_, WorkoutPlanItem>(&item_query)
                .bind(plan.id)
                .bind(&item.kind)
                .bind(item.target_minute)
                .bind(item.days_mask)
                .bind(item.duration_minutes)
                .bind(&item.intensity)
                .bind(&item.note)
                .fetch_one(&mut *tx)
                .await?;
            items.push(row);
        }

        tx.commit().await?;
        Ok(WorkoutPlanWithItems { plan, items })
    }

    pub async fn get_active_plan(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Option<WorkoutPlanWithItems>, sqlx::Error> {
        let query = format!(
            "SELECT {PLAN_COLUMNS} FROM workout_plans WHERE profile_id = $1 AND is_active"
        );
        let Some(plan) = sqlx::query_as::<_, WorkoutPlan>(&query)
            .bind(profile_id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let items = Self::list_items(pool, plan.id).await?;
        Ok(Some(WorkoutPlanWithItems { plan, items }))
    }

    pub async fn list_items(
        pool: &PgPool,
        plan_id: DbId,
    ) -> Result<Vec<WorkoutPlanItem>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM workout_plan_items \
             WHERE plan_id = $1 \
             ORDER BY target_minute, id"
        );
        sqlx::query_as::<_, WorkoutPlanItem>(&query)
            .bind(plan_id)
            .fetch_all(pool)
            .await
    }

    /// Items of the profile's active plan; empty when there is no plan.
    pub async fn list_active_items(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Vec<WorkoutPlanItem>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM workout_plan_items \
             WHERE plan_id = (SELECT id FROM workout_plans WHERE profile_id = $1 AND is_active) \
             ORDER BY target_minute, id"
        );
        sqlx::query_as::<_, WorkoutPlanItem>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Whether `item_id` is part of the profile's active plan.
    pub async fn item_belongs_to_profile(
        pool: &PgPool,
        item_id: DbId,
        profile_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS ( \
                SELECT 1 FROM workout_plan_items i \
                JOIN workout_plans p ON p.id = i.plan_id \
                WHERE i.id = $1 AND p.profile_id = $2 AND p.is_active \
             )",
        )
        .bind(item_id)
        .bind(profile_id)
        .fetch_one(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Completions
    // -----------------------------------------------------------------------

    /// Record or overwrite the status of one item on one day.
    pub async fn record_completion(
        pool: &PgPool,
        owner_id: DbId,
        profile_id: DbId,
        input: &RecordCompletion,
    ) -> Result<WorkoutCompletion, sqlx::Error> {
        let query = format!(
            "INSERT INTO workout_completions \
                (owner_id, profile_id, completion_date, plan_item_id, status) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT ON CONSTRAINT uq_workout_completions_profile_date_item \
             DO UPDATE SET status = EXCLUDED.status \
             RETURNING {COMPLETION_COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutCompletion>(&query)
            .bind(owner_id)
            .bind(profile_id)
            .bind(input.completion_date)
            .bind(input.plan_item_id)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Completions with `completion_date` in `[from, to]`.
    pub async fn list_completions(
        pool: &PgPool,
        profile_id: DbId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<WorkoutCompletion>, sqlx::Error> {
        let query = format!(
            "SELECT {COMPLETION_COLUMNS} FROM workout_completions \
             WHERE profile_id = $1 AND completion_date BETWEEN $2 AND $3 \
             ORDER BY completion_date, plan_item_id"
        );
        sqlx::query_as::<_, WorkoutCompletion>(&query)
            .bind(profile_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }
}
