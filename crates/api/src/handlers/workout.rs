//! Handlers for a profile's workout plan and completion records.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vitals_core::error::CoreError;
use vitals_core::inbox::context::VALID_COMPLETION_STATUSES;
use vitals_core::types::DbId;
use vitals_db::models::workout::{RecordCompletion, ReplaceWorkoutPlan, WorkoutPlanWithItems};
use vitals_db::repositories::WorkoutRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_profile_owned;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /v1/profiles/{id}/workout-plan
///
/// Replace the active plan wholesale. The previous plan is deactivated, so
/// its items stop producing reminders.
pub async fn replace_plan(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(profile_id): AppPath<DbId>,
    AppJson(input): AppJson<ReplaceWorkoutPlan>,
) -> AppResult<Json<DataResponse<WorkoutPlanWithItems>>> {
    validate_input(&input)?;
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;

    let plan = WorkoutRepo::replace_plan(&state.pool, auth.owner_id, profile_id, &input).await?;
    tracing::info!(
        profile_id,
        plan_id = plan.plan.id,
        items = plan.items.len(),
        "Workout plan replaced"
    );
    Ok(Json(DataResponse { data: plan }))
}

/// GET /v1/profiles/{id}/workout-plan
///
/// `data` is `null` when no plan is configured.
pub async fn get_plan(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(profile_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Option<WorkoutPlanWithItems>>>> {
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;
    let plan = WorkoutRepo::get_active_plan(&state.pool, profile_id).await?;
    Ok(Json(DataResponse { data: plan }))
}

/// POST /v1/profiles/{id}/workout-completions
///
/// Record `done` or `skipped` for an item of the active plan. Recording
/// again for the same item and day overwrites the status.
pub async fn record_completion(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(profile_id): AppPath<DbId>,
    AppJson(input): AppJson<RecordCompletion>,
) -> AppResult<impl IntoResponse> {
    if !VALID_COMPLETION_STATUSES.contains(&input.status.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid status '{}'. Must be one of: {}",
            input.status,
            VALID_COMPLETION_STATUSES.join(", ")
        ))));
    }
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;

    if !WorkoutRepo::item_belongs_to_profile(&state.pool, input.plan_item_id, profile_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "WorkoutPlanItem",
            id: input.plan_item_id,
        }));
    }

    let completion =
        WorkoutRepo::record_completion(&state.pool, auth.owner_id, profile_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: completion })))
}
