//! Handlers for a profile's supplement schedule.

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;
use vitals_core::error::CoreError;
use vitals_core::types::DbId;
use vitals_db::models::supplement::{MarkTaken, ReplaceSupplements, SupplementSchedule};
use vitals_db::repositories::SupplementRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_profile_owned;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TakenResponse {
    pub supplement_id: DbId,
    pub date: NaiveDate,
    /// `false` when the supplement was already marked for the day.
    pub newly_marked: bool,
}

/// PUT /v1/profiles/{id}/supplements
///
/// Replace the whole schedule. Intake markers of removed entries are deleted.
pub async fn replace_schedule(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(profile_id): AppPath<DbId>,
    AppJson(input): AppJson<ReplaceSupplements>,
) -> AppResult<Json<DataResponse<Vec<SupplementSchedule>>>> {
    validate_input(&input)?;
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;

    let rows = SupplementRepo::replace_schedule(&state.pool, profile_id, &input).await?;
    tracing::info!(profile_id, entries = rows.len(), "Supplement schedule replaced");
    Ok(Json(DataResponse { data: rows }))
}

/// GET /v1/profiles/{id}/supplements
pub async fn list_schedule(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(profile_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Vec<SupplementSchedule>>>> {
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;
    let rows = SupplementRepo::list_for_profile(&state.pool, profile_id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /v1/profiles/{id}/supplements/{supplement_id}/taken
pub async fn mark_taken(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((profile_id, supplement_id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<MarkTaken>,
) -> AppResult<Json<DataResponse<TakenResponse>>> {
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;
    SupplementRepo::find_for_profile(&state.pool, supplement_id, profile_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Supplement",
            id: supplement_id,
        }))?;

    let newly_marked =
        SupplementRepo::mark_taken(&state.pool, supplement_id, profile_id, input.date).await?;
    Ok(Json(DataResponse {
        data: TakenResponse {
            supplement_id,
            date: input.date,
            newly_marked,
        },
    }))
}
