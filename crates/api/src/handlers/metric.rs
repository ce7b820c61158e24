//! Handlers for `/profiles/{id}/metrics/{date}`.

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use vitals_core::types::DbId;
use vitals_db::models::daily_metric::{DailyMetric, UpsertDailyMetric};
use vitals_db::repositories::DailyMetricRepo;

use crate::error::{validate_input, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_profile_owned;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /v1/profiles/{id}/metrics/{date}
///
/// Record a sync. Fields left out keep their stored value.
pub async fn upsert_metrics(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((profile_id, date)): AppPath<(DbId, NaiveDate)>,
    AppJson(input): AppJson<UpsertDailyMetric>,
) -> AppResult<Json<DataResponse<DailyMetric>>> {
    validate_input(&input)?;
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;

    let row = DailyMetricRepo::upsert(&state.pool, profile_id, date, &input).await?;
    tracing::debug!(profile_id, %date, "Daily metrics synced");
    Ok(Json(DataResponse { data: row }))
}

/// GET /v1/profiles/{id}/metrics/{date}
///
/// `data` is `null` when nothing was synced for the day.
pub async fn get_metrics(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((profile_id, date)): AppPath<(DbId, NaiveDate)>,
) -> AppResult<Json<DataResponse<Option<DailyMetric>>>> {
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;
    let row = DailyMetricRepo::get_for_date(&state.pool, profile_id, date).await?;
    Ok(Json(DataResponse { data: row }))
}
