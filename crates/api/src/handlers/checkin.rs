//! Handlers for `/profiles/{id}/checkins`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vitals_core::inbox::kinds::CheckinKind;
use vitals_core::types::DbId;
use vitals_db::models::checkin::{Checkin, CreateCheckin};
use vitals_db::repositories::CheckinRepo;

use crate::error::{validate_input, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::ensure_profile_owned;
use crate::middleware::auth::AuthUser;
use crate::query::DateParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /v1/profiles/{id}/checkins
///
/// Returns 409 if the slot is already logged for that date.
pub async fn create_checkin(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(profile_id): AppPath<DbId>,
    AppJson(input): AppJson<CreateCheckin>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    input.kind.parse::<CheckinKind>()?;
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;

    let checkin = CheckinRepo::create(&state.pool, profile_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: checkin })))
}

/// GET /v1/profiles/{id}/checkins?date=YYYY-MM-DD
pub async fn list_checkins(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(profile_id): AppPath<DbId>,
    AppQuery(params): AppQuery<DateParams>,
) -> AppResult<Json<DataResponse<Vec<Checkin>>>> {
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;
    let checkins = CheckinRepo::list_for_date(&state.pool, profile_id, params.date).await?;
    Ok(Json(DataResponse { data: checkins }))
}
