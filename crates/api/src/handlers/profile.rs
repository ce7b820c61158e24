//! Handlers for the `/profiles` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vitals_core::types::DbId;
use vitals_db::models::profile::{CreateProfile, Profile};
use vitals_db::repositories::ProfileRepo;

use crate::error::{validate_input, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_profile_owned;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /v1/profiles
pub async fn create_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProfile>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    let profile = ProfileRepo::create(&state.pool, auth.owner_id, &input).await?;
    tracing::info!(profile_id = profile.id, owner_id = auth.owner_id, "Profile created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: profile })))
}

/// GET /v1/profiles
pub async fn list_profiles(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Profile>>>> {
    let profiles = ProfileRepo::list_for_owner(&state.pool, auth.owner_id).await?;
    Ok(Json(DataResponse { data: profiles }))
}

/// GET /v1/profiles/{id}
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(profile_id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;
    Ok(Json(DataResponse { data: profile }))
}
