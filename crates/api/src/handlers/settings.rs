//! Handlers for the caller's notification preferences.
//!
//! Settings belong to the owner, not to a single profile.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use vitals_core::settings::{
    resolve_settings, validate_overrides, EffectiveSettings, SettingsDefaults, SettingsOverrides,
};
use vitals_db::models::settings::{ReplaceSettings, UserSettings};
use vitals_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Stored overrides alongside the values generation will actually use.
#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub overrides: Option<UserSettings>,
    pub effective: EffectiveSettings,
}

impl SettingsView {
    fn new(stored: Option<UserSettings>) -> Self {
        let overrides = stored.as_ref().map(SettingsOverrides::from);
        let effective = resolve_settings(overrides.as_ref(), &SettingsDefaults::SYSTEM);
        Self {
            overrides: stored,
            effective,
        }
    }
}

/// GET /v1/settings
pub async fn get_settings(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SettingsView>>> {
    let stored = SettingsRepo::get_for_owner(&state.pool, auth.owner_id).await?;
    Ok(Json(DataResponse {
        data: SettingsView::new(stored),
    }))
}

/// PUT /v1/settings
///
/// Replace every override. Omitted fields revert to the system default.
pub async fn replace_settings(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<ReplaceSettings>,
) -> AppResult<Json<DataResponse<SettingsView>>> {
    validate_overrides(&SettingsOverrides::from(&input))?;

    let stored = SettingsRepo::upsert(&state.pool, auth.owner_id, &input).await?;
    tracing::info!(owner_id = auth.owner_id, "Settings replaced");

    Ok(Json(DataResponse {
        data: SettingsView::new(Some(stored)),
    }))
}
