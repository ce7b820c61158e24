//! Handlers for the `/inbox` resource.
//!
//! Every endpoint names its profile explicitly and checks ownership before
//! touching notifications.

use axum::extract::State;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use vitals_core::error::CoreError;
use vitals_core::types::{DbId, Timestamp};
use vitals_db::models::notification::Notification;
use vitals_db::repositories::NotificationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::handlers::ensure_profile_owned;
use crate::inbox::generate;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::{CountResponse, DataResponse, MarkedResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /inbox`.
#[derive(Debug, Deserialize)]
pub struct InboxQuery {
    pub profile_id: Option<DbId>,
    /// If `true`, return only unread notifications. Defaults to `false`.
    pub only_unread: Option<bool>,
    /// Defaults to 20, capped at 100.
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for `GET /inbox/unread-count`.
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub profile_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    pub profile_id: Option<DbId>,
    pub ids: Option<Vec<DbId>>,
}

#[derive(Debug, Deserialize)]
pub struct MarkAllReadRequest {
    pub profile_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub profile_id: Option<DbId>,
    /// Profile-local calendar day, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Evaluation instant; defaults to the current time.
    pub now: Option<Timestamp>,
}

fn require_profile_id(profile_id: Option<DbId>) -> AppResult<DbId> {
    profile_id.ok_or_else(|| AppError::Core(CoreError::Validation("profile_id is required".into())))
}

fn parse_date(raw: Option<&str>) -> AppResult<NaiveDate> {
    let raw = raw.ok_or_else(|| AppError::Core(CoreError::Validation("date is required".into())))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError::Core(CoreError::Validation(format!(
            "Invalid date '{raw}'. Expected YYYY-MM-DD"
        )))
    })
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// GET /v1/inbox
///
/// List a profile's notifications, newest first.
pub async fn list_inbox(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<InboxQuery>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let profile_id = require_profile_id(params.profile_id)?;
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;

    let page = PaginationParams {
        limit: params.limit,
        offset: params.offset,
    };
    let notifications = NotificationRepo::list_for_profile(
        &state.pool,
        profile_id,
        params.only_unread.unwrap_or(false),
        page.limit(),
        page.offset(),
    )
    .await?;

    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// GET /v1/inbox/unread-count
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ProfileQuery>,
) -> AppResult<Json<DataResponse<CountResponse>>> {
    let profile_id = require_profile_id(params.profile_id)?;
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;

    let count = NotificationRepo::unread_count(&state.pool, profile_id).await?;
    Ok(Json(DataResponse {
        data: CountResponse { count },
    }))
}

// ---------------------------------------------------------------------------
// Read state
// ---------------------------------------------------------------------------

/// POST /v1/inbox/mark-read
///
/// Mark the given ids read. Foreign or already-read ids are skipped and not
/// counted.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<MarkReadRequest>,
) -> AppResult<Json<DataResponse<MarkedResponse>>> {
    let profile_id = require_profile_id(input.profile_id)?;
    let ids = input
        .ids
        .filter(|ids| !ids.is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("ids must be a non-empty list".into())))?;
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;

    let marked = NotificationRepo::mark_read(&state.pool, profile_id, &ids).await?;
    Ok(Json(DataResponse {
        data: MarkedResponse { marked },
    }))
}

/// POST /v1/inbox/mark-all-read
pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<MarkAllReadRequest>,
) -> AppResult<Json<DataResponse<MarkedResponse>>> {
    let profile_id = require_profile_id(input.profile_id)?;
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;

    let marked = NotificationRepo::mark_all_read(&state.pool, profile_id).await?;
    Ok(Json(DataResponse {
        data: MarkedResponse { marked },
    }))
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// POST /v1/inbox/generate
///
/// Evaluate the profile for `date` at `now` and return only the
/// notifications this call created.
pub async fn generate_inbox(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateRequest>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let profile_id = require_profile_id(input.profile_id)?;
    let date = parse_date(input.date.as_deref())?;
    let now = input.now.unwrap_or_else(Utc::now);
    ensure_profile_owned(&state.pool, profile_id, auth.owner_id).await?;

    let outcome = generate::run(
        &state.pool,
        &state.config.inbox,
        auth.owner_id,
        profile_id,
        date,
        now,
    )
    .await?;

    Ok(Json(DataResponse {
        data: outcome.created,
    }))
}
