//! Route definitions for `/profiles` and the per-profile resources the
//! inbox reads.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{checkin, metric, profile, supplement, workout};
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// POST   /                                   -> create_profile
/// GET    /                                   -> list_profiles
/// GET    /{id}                               -> get_profile
///
/// POST   /{id}/checkins                      -> create_checkin
/// GET    /{id}/checkins?date=                -> list_checkins
///
/// PUT    /{id}/metrics/{date}                -> upsert_metrics
/// GET    /{id}/metrics/{date}                -> get_metrics
///
/// PUT    /{id}/workout-plan                  -> replace_plan
/// GET    /{id}/workout-plan                  -> get_plan
/// POST   /{id}/workout-completions           -> record_completion
///
/// PUT    /{id}/supplements                   -> replace_schedule
/// GET    /{id}/supplements                   -> list_schedule
/// POST   /{id}/supplements/{supplement_id}/taken -> mark_taken
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(profile::create_profile).get(profile::list_profiles),
        )
        .route("/{id}", get(profile::get_profile))
        .route(
            "/{id}/checkins",
            post(checkin::create_checkin).get(checkin::list_checkins),
        )
        .route(
            "/{id}/metrics/{date}",
            put(metric::upsert_metrics).get(metric::get_metrics),
        )
        .route(
            "/{id}/workout-plan",
            put(workout::replace_plan).get(workout::get_plan),
        )
        .route(
            "/{id}/workout-completions",
            post(workout::record_completion),
        )
        .route(
            "/{id}/supplements",
            put(supplement::replace_schedule).get(supplement::list_schedule),
        )
        .route(
            "/{id}/supplements/{supplement_id}/taken",
            post(supplement::mark_taken),
        )
}
