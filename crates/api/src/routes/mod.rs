pub mod health;
pub mod inbox;
pub mod profile;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// ```text
/// /inbox                       list, unread-count, mark-read, mark-all-read, generate
/// /profiles                    create, list
/// /profiles/{id}               get
/// /profiles/{id}/checkins      create, list by date
/// /profiles/{id}/metrics/{date} sync, get
/// /profiles/{id}/workout-plan  replace, get
/// /profiles/{id}/workout-completions  record
/// /profiles/{id}/supplements   replace, list, mark taken
/// /settings                    get, replace
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/inbox", inbox::router())
        .nest("/profiles", profile::router())
        .nest("/settings", settings::router())
}
