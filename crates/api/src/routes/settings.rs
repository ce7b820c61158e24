//! Route definitions for the caller's settings.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET    /    -> get_settings
/// PUT    /    -> replace_settings
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(settings::get_settings).put(settings::replace_settings),
    )
}
