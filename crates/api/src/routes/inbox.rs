//! Route definitions for the `/inbox` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::inbox;
use crate::state::AppState;

/// Routes mounted at `/inbox`.
///
/// ```text
/// GET    /                -> list_inbox        ?profile_id=&only_unread=&limit=&offset=
/// GET    /unread-count    -> unread_count      ?profile_id=
/// POST   /mark-read       -> mark_read         {profile_id, ids}
/// POST   /mark-all-read   -> mark_all_read     {profile_id}
/// POST   /generate        -> generate_inbox    {profile_id, date, now?}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inbox::list_inbox))
        .route("/unread-count", get(inbox::unread_count))
        .route("/mark-read", post(inbox::mark_read))
        .route("/mark-all-read", post(inbox::mark_all_read))
        .route("/generate", post(inbox::generate_inbox))
}
