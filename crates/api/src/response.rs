//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Payload for endpoints that report how many rows they touched.
#[derive(Debug, Serialize)]
pub struct MarkedResponse {
    pub marked: u64,
}

/// Payload for counting endpoints.
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}
