//! End-to-end tests for the `/v1/inbox` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_profile, get_auth, post_json, put_json, token_for};
use serde_json::json;
use sqlx::PgPool;

const OWNER: i64 = 7;
const DATE: &str = "2024-01-15";

fn kinds(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["kind"].as_str().unwrap().to_string())
        .collect()
}

async fn generate(app: axum::Router, profile_id: i64, now: &str) -> serde_json::Value {
    let response = post_json(
        app,
        "/v1/inbox/generate",
        &token_for(OWNER),
        json!({ "profile_id": profile_id, "date": DATE, "now": now }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

async fn sync_metrics(app: axum::Router, profile_id: i64, body: serde_json::Value) {
    let response = put_json(
        app,
        &format!("/v1/profiles/{profile_id}/metrics/{DATE}"),
        &token_for(OWNER),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

async fn unread(app: axum::Router, profile_id: i64) -> i64 {
    let response = get_auth(
        app,
        &format!("/v1/inbox/unread-count?profile_id={profile_id}"),
        &token_for(OWNER),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["count"].as_i64().unwrap()
}

/// Five overdue signals at 21:30 UTC with default settings.
async fn seed_five(app: &axum::Router, profile_id: i64) {
    sync_metrics(
        app.clone(),
        profile_id,
        json!({ "steps": 100, "sleep_minutes": 100, "active_energy_kcal": 10.0 }),
    )
    .await;
    let created = generate(app.clone(), profile_id, "2024-01-15T21:30:00Z").await;
    assert_eq!(created["data"].as_array().unwrap().len(), 5);
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn generate_creates_then_is_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool);
    let profile_id = create_profile(app.clone(), OWNER).await;
    sync_metrics(app.clone(), profile_id, json!({ "sleep_minutes": 300 })).await;

    let first = generate(app.clone(), profile_id, "2024-01-15T10:00:00Z").await;
    assert_eq!(kinds(&first), vec!["low_sleep", "checkin_morning"]);
    assert_eq!(first["data"][0]["severity"], "warning");
    assert_eq!(first["data"][1]["severity"], "info");
    assert!(first["data"][0]["read_at"].is_null());
    assert!(first["data"][0].get("dedup_key").is_none());

    let second = generate(app.clone(), profile_id, "2024-01-15T10:00:00Z").await;
    assert!(second["data"].as_array().unwrap().is_empty());

    assert_eq!(unread(app, profile_id).await, 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn quiet_hours_and_cap_scenario(pool: PgPool) {
    let app = common::build_test_app(pool);
    let profile_id = create_profile(app.clone(), OWNER).await;

    let response = put_json(
        app.clone(),
        "/v1/settings",
        &token_for(OWNER),
        json!({
            "time_zone": "America/New_York",
            "quiet_start_minute": 1320,
            "quiet_end_minute": 420,
            "notifications_max_per_day": 2,
            "morning_checkin_minute": 360
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    sync_metrics(app.clone(), profile_id, json!({ "sleep_minutes": 300 })).await;

    // 06:30 in New York: quiet hours, only the warning passes.
    let at_0630 = generate(app.clone(), profile_id, "2024-01-15T11:30:00Z").await;
    assert_eq!(kinds(&at_0630), vec!["low_sleep"]);

    // 08:00: the checkin reminder is released.
    let at_0800 = generate(app.clone(), profile_id, "2024-01-15T13:00:00Z").await;
    assert_eq!(kinds(&at_0800), vec!["checkin_morning"]);

    // 10:00: a due supplement is capped.
    let response = put_json(
        app.clone(),
        &format!("/v1/profiles/{profile_id}/supplements"),
        &token_for(OWNER),
        json!({ "entries": [{ "name": "Magnesium" }] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let at_1000 = generate(app.clone(), profile_id, "2024-01-15T15:00:00Z").await;
    assert!(at_1000["data"].as_array().unwrap().is_empty());

    assert_eq!(unread(app, profile_id).await, 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn workout_reminder_stops_once_done(pool: PgPool) {
    let app = common::build_test_app(pool);
    let profile_id = create_profile(app.clone(), OWNER).await;
    let token = token_for(OWNER);

    let response = put_json(
        app.clone(),
        &format!("/v1/profiles/{profile_id}/workout-plan"),
        &token,
        json!({
            "name": "Evening strength",
            "items": [{
                "kind": "strength",
                "target_minute": 1080,
                "days_mask": 127,
                "duration_minutes": 60
            }]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let item_id = body_json(response).await["data"]["items"][0]["id"]
        .as_i64()
        .unwrap();

    let response = post_json(
        app.clone(),
        &format!("/v1/profiles/{profile_id}/checkins"),
        &token,
        json!({ "checkin_date": DATE, "kind": "morning" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        app.clone(),
        &format!("/v1/profiles/{profile_id}/workout-completions"),
        &token,
        json!({ "completion_date": DATE, "plan_item_id": item_id, "status": "done" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = generate(app.clone(), profile_id, "2024-01-15T17:45:00Z").await;
    assert!(created["data"].as_array().unwrap().is_empty());

    // A skip does not silence the reminder.
    post_json(
        app.clone(),
        &format!("/v1/profiles/{profile_id}/workout-completions"),
        &token,
        json!({ "completion_date": DATE, "plan_item_id": item_id, "status": "skipped" }),
    )
    .await;
    let created = generate(app, profile_id, "2024-01-15T17:45:00Z").await;
    assert_eq!(kinds(&created), vec!["workout"]);
    assert_eq!(created["data"][0]["discriminator"], item_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn generate_validates_input_before_work(pool: PgPool) {
    let app = common::build_test_app(pool);
    let profile_id = create_profile(app.clone(), OWNER).await;
    let token = token_for(OWNER);

    for body in [
        json!({ "date": DATE }),
        json!({ "profile_id": profile_id }),
        json!({ "profile_id": profile_id, "date": "2024-13-40" }),
        json!({ "profile_id": profile_id, "date": "15/01/2024" }),
    ] {
        let response = post_json(app.clone(), "/v1/inbox/generate", &token, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    assert_eq!(unread(app, profile_id).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_fields_are_rejected_as_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let profile_id = create_profile(app.clone(), OWNER).await;
    let token = token_for(OWNER);

    for body in [
        json!({ "profile_id": "abc", "date": DATE }),
        json!({ "profile_id": profile_id, "date": DATE, "now": "not-a-time" }),
        json!({ "profile_id": profile_id, "ids": "1,2" }),
    ] {
        let uri = if body.get("ids").is_some() {
            "/v1/inbox/mark-read"
        } else {
            "/v1/inbox/generate"
        };
        let response = post_json(app.clone(), uri, &token, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json["error"].is_string());
    }

    let response = get_auth(app.clone(), "/v1/inbox?profile_id=abc", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    assert_eq!(unread(app, profile_id).await, 0);
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn foreign_profile_looks_missing(pool: PgPool) {
    let app = common::build_test_app(pool);
    let profile_id = create_profile(app.clone(), OWNER).await;
    let stranger = token_for(OWNER + 1);

    let foreign = get_auth(
        app.clone(),
        &format!("/v1/inbox?profile_id={profile_id}"),
        &stranger,
    )
    .await;
    let missing = get_auth(app.clone(), "/v1/inbox?profile_id=999999", &stranger).await;
    assert_eq!(foreign.status(), StatusCode::NOT_FOUND);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(foreign).await["code"], "NOT_FOUND");

    let response = post_json(
        app.clone(),
        "/v1/inbox/generate",
        &stranger,
        json!({ "profile_id": profile_id, "date": DATE }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json(
        app,
        "/v1/inbox/mark-all-read",
        &stranger,
        json!({ "profile_id": profile_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Read state
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn mark_all_read_scenario(pool: PgPool) {
    let app = common::build_test_app(pool);
    let profile_id = create_profile(app.clone(), OWNER).await;
    seed_five(&app, profile_id).await;
    assert_eq!(unread(app.clone(), profile_id).await, 5);

    let response = post_json(
        app.clone(),
        "/v1/inbox/mark-all-read",
        &token_for(OWNER),
        json!({ "profile_id": profile_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["marked"], 5);

    assert_eq!(unread(app, profile_id).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mark_read_counts_only_changed_rows(pool: PgPool) {
    let app = common::build_test_app(pool);
    let profile_id = create_profile(app.clone(), OWNER).await;
    seed_five(&app, profile_id).await;
    let token = token_for(OWNER);

    let listed = body_json(
        get_auth(
            app.clone(),
            &format!("/v1/inbox?profile_id={profile_id}&limit=2"),
            &token,
        )
        .await,
    )
    .await;
    let ids: Vec<i64> = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);

    let response = post_json(
        app.clone(),
        "/v1/inbox/mark-read",
        &token,
        json!({ "profile_id": profile_id, "ids": [ids[0], 999999] }),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["marked"], 1);

    let response = post_json(
        app.clone(),
        "/v1/inbox/mark-read",
        &token,
        json!({ "profile_id": profile_id, "ids": ids }),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["marked"], 1);

    let unread_only = body_json(
        get_auth(
            app.clone(),
            &format!("/v1/inbox?profile_id={profile_id}&only_unread=true"),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(unread_only["data"].as_array().unwrap().len(), 3);

    let response = post_json(
        app,
        "/v1/inbox/mark-read",
        &token,
        json!({ "profile_id": profile_id, "ids": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_requires_profile_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/v1/inbox", &token_for(OWNER)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
