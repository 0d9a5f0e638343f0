// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests exercising the router end to end over the seeded
//! demo catalog, without binding a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use questline_gateway::{router, AppState};
use questline_store::{seed, MissionStore};

async fn seeded_app() -> Router {
    let store = Arc::new(MissionStore::new());
    seed::seed_demo(&store, "demoUser", "password123").await;
    router(AppState::new(store))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn mission_catalog_lists_three_missions_in_seed_order() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/api/missions").await;
    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["tree-of-trust", "magic-vault", "fab-seeds"]);
}

#[tokio::test]
async fn mission_lookup_by_code_and_not_found() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/missions/magic-vault").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Unseal the Magic Vault");
    assert_eq!(body["imageUrl"], "/vault-mission.jpg");

    let (status, body) = get(&app, "/api/missions/no-such-mission").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Mission not found");
}

#[tokio::test]
async fn mission_steps_sorted_and_unknown_mission_is_404() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/missions/tree-of-trust/steps").await;
    assert_eq!(status, StatusCode::OK);
    let steps = body.as_array().unwrap();
    assert_eq!(steps.len(), 15);
    let indices: Vec<i64> = steps.iter().map(|s| s["step"].as_i64().unwrap()).collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(indices, sorted);

    let (status, body) = get(&app, "/api/missions/no-such-mission/steps").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No steps found for this mission");
}

#[tokio::test]
async fn first_choice_leads_to_vaultbot_scan() {
    let app = seeded_app().await;

    // The opening narration offers exactly one choice.
    let (status, opening) = get(&app, "/api/missions/tree-of-trust/steps/0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(opening["character"], "genesis");
    let options = opening["options"].as_array().unwrap();
    assert_eq!(options.len(), 1);
    let next = options[0]["nextStep"].as_i64().unwrap();
    assert_eq!(next, 1);

    // Following it lands on VaultBot's sensor report.
    let (status, step) = get(&app, "/api/missions/tree-of-trust/steps/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(step["character"], "vaultbot");
    assert!(step["message"]
        .as_str()
        .unwrap()
        .starts_with("*beep boop* My sensors"));

    let (status, body) = get(&app, "/api/missions/tree-of-trust/steps/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Mission step not found");
}

#[tokio::test]
async fn register_fetch_and_conflict() {
    let app = seeded_app().await;

    let (status, user) = post(
        &app,
        "/api/users",
        json!({"username": "newkid", "password": "hunter2"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["username"], "newkid");
    assert_eq!(user["stars"], 0);
    let id = user["id"].as_i64().unwrap();

    let (status, fetched) = get(&app, &format!("/api/users/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["username"], "newkid");

    let (status, body) = post(
        &app,
        "/api/users",
        json!({"username": "newkid", "password": "other"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Username already exists");
}

#[tokio::test]
async fn register_rejects_incomplete_payload() {
    let app = seeded_app().await;
    let (status, body) = post(&app, "/api/users", json!({"username": "lonely"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid user data");
}

#[tokio::test]
async fn demo_user_endpoint_returns_seeded_account() {
    let app = seeded_app().await;
    let (status, user) = get(&app, "/api/demo/user").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["id"], 1);
    assert_eq!(user["username"], "demoUser");
}

#[tokio::test]
async fn unknown_user_and_progress_are_404() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/users/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (status, body) = get(&app, "/api/users/1/progress/no-such-mission").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Progress not found");
}

#[tokio::test]
async fn seeded_progress_is_zeroed_per_mission() {
    let app = seeded_app().await;
    let (status, records) = get(&app, "/api/users/1/progress").await;
    assert_eq!(status, StatusCode::OK);
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 3);
    for record in records {
        assert_eq!(record["progress"], 0);
        assert_eq!(record["stars"], 0);
        assert_eq!(record["completed"], false);
        assert_eq!(record["currentStep"], 0);
    }
}

#[tokio::test]
async fn progress_post_merges_fields_and_accrues_lifetime_stars() {
    let app = seeded_app().await;

    // Advance a few steps and bank one star.
    let (status, updated) = post(
        &app,
        "/api/users/1/progress/tree-of-trust",
        json!({"progress": 27, "stars": 1, "currentStep": 4}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["progress"], 27);
    assert_eq!(updated["stars"], 1);
    assert_eq!(updated["currentStep"], 4);
    assert_eq!(updated["completed"], false);

    // A partial post leaves unmentioned fields alone.
    let (_, updated) = post(
        &app,
        "/api/users/1/progress/tree-of-trust",
        json!({"currentStep": 6}),
    )
    .await;
    assert_eq!(updated["progress"], 27);
    assert_eq!(updated["stars"], 1);
    assert_eq!(updated["currentStep"], 6);

    // Lifetime total moved by the star delta, once.
    let (_, user) = get(&app, "/api/users/1").await;
    assert_eq!(user["stars"], 1);

    // Raising the per-mission count to 2 adds exactly one more.
    post(
        &app,
        "/api/users/1/progress/tree-of-trust",
        json!({"stars": 2}),
    )
    .await;
    let (_, user) = get(&app, "/api/users/1").await;
    assert_eq!(user["stars"], 2);

    // Re-posting the same count adds nothing.
    post(
        &app,
        "/api/users/1/progress/tree-of-trust",
        json!({"stars": 2}),
    )
    .await;
    let (_, user) = get(&app, "/api/users/1").await;
    assert_eq!(user["stars"], 2);
}

#[tokio::test]
async fn progress_post_creates_record_for_fresh_user() {
    let app = seeded_app().await;
    let (_, user) = post(
        &app,
        "/api/users",
        json!({"username": "fresh", "password": "pw"}),
    )
    .await;
    let id = user["id"].as_i64().unwrap();

    let (status, created) = post(
        &app,
        &format!("/api/users/{id}/progress/magic-vault"),
        json!({"progress": 33, "currentStep": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["userId"], id);
    assert_eq!(created["missionCode"], "magic-vault");
    assert_eq!(created["progress"], 33);
}

#[tokio::test]
async fn dispatch_reassigns_every_step_to_the_new_character() {
    let app = seeded_app().await;

    let (status, body) = post(
        &app,
        "/api/dispatch",
        json!({"missionCode": "magic-vault", "characterName": "sparkle"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Mission magic-vault has been assigned to sparkle"
    );
    assert_eq!(body["mission"]["code"], "magic-vault");
    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    for step in steps {
        assert_eq!(step["character"], "sparkle");
    }

    // Step content other than the speaker is untouched, and the rewrite
    // is visible through the normal steps endpoint.
    let (_, steps) = get(&app, "/api/missions/magic-vault/steps").await;
    let steps = steps.as_array().unwrap();
    assert_eq!(steps.len(), 3);
    for step in steps {
        assert_eq!(step["character"], "sparkle");
        assert!(!step["options"].as_array().unwrap().is_empty());
    }

    // Dispatching the same pair again changes nothing further: the second
    // response's step list is identical in content, ids included.
    let first = body["steps"].clone();
    let (status, body) = post(
        &app,
        "/api/dispatch",
        json!({"missionCode": "magic-vault", "characterName": "sparkle"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["steps"], first);
}

#[tokio::test]
async fn dispatch_leaves_already_matching_steps_untouched() {
    let app = seeded_app().await;

    // Seeded magic-vault steps 0 and 1 are voiced by vaultbot, step 2 by
    // genesis. Dispatching to vaultbot must replace only step 2.
    let (_, before) = get(&app, "/api/missions/magic-vault/steps").await;
    let before = before.as_array().unwrap().clone();
    assert_eq!(before[0]["character"], "vaultbot");
    assert_eq!(before[2]["character"], "genesis");

    let (status, body) = post(
        &app,
        "/api/dispatch",
        json!({"missionCode": "magic-vault", "characterName": "vaultbot"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let after = body["steps"].as_array().unwrap();

    // Matching steps keep their records, ids included.
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[1]);
    assert_eq!(after[2]["character"], "vaultbot");
    assert_ne!(after[2]["id"], before[2]["id"]);
}

#[tokio::test]
async fn dispatch_validates_input_and_mission_existence() {
    let app = seeded_app().await;

    let (status, body) = post(&app, "/api/dispatch", json!({"missionCode": "magic-vault"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Mission code and character name are required");

    let (status, body) = post(
        &app,
        "/api/dispatch",
        json!({"missionCode": "no-such-mission", "characterName": "sparkle"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Mission not found");
}
