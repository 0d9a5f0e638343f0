// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain record types shared across the Questline workspace.
//!
//! Wire field names are camelCase (`missionCode`, `imageUrl`, `nextStep`,
//! `awardStar`, `updatedAt`) to match the JSON contract the browser client
//! consumes. All records are plain value types; callers always receive
//! cloned snapshots from the store, never live handles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered player.
///
/// `stars` is the lifetime total earned across all missions. The password is
/// an opaque string preserved verbatim (this is a demo app, not an auth
/// system).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub stars: u32,
}

/// Fields required to register a user. The id and zeroed star total are
/// assigned by the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// A static content unit in the mission catalog, keyed externally by `code`.
///
/// Immutable after seeding; no user action mutates the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub image_url: String,
    pub icon: String,
}

/// Mission fields supplied at seed time; the sequential id is assigned by
/// the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMission {
    pub code: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub image_url: String,
    pub icon: String,
}

/// One choice offered at the end of a dialogue step.
///
/// `next_step` is the zero-based index of the step to transition to within
/// the same mission, or [`EXIT_MISSION`](crate::rules::EXIT_MISSION) meaning
/// "leave the mission". `id` is unique within the step only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOption {
    pub id: String,
    pub text: String,
    pub next_step: i32,
    /// Selecting this option earns one star for the mission.
    #[serde(default)]
    pub award_star: bool,
}

/// One dialogue beat, keyed by `(mission_code, step)`.
///
/// `step` is a zero-based sequence number unique within a mission.
/// `character` is a short speaker tag such as `"genesis"` or `"vaultbot"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionStep {
    pub id: i64,
    pub mission_code: String,
    pub step: i32,
    pub character: String,
    pub message: String,
    pub options: Vec<StepOption>,
}

/// Step fields supplied when authoring content.
///
/// `options` arrives as a raw JSON value and is normalized into
/// `Vec<StepOption>` exactly once at the store boundary via
/// [`rules::resolve_options`](crate::rules::resolve_options).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMissionStep {
    pub mission_code: String,
    pub step: i32,
    pub character: String,
    pub message: String,
    pub options: serde_json::Value,
}

/// Per-user progress for one mission, keyed by `(user_id, mission_code)`.
///
/// Created lazily on the first progress write. `stars` counts stars earned
/// within this mission (0-3); the user's lifetime total lives on [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub id: i64,
    pub user_id: i64,
    pub mission_code: String,
    /// Completion percentage, 0-100.
    pub progress: u8,
    pub stars: u8,
    pub completed: bool,
    pub current_step: i32,
    pub updated_at: DateTime<Utc>,
}

/// Partial progress update; only fields explicitly provided are merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub stars: Option<u8>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub current_step: Option<i32>,
}
