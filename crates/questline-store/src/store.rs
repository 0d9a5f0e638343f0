// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory entity store.
//!
//! All operations return cloned snapshots, never live-mutable handles, and
//! report "not found" as `None` rather than an error. Operations that
//! overwrite on duplicate keys are named `upsert_*` / `reset_*` to make
//! that contract explicit.
//!
//! A single `RwLock` guards the whole record set. Axum serves requests from
//! multiple worker threads, so the read-modify-write paths (progress update
//! with its lifetime-star side effect, create-if-absent) must run under one
//! write lock to avoid lost updates. Individual lookups take a read lock.

use std::collections::HashMap;

use chrono::Utc;
use questline_core::rules;
use questline_core::types::{
    Mission, MissionStep, NewMission, NewMissionStep, NewUser, ProgressUpdate, User, UserProgress,
};
use tokio::sync::RwLock;

/// Authoritative in-process holder of users, missions, steps, and progress.
#[derive(Debug, Default)]
pub struct MissionStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    users: HashMap<i64, User>,
    /// Missions in insertion order; the catalog listing relies on it.
    missions: Vec<Mission>,
    progress: HashMap<(i64, String), UserProgress>,
    steps: HashMap<(String, i32), MissionStep>,
    next_user_id: i64,
    next_mission_id: i64,
    next_progress_id: i64,
    next_step_id: i64,
}

impl Default for StoreInner {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            missions: Vec::new(),
            progress: HashMap::new(),
            steps: HashMap::new(),
            next_user_id: 1,
            next_mission_id: 1,
            next_progress_id: 1,
            next_step_id: 1,
        }
    }
}

impl MissionStore {
    /// Create an empty store. Call [`seed::seed_demo`](crate::seed::seed_demo)
    /// to load the demo catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- User operations ----

    /// Get a user by id.
    pub async fn get_user(&self, id: i64) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    /// Get a user by username (linear scan; the user set is tiny).
    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Create a user with the next sequential id and a zero star total.
    ///
    /// Username uniqueness is the caller's responsibility (checked via
    /// [`get_user_by_username`](Self::get_user_by_username) before insert).
    pub async fn create_user(&self, new: NewUser) -> User {
        let mut inner = self.inner.write().await;
        let id = inner.next_user_id;
        inner.next_user_id += 1;
        let user = User {
            id,
            username: new.username,
            password: new.password,
            stars: 0,
        };
        inner.users.insert(id, user.clone());
        user
    }

    /// Replace a user's lifetime star total. `None` if the user does not exist.
    pub async fn update_user_stars(&self, id: i64, stars: u32) -> Option<User> {
        let mut inner = self.inner.write().await;
        let user = inner.users.get_mut(&id)?;
        user.stars = stars;
        Some(user.clone())
    }

    // ---- Mission operations ----

    /// Get a mission by its stable external code.
    pub async fn get_mission(&self, code: &str) -> Option<Mission> {
        self.inner
            .read()
            .await
            .missions
            .iter()
            .find(|m| m.code == code)
            .cloned()
    }

    /// List the full catalog in insertion order.
    pub async fn all_missions(&self) -> Vec<Mission> {
        self.inner.read().await.missions.clone()
    }

    /// Insert a mission, silently replacing any existing mission with the
    /// same code (the replacement keeps its catalog position).
    pub async fn upsert_mission(&self, new: NewMission) -> Mission {
        let mut inner = self.inner.write().await;
        let id = inner.next_mission_id;
        inner.next_mission_id += 1;
        let mission = Mission {
            id,
            code: new.code,
            title: new.title,
            description: new.description,
            difficulty: new.difficulty,
            image_url: new.image_url,
            icon: new.icon,
        };
        match inner.missions.iter_mut().find(|m| m.code == mission.code) {
            Some(slot) => *slot = mission.clone(),
            None => inner.missions.push(mission.clone()),
        }
        mission
    }

    // ---- Progress operations ----

    /// Get one progress record.
    pub async fn get_user_progress(&self, user_id: i64, mission_code: &str) -> Option<UserProgress> {
        self.inner
            .read()
            .await
            .progress
            .get(&(user_id, mission_code.to_string()))
            .cloned()
    }

    /// All progress records for a user.
    pub async fn all_user_progress(&self, user_id: i64) -> Vec<UserProgress> {
        self.inner
            .read()
            .await
            .progress
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Create a progress record in the initial zero state, overwriting any
    /// prior record for the pair (this resets progress; it is not an
    /// idempotent no-op).
    pub async fn reset_user_progress(&self, user_id: i64, mission_code: &str) -> UserProgress {
        let mut inner = self.inner.write().await;
        inner.reset_user_progress(user_id, mission_code)
    }

    /// Merge only the provided fields into an existing record and stamp
    /// `updated_at`. `None` if no record exists for the pair.
    pub async fn update_user_progress(
        &self,
        user_id: i64,
        mission_code: &str,
        update: ProgressUpdate,
    ) -> Option<UserProgress> {
        let mut inner = self.inner.write().await;
        inner.merge_progress(user_id, mission_code, &update)
    }

    /// The full progress-write flow behind `POST /api/users/:id/progress/:code`.
    ///
    /// Creates the record if absent, merges the update, and when the
    /// per-mission star count increases, adds the same delta to the owning
    /// user's lifetime total. Runs entirely under one write lock so
    /// concurrent posts cannot lose star increments.
    pub async fn apply_progress_update(
        &self,
        user_id: i64,
        mission_code: &str,
        update: ProgressUpdate,
    ) -> UserProgress {
        let mut inner = self.inner.write().await;

        let existing = match inner.progress.get(&(user_id, mission_code.to_string())) {
            Some(record) => record.clone(),
            None => inner.reset_user_progress(user_id, mission_code),
        };
        let prev_stars = existing.stars;

        let updated = inner
            .merge_progress(user_id, mission_code, &update)
            .unwrap_or(existing);

        // Lifetime total moves by the per-mission delta, only upward. The
        // star total itself is caller-supplied; see the rules module for the
        // server-side accrual computation.
        if let Some(stars) = update.stars
            && stars > prev_stars
            && let Some(user) = inner.users.get_mut(&user_id)
        {
            user.stars += u32::from(stars - prev_stars);
        }

        updated
    }

    // ---- Mission step operations ----

    /// Get one step by `(mission_code, step)`.
    pub async fn get_mission_step(&self, mission_code: &str, step: i32) -> Option<MissionStep> {
        self.inner
            .read()
            .await
            .steps
            .get(&(mission_code.to_string(), step))
            .cloned()
    }

    /// All steps for a mission, sorted ascending by step index. Consumers
    /// rely on this ordering for sequential playback.
    pub async fn mission_steps(&self, mission_code: &str) -> Vec<MissionStep> {
        let inner = self.inner.read().await;
        let mut steps: Vec<MissionStep> = inner
            .steps
            .values()
            .filter(|s| s.mission_code == mission_code)
            .cloned()
            .collect();
        steps.sort_by_key(|s| s.step);
        steps
    }

    /// Insert a step, silently replacing any existing step with the same
    /// `(mission_code, step)` key. The dispatch operation relies on this
    /// collision behavior to reassign a mission's speaker.
    ///
    /// The raw `options` value is normalized into typed options here --
    /// exactly one decode, at the store boundary.
    pub async fn upsert_mission_step(&self, new: NewMissionStep) -> MissionStep {
        let options = rules::resolve_options(&new.options);
        let mut inner = self.inner.write().await;
        let id = inner.next_step_id;
        inner.next_step_id += 1;
        let step = MissionStep {
            id,
            mission_code: new.mission_code,
            step: new.step,
            character: new.character,
            message: new.message,
            options,
        };
        inner
            .steps
            .insert((step.mission_code.clone(), step.step), step.clone());
        step
    }
}

impl StoreInner {
    fn reset_user_progress(&mut self, user_id: i64, mission_code: &str) -> UserProgress {
        let id = self.next_progress_id;
        self.next_progress_id += 1;
        let record = UserProgress {
            id,
            user_id,
            mission_code: mission_code.to_string(),
            progress: 0,
            stars: 0,
            completed: false,
            current_step: 0,
            updated_at: Utc::now(),
        };
        self.progress
            .insert((user_id, mission_code.to_string()), record.clone());
        record
    }

    fn merge_progress(
        &mut self,
        user_id: i64,
        mission_code: &str,
        update: &ProgressUpdate,
    ) -> Option<UserProgress> {
        let record = self
            .progress
            .get_mut(&(user_id, mission_code.to_string()))?;
        if let Some(progress) = update.progress {
            record.progress = progress;
        }
        if let Some(stars) = update.stars {
            record.stars = stars;
        }
        if let Some(completed) = update.completed {
            record.completed = completed;
        }
        if let Some(current_step) = update.current_step {
            record.current_step = current_step;
        }
        record.updated_at = Utc::now();
        Some(record.clone())
    }
}
