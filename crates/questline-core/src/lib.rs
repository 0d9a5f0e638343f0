// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Questline mission service.
//!
//! This crate provides the domain record types (users, missions, dialogue
//! steps, progress), the shared error type, and the pure progression rules
//! that govern how a player advances through a mission's branching dialogue.

pub mod error;
pub mod rules;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::QuestlineError;
pub use types::{
    Mission, MissionStep, NewMission, NewMissionStep, NewUser, ProgressUpdate, StepOption, User,
    UserProgress,
};
