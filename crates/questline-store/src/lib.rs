// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory entity store for the Questline mission service.
//!
//! [`MissionStore`] is the authoritative holder of all records and the
//! single source of truth for identifier assignment. It is constructed once
//! and injected into the gateway as an `Arc` -- never a module-level global.
//! State is process-lifetime only; restarts start from the seed catalog.

pub mod seed;
pub mod store;

pub use store::MissionStore;
