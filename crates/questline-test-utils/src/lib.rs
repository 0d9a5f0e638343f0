// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Questline integration tests.

pub mod harness;

pub use harness::{TestHarness, TestHarnessBuilder};
