// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure progression rules for mission dialogue playback.
//!
//! Everything in this module is a side-effect-free computation over step and
//! progress data. The store and gateway call into these functions; nothing
//! here touches the store.

use serde_json::Value;

use crate::types::{MissionStep, StepOption};

/// Sentinel `next_step` value meaning "leave the mission, return to the
/// mission list". No step lookup and no progress mutation happen for it.
pub const EXIT_MISSION: i32 = -1;

/// Maximum stars earnable within a single mission (three ingredients or
/// puzzles per mission in the seed content).
pub const MAX_MISSION_STARS: u8 = 3;

/// Result of resolving a chosen option against a mission's step list.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition<'a> {
    /// Advance to this step.
    Advance(&'a MissionStep),
    /// The option carried the exit sentinel; leave the mission.
    Exit,
    /// The option references a step index that does not exist. This is a
    /// content-authoring gap; callers drop the transition silently.
    Missing,
}

/// Compute the completion percentage for a mission.
///
/// Returns `round(current_step / total_steps * 100)` clamped to `[0, 100]`,
/// and `0` when `total_steps` is zero (guards division by zero) or
/// `current_step` is not positive. Monotonically non-decreasing in
/// `current_step` for a fixed `total_steps`.
pub fn percent_complete(current_step: i32, total_steps: usize) -> u8 {
    if total_steps == 0 || current_step <= 0 {
        return 0;
    }
    let pct = (f64::from(current_step) / total_steps as f64 * 100.0).round();
    pct.min(100.0) as u8
}

/// Normalize a step's raw `options` value into a typed option list.
///
/// The canonical on-the-wire representation is a structured JSON array.
/// Legacy content may still carry a string-encoded array, which gets exactly
/// one decode pass. Anything else (or a failed decode) yields an empty list
/// with a warning; malformed content is never surfaced to the caller.
pub fn resolve_options(raw: &Value) -> Vec<StepOption> {
    let decoded = match raw {
        Value::Array(_) => serde_json::from_value(raw.clone()),
        Value::String(encoded) => serde_json::from_str(encoded),
        other => {
            tracing::warn!(kind = %value_kind(other), "step options have unsupported shape");
            return Vec::new();
        }
    };
    match decoded {
        Ok(options) => options,
        Err(e) => {
            tracing::warn!(error = %e, "failed to decode step options, treating as empty");
            Vec::new()
        }
    }
}

/// Resolve the step a chosen option transitions to.
///
/// The sentinel [`EXIT_MISSION`] yields [`Transition::Exit`] without any
/// lookup. A `next_step` matching no step in the list yields
/// [`Transition::Missing`] (broken link in authored content).
pub fn resolve_transition<'a>(steps: &'a [MissionStep], option: &StepOption) -> Transition<'a> {
    if option.next_step == EXIT_MISSION {
        return Transition::Exit;
    }
    match steps.iter().find(|s| s.step == option.next_step) {
        Some(step) => Transition::Advance(step),
        None => Transition::Missing,
    }
}

/// Star count for a mission's progress after choosing an option.
///
/// Awards exactly one star when the option carries `award_star`, clamped at
/// [`MAX_MISSION_STARS`].
pub fn stars_after_choice(current: u8, option: &StepOption) -> u8 {
    if option.award_star {
        (current + 1).min(MAX_MISSION_STARS)
    } else {
        current
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn step(index: i32, character: &str, options: Vec<StepOption>) -> MissionStep {
        MissionStep {
            id: i64::from(index) + 1,
            mission_code: "tree-of-trust".to_string(),
            step: index,
            character: character.to_string(),
            message: format!("message {index}"),
            options,
        }
    }

    fn option_to(next_step: i32) -> StepOption {
        StepOption {
            id: "1".to_string(),
            text: "go".to_string(),
            next_step,
            award_star: false,
        }
    }

    #[test]
    fn percent_complete_zero_total_is_zero() {
        assert_eq!(percent_complete(0, 0), 0);
        assert_eq!(percent_complete(7, 0), 0);
        assert_eq!(percent_complete(-3, 0), 0);
    }

    #[test]
    fn percent_complete_matches_seed_scenario() {
        // Step 1 of 15 seeded tree-of-trust steps.
        assert_eq!(percent_complete(1, 15), 7);
        assert_eq!(percent_complete(14, 15), 93);
        assert_eq!(percent_complete(15, 15), 100);
    }

    #[test]
    fn percent_complete_clamps_past_total() {
        assert_eq!(percent_complete(30, 15), 100);
    }

    proptest! {
        #[test]
        fn percent_complete_is_bounded(current in -100i32..1000, total in 1usize..500) {
            let pct = percent_complete(current, total);
            prop_assert!(pct <= 100);
        }

        #[test]
        fn percent_complete_is_monotonic(current in 0i32..500, total in 1usize..500) {
            prop_assert!(percent_complete(current, total) <= percent_complete(current + 1, total));
        }
    }

    #[test]
    fn resolve_options_accepts_native_array() {
        let raw = json!([{"id": "1", "text": "hi", "nextStep": 2, "awardStar": true}]);
        let options = resolve_options(&raw);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].next_step, 2);
        assert!(options[0].award_star);
    }

    #[test]
    fn resolve_options_decodes_string_form_once() {
        let raw = json!(r#"[{"id": "1", "text": "hi", "nextStep": 1}]"#);
        let options = resolve_options(&raw);
        assert_eq!(options.len(), 1);
        assert!(!options[0].award_star);
    }

    #[test]
    fn resolve_options_malformed_yields_empty() {
        assert!(resolve_options(&json!("not json at all")).is_empty());
        assert!(resolve_options(&json!({"id": "1"})).is_empty());
        assert!(resolve_options(&json!(42)).is_empty());
    }

    #[test]
    fn transition_exit_sentinel_skips_lookup() {
        // Empty step list: an exit option must not be reported as Missing.
        let steps: Vec<MissionStep> = Vec::new();
        assert_eq!(
            resolve_transition(&steps, &option_to(EXIT_MISSION)),
            Transition::Exit
        );
    }

    #[test]
    fn transition_advances_to_matching_step_index() {
        let steps = vec![step(0, "genesis", vec![]), step(1, "vaultbot", vec![])];
        match resolve_transition(&steps, &option_to(1)) {
            Transition::Advance(next) => {
                assert_eq!(next.step, 1);
                assert_eq!(next.character, "vaultbot");
            }
            other => panic!("expected Advance, got {other:?}"),
        }
    }

    #[test]
    fn transition_to_unknown_index_is_missing() {
        let steps = vec![step(0, "genesis", vec![])];
        assert_eq!(resolve_transition(&steps, &option_to(9)), Transition::Missing);
    }

    #[test]
    fn stars_increment_once_and_clamp() {
        let starred = StepOption {
            award_star: true,
            ..option_to(3)
        };
        assert_eq!(stars_after_choice(0, &starred), 1);
        assert_eq!(stars_after_choice(2, &starred), 3);
        assert_eq!(stars_after_choice(3, &starred), 3);
        assert_eq!(stars_after_choice(1, &option_to(3)), 1);
    }
}
