// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demo seed catalog: one demo user, three missions, and their dialogue
//! steps. Loaded once at process start; the store holds nothing durable
//! across restarts.

use questline_core::types::{NewMission, NewMissionStep, NewUser, User};
use serde_json::{json, Value};
use tracing::info;

use crate::store::MissionStore;

/// Seed the demo user, the mission catalog, a zeroed progress record per
/// mission for the demo user, and all authored dialogue steps.
///
/// Returns the demo user (always id 1 on a fresh store; `GET /api/demo/user`
/// relies on that).
pub async fn seed_demo(store: &MissionStore, username: &str, password: &str) -> User {
    let demo_user = store
        .create_user(NewUser {
            username: username.to_string(),
            password: password.to_string(),
        })
        .await;

    for mission in mission_catalog() {
        let code = mission.code.clone();
        store.upsert_mission(mission).await;
        store.reset_user_progress(demo_user.id, &code).await;
    }

    let steps = tree_of_trust_steps()
        .into_iter()
        .chain(magic_vault_steps())
        .chain(fab_seeds_steps());
    let mut count = 0usize;
    for step in steps {
        store.upsert_mission_step(step).await;
        count += 1;
    }

    info!(
        user = demo_user.username.as_str(),
        missions = 3,
        steps = count,
        "demo catalog seeded"
    );
    demo_user
}

fn mission_catalog() -> Vec<NewMission> {
    vec![
        NewMission {
            code: "tree-of-trust".to_string(),
            title: "Fix the Tree of Trust".to_string(),
            description: "Help Genesis repair the magical Tree of Trust and restore balance."
                .to_string(),
            difficulty: "Beginner Mission".to_string(),
            image_url: "/tree-mission.jpg".to_string(),
            icon: "fa-tree".to_string(),
        },
        NewMission {
            code: "magic-vault".to_string(),
            title: "Unseal the Magic Vault".to_string(),
            description: "Join VaultBot on a quest to unlock the ancient vault of knowledge."
                .to_string(),
            difficulty: "Explorer Mission".to_string(),
            image_url: "/vault-mission.jpg".to_string(),
            icon: "fa-vault".to_string(),
        },
        NewMission {
            code: "fab-seeds".to_string(),
            title: "Plant the Fab Seeds".to_string(),
            description: "Help XO~Dy plant magical seeds that grow into amazing ideas!".to_string(),
            difficulty: "Creator Mission".to_string(),
            image_url: "/seeds-mission.jpg".to_string(),
            icon: "fa-seedling".to_string(),
        },
    ]
}

fn step(mission_code: &str, step: i32, character: &str, message: &str, options: Value) -> NewMissionStep {
    NewMissionStep {
        mission_code: mission_code.to_string(),
        step,
        character: character.to_string(),
        message: message.to_string(),
        options,
    }
}

fn tree_of_trust_steps() -> Vec<NewMissionStep> {
    const CODE: &str = "tree-of-trust";
    vec![
        step(
            CODE,
            0,
            "genesis",
            "Hi there! I'm so excited you're here to help with the Tree of Trust. It's been looking a bit droopy lately.",
            json!([{"id": "1", "text": "Hi Genesis! What can I do to help?", "nextStep": 1}]),
        ),
        step(
            CODE,
            1,
            "vaultbot",
            "*beep boop* My sensors indicate the Tree needs three special ingredients to regain its strength! *whirr*",
            json!([{"id": "1", "text": "What are these ingredients?", "nextStep": 2}]),
        ),
        step(
            CODE,
            2,
            "genesis",
            "First, we need to find some Sparkly Water. It helps the tree's roots grow strong! Can you help us look?",
            json!([
                {"id": "1", "text": "Look behind the waterfall for Sparkly Water", "nextStep": 3, "awardStar": true},
                {"id": "2", "text": "Ask VaultBot for a clue about the water", "nextStep": 4},
                {"id": "3", "text": "Check the ancient well in the garden", "nextStep": 5}
            ]),
        ),
        step(
            CODE,
            3,
            "genesis",
            "You found it! The Sparkly Water was hiding behind the waterfall all along. That's one ingredient down, two to go!",
            json!([{"id": "1", "text": "What do we need next?", "nextStep": 6}]),
        ),
        step(
            CODE,
            4,
            "vaultbot",
            "*whirr click* My database suggests checking behind the large waterfall. Natural filtration creates the sparkly effect! *beep*",
            json!([{"id": "1", "text": "Thanks VaultBot, I will check there", "nextStep": 3}]),
        ),
        step(
            CODE,
            5,
            "genesis",
            "The well is dry! I don't think we'll find Sparkly Water here. Let's try somewhere else.",
            json!([
                {"id": "1", "text": "Check behind the waterfall instead", "nextStep": 3},
                {"id": "2", "text": "Ask VaultBot for help", "nextStep": 4}
            ]),
        ),
        step(
            CODE,
            6,
            "genesis",
            "Next, we need to find some Glowing Moss. It helps the Tree's branches grow strong and healthy!",
            json!([
                {"id": "1", "text": "Look in the dark cave", "nextStep": 7, "awardStar": true},
                {"id": "2", "text": "Search in the sunny meadow", "nextStep": 8},
                {"id": "3", "text": "Climb up to the mountain peak", "nextStep": 9}
            ]),
        ),
        step(
            CODE,
            7,
            "genesis",
            "Perfect! The cave walls are covered in beautiful Glowing Moss. Let's gather some for our tree!",
            json!([{"id": "1", "text": "What is the last ingredient?", "nextStep": 10}]),
        ),
        step(
            CODE,
            8,
            "vaultbot",
            "*scanning* No moss detected in this location. Moss prefers dark, damp environments. *beep* Try somewhere with less sunlight!",
            json!([{"id": "1", "text": "Let me check the cave instead", "nextStep": 7}]),
        ),
        step(
            CODE,
            9,
            "genesis",
            "It's too bright and dry up here for moss to grow. We should look somewhere darker and damper.",
            json!([{"id": "1", "text": "Let me check the cave instead", "nextStep": 7}]),
        ),
        step(
            CODE,
            10,
            "vaultbot",
            "*processing* Final ingredient required: Rainbow Dewdrops. They provide essential nutrients for magical tree growth. *click whirr*",
            json!([
                {"id": "1", "text": "Look for dewdrops after the rain", "nextStep": 11, "awardStar": true},
                {"id": "2", "text": "Search in the butterfly garden", "nextStep": 12},
                {"id": "3", "text": "Check near the rainbow end", "nextStep": 13}
            ]),
        ),
        step(
            CODE,
            11,
            "genesis",
            "Wonderful! These morning dewdrops caught in spider webs have captured the rainbow's light perfectly!",
            json!([{"id": "1", "text": "Lets bring everything to the Tree of Trust!", "nextStep": 14}]),
        ),
        step(
            CODE,
            12,
            "genesis",
            "The butterflies are beautiful, but I don't see any Rainbow Dewdrops here. Let's keep looking!",
            json!([{"id": "1", "text": "Look for dewdrops after the rain", "nextStep": 11}]),
        ),
        step(
            CODE,
            13,
            "vaultbot",
            "*alert* Rainbow end located in inaccessible terrain. Alternate source of Rainbow Dewdrops recommended. *beep*",
            json!([{"id": "1", "text": "Look for dewdrops after the rain", "nextStep": 11}]),
        ),
        step(
            CODE,
            14,
            "genesis",
            "You did it! With the Sparkly Water, Glowing Moss, and Rainbow Dewdrops, the Tree of Trust is healthy again! Thank you for your help!",
            json!([{"id": "1", "text": "Return to Mission Select", "nextStep": -1}]),
        ),
    ]
}

fn magic_vault_steps() -> Vec<NewMissionStep> {
    const CODE: &str = "magic-vault";
    vec![
        step(
            CODE,
            0,
            "vaultbot",
            "*beep boop* Welcome to the Ancient Vault, young explorer! I am VaultBot, keeper of knowledge and secrets. *whirr*",
            json!([{"id": "1", "text": "Hi VaultBot! Why is the vault sealed?", "nextStep": 1}]),
        ),
        step(
            CODE,
            1,
            "vaultbot",
            "*processing* The vault has been sealed for centuries to protect its valuable contents. We must solve three puzzles to open it safely. *click*",
            json!([{"id": "1", "text": "I am ready for the first puzzle!", "nextStep": 2}]),
        ),
        step(
            CODE,
            2,
            "genesis",
            "I'll help too! The first puzzle is about patterns. Can you figure out which symbol comes next in this sequence: \u{2605}, \u{25a0}, \u{25cf}, \u{2605}, \u{25a0}, ?",
            json!([
                {"id": "1", "text": "\u{25cf}", "nextStep": 3, "awardStar": true},
                {"id": "2", "text": "\u{2605}", "nextStep": 4},
                {"id": "3", "text": "\u{25a0}", "nextStep": 4}
            ]),
        ),
    ]
}

fn fab_seeds_steps() -> Vec<NewMissionStep> {
    const CODE: &str = "fab-seeds";
    vec![
        step(
            CODE,
            0,
            "genesis",
            "Welcome to the Magical Garden! XO~Dy has entrusted us with some very special Fab Seeds that can grow into amazing ideas!",
            json!([{"id": "1", "text": "That sounds exciting! How do we plant them?", "nextStep": 1}]),
        ),
        step(
            CODE,
            1,
            "vaultbot",
            "*scanning* Fab Seeds require three key elements to grow: Rich imagination soil, creative water, and the light of inspiration. *beep*",
            json!([{"id": "1", "text": "Lets start gathering what we need!", "nextStep": 2}]),
        ),
        step(
            CODE,
            2,
            "genesis",
            "First, we need to find the perfect soil. Imagination soil is filled with tiny sparkling ideas waiting to grow bigger!",
            json!([
                {"id": "1", "text": "Check the Dream Valley", "nextStep": 3, "awardStar": true},
                {"id": "2", "text": "Dig in the regular garden patch", "nextStep": 4},
                {"id": "3", "text": "Look by the thinking pond", "nextStep": 5}
            ]),
        ),
    ]
}
