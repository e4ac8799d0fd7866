//! Test fixture loader for featurizer integration tests and benchmarks.
//!
//! Fixtures are JSON files next to this crate's manifest; the moodbot
//! domain and dialogues are shared by every crate's tests.

use serde::de::DeserializeOwned;
use std::path::PathBuf;
use tracker_core::domain::{Domain, DomainSpec};
use tracker_core::models::Dialogue;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until a sibling
    // test-fixtures directory shows up.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// The moodbot domain.
pub fn moodbot_domain() -> Domain {
    load_fixture::<DomainSpec>("moodbot/domain.json").into()
}

/// Every moodbot dialogue, in file order.
pub fn moodbot_dialogues() -> Vec<Dialogue> {
    load_fixture("moodbot/dialogues.json")
}

/// A single moodbot dialogue by id.
///
/// # Panics
/// Panics if no dialogue has that id.
pub fn moodbot_dialogue(id: &str) -> Dialogue {
    moodbot_dialogues()
        .into_iter()
        .find(|d| d.id == id)
        .unwrap_or_else(|| panic!("No moodbot dialogue with id {}", id))
}
