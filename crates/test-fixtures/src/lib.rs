//! Golden dataset loader for datatier integration tests.
//!
//! Fixtures live under `test-fixtures/` at the workspace root. Golden
//! classification scenarios are plain JSON so they can be read and edited
//! without touching Rust code.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Walk up from the calling crate to the workspace root. The loader crate
    // itself is also named test-fixtures, so look for the golden directory.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/golden from CARGO_MANIFEST_DIR={}",
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

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    paths.sort();
    paths
}

/// One golden classification scenario.
///
/// `records` is an array of row objects. Tier, type, and masking names are
/// kept as strings so fixtures stay independent of the engine's types.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub records: serde_json::Value,
    pub expected: Vec<ExpectedColumn>,
    #[serde(default)]
    pub expected_overall_sensitivity: Option<String>,
}

/// Expected verdict for one column. Unset fields are not checked.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedColumn {
    pub column: String,
    pub sensitivity: String,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub masking_strategy: Option<String>,
    #[serde(default)]
    pub min_confidence: Option<f64>,
    #[serde(default)]
    pub max_confidence: Option<f64>,
    #[serde(default)]
    pub automation_ready: Option<bool>,
    #[serde(default)]
    pub mixed_signal: Option<bool>,
}

/// Load every scenario under `golden/classification/`.
pub fn load_golden_scenarios() -> Vec<GoldenScenario> {
    list_fixtures("golden/classification")
        .into_iter()
        .map(|path| {
            let content = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
        })
        .collect()
}
