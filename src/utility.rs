//! General utility functions.

use serde_json;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Get application directory
fn get_app_dir(temp_name: &str) -> (PathBuf, PathBuf) {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let temp_path = cwd.join(temp_name);

    // If .kline_chart folder exists in current working directory, use it
    if temp_path.exists() {
        return (cwd, temp_path);
    }

    // Otherwise use home path
    let home_path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let temp_path = home_path.join(temp_name);

    // Create folder if not exists
    if !temp_path.exists() {
        let _ = fs::create_dir_all(&temp_path);
    }

    (home_path, temp_path)
}

/// Application directory
pub static APP_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    let (app_dir, _) = get_app_dir(".kline_chart");
    app_dir
});

/// Temp directory
pub static TEMP_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    let (_, temp_dir) = get_app_dir(".kline_chart");
    temp_dir
});

/// Get path for temp file with filename
pub fn get_file_path(filename: &str) -> PathBuf {
    TEMP_DIR.join(filename)
}

/// Get path for temp folder with folder name
pub fn get_folder_path(folder_name: &str) -> PathBuf {
    let folder_path = TEMP_DIR.join(folder_name);
    if !folder_path.exists() {
        let _ = fs::create_dir_all(&folder_path);
    }
    folder_path
}

/// Load data from a JSON file at a specific path
pub fn load_json_path(filepath: &Path) -> HashMap<String, serde_json::Value> {
    if filepath.exists() {
        if let Ok(content) = fs::read_to_string(filepath) {
            if let Ok(data) = serde_json::from_str(&content) {
                return data;
            }
        }
    }

    // Save empty JSON and return empty map
    save_json_path(filepath, &HashMap::new());
    HashMap::new()
}

/// Save data into a JSON file at a specific path
pub fn save_json_path(filepath: &Path, data: &HashMap<String, serde_json::Value>) {
    if let Ok(json) = serde_json::to_string_pretty(data) {
        let _ = fs::write(filepath, json);
    }
}

/// Load data from JSON file in temp path
pub fn load_json(filename: &str) -> HashMap<String, serde_json::Value> {
    load_json_path(&get_file_path(filename))
}

/// Save data into JSON file in temp path
pub fn save_json(filename: &str, data: &HashMap<String, serde_json::Value>) {
    save_json_path(&get_file_path(filename), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let filepath = dir.path().join("utility_test.json");

        let mut data = HashMap::new();
        data.insert(
            "key".to_string(),
            serde_json::Value::String("value".to_string()),
        );
        save_json_path(&filepath, &data);

        let loaded = load_json_path(&filepath);
        assert_eq!(loaded.get("key").and_then(|v| v.as_str()), Some("value"));
    }

    #[test]
    fn test_load_json_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let filepath = dir.path().join("missing.json");

        let loaded = load_json_path(&filepath);
        assert!(loaded.is_empty());
        assert!(filepath.exists());
    }

    #[test]
    fn test_load_json_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let filepath = dir.path().join("broken.json");
        fs::write(&filepath, "not json").unwrap();

        let loaded = load_json_path(&filepath);
        assert!(loaded.is_empty());
    }
}
