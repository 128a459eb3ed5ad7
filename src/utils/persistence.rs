//! JSON persistence helpers for files under ~/.flapper/.
//!
//! Shared by the scoreboard, the config loader and the log file setup.
//! Reads never fail: a missing or malformed file degrades to `T::default()`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.flapper/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".flapper");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.flapper/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load JSON from `path`, returning `T::default()` if missing or invalid.
pub fn load_json_or_default_at<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!("Could not read {}: {}", path.display(), e);
            }
            return T::default();
        }
    };
    match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Ignoring unparsable {}: {}", path.display(), e);
            T::default()
        }
    }
}

/// Load a JSON file from ~/.flapper/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    match data_path(filename) {
        Ok(path) => load_json_or_default_at(&path),
        Err(e) => {
            log::warn!("No data directory for {}: {}", filename, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flapper-persist-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_data_path_format() {
        let path = data_path("test.json").expect("data_path should succeed");
        assert!(path.to_string_lossy().ends_with(".flapper/test.json"));
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default_at(&temp_file("does-not-exist.json"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_garbage_returns_default() {
        let path = temp_file("garbage.json");
        fs::write(&path, "{not json").unwrap();

        let val: Vec<u32> = load_json_or_default_at(&path);
        assert!(val.is_empty());

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_valid_file() {
        let path = temp_file("values.json");
        fs::write(&path, r#"["hello", "world"]"#).unwrap();

        let loaded: Vec<String> = load_json_or_default_at(&path);
        assert_eq!(loaded, vec!["hello".to_string(), "world".to_string()]);

        fs::remove_file(path).ok();
    }
}
