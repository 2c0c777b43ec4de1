//! JSON persistence helpers for ~/.chinup-flap/ files.

use crate::core::DATA_DIR_NAME;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.chinup-flap/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    data_dir_in(&home_dir)
}

/// The game's data directory under `home`, creating it if needed.
pub fn data_dir_in(home: &Path) -> io::Result<PathBuf> {
    let dir = home.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Read and parse a JSON file. Parse failures surface as `InvalidData`.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> io::Result<T> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write a value as pretty-printed JSON.
///
/// The data goes to a sibling temp file first and is then renamed over the
/// target, so a crash mid-write never leaves a truncated file behind.
pub fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_is_created_under_home() {
        let home = tempfile::tempdir().unwrap();
        let dir = data_dir_in(home.path()).expect("data_dir_in should succeed");
        assert_eq!(dir, home.path().join(".chinup-flap"));
        assert!(dir.is_dir());

        // Existing directory is reused.
        assert_eq!(data_dir_in(home.path()).unwrap(), dir);
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_json::<Vec<String>>(&dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_read_garbage_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        let err = read_json::<Vec<String>>(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        write_json(&path, &data).expect("write should succeed");

        let loaded: Vec<String> = read_json(&path).unwrap();
        assert_eq!(loaded, data);
        assert!(!dir.path().join("data.json.tmp").exists());
    }
}
