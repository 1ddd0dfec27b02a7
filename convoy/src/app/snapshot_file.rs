//! reads and writes the JSON cache snapshot kept between runs.
use std::path::Path;

use convoy_sync::CacheSnapshot;

use super::ConvoyAppError;

/// reads a snapshot, returning None when the file does not exist yet.
pub fn read_snapshot(filepath: &Path) -> Result<Option<CacheSnapshot>, ConvoyAppError> {
    if !filepath.exists() {
        log::debug!("no cache snapshot at {}", filepath.display());
        return Ok(None);
    }
    let read_error = |error: String| ConvoyAppError::ReadError {
        filepath: filepath.to_string_lossy().to_string(),
        error,
    };
    let contents = std::fs::read_to_string(filepath).map_err(|e| read_error(e.to_string()))?;
    let snapshot = serde_json::from_str::<CacheSnapshot>(&contents)
        .map_err(|e| read_error(format!("invalid cache snapshot: {e}")))?;
    Ok(Some(snapshot))
}

pub fn write_snapshot(filepath: &Path, snapshot: &CacheSnapshot) -> Result<(), ConvoyAppError> {
    let write_error = |error: String| ConvoyAppError::WriteError {
        filepath: filepath.to_string_lossy().to_string(),
        error,
    };
    let contents = serde_json::to_string_pretty(snapshot).map_err(|e| write_error(e.to_string()))?;
    std::fs::write(filepath, contents).map_err(|e| write_error(e.to_string()))?;
    log::info!(
        "wrote cache snapshot with {} checkpoints to {}",
        snapshot.checkpoints.len(),
        filepath.display()
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use convoy_core::model::{Checkpoint, SyncCursor};
    use convoy_sync::CacheSnapshot;

    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let filepath = std::env::temp_dir().join("convoy-snapshot-does-not-exist.json");
        assert!(read_snapshot(&filepath).expect("test failed").is_none());
    }

    #[test]
    fn test_write_then_read() {
        let filepath = std::env::temp_dir().join(format!(
            "convoy-snapshot-test-{}.json",
            std::process::id()
        ));
        let snapshot = CacheSnapshot {
            cursor: SyncCursor::default(),
            checkpoints: vec![Checkpoint::new("1", "Base Alpha", 34.5, 69.1)],
            planned_routes: vec![],
            fleet: None,
        };

        write_snapshot(&filepath, &snapshot).expect("test failed");
        let read = read_snapshot(&filepath).expect("test failed");
        let _ = std::fs::remove_file(&filepath);

        assert_eq!(read, Some(snapshot));
    }

    #[test]
    fn test_corrupt_file_is_read_error() {
        let filepath = std::env::temp_dir().join(format!(
            "convoy-snapshot-corrupt-{}.json",
            std::process::id()
        ));
        std::fs::write(&filepath, "{not json").expect("test failed");
        let result = read_snapshot(&filepath);
        let _ = std::fs::remove_file(&filepath);
        assert!(matches!(result, Err(ConvoyAppError::ReadError { .. })));
    }
}
