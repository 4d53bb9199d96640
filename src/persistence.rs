// File: src/persistence.rs
use crate::error::SlugError;
use crate::registry::SlugRegistry;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Bumped whenever the on-disk layout of the registry changes.
const FORMAT_VERSION: u32 = 2;

#[derive(Serialize, Deserialize)]
struct SerializableState {
    version: u32,
    registry: SlugRegistry,
}

/// Writes the registry next to `path` and renames it into place, so readers
/// see either the old file or the new one.
pub fn save_to_disk(registry: &SlugRegistry, path: &Path) -> Result<(), SlugError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let state = SerializableState {
        version: FORMAT_VERSION,
        registry: registry.clone(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    info!(path = %path.display(), slugs = registry.len(), "saved slug registry");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<SlugRegistry, SlugError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;
    if state.version != FORMAT_VERSION {
        return Err(SlugError::UnsupportedVersion(state.version));
    }
    Ok(state.registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_survives_a_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("slugs.bin");

        let mut registry = SlugRegistry::new();
        registry.claim("ghazal", Some("1"), 80);
        registry.claim("ghazal", Some("2"), 80);
        save_to_disk(&registry, &path).unwrap();

        let mut loaded = load_from_disk(&path).unwrap();
        assert!(loaded.contains("ghazal"));
        assert_eq!(loaded.owner("ghazal-2"), Some(Some("2")));
        // The collision counter is persisted too.
        assert_eq!(loaded.claim("ghazal", Some("3"), 80), "ghazal-3");
    }

    #[test]
    fn older_layout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slugs.bin");
        let bytes = bincode::serialize(&(1u32, SlugRegistry::new())).unwrap();
        fs::write(&path, bytes).unwrap();
        assert!(matches!(load_from_disk(&path), Err(SlugError::UnsupportedVersion(1))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_disk(&dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, SlugError::Io(_)));
    }

    #[test]
    fn garbage_is_an_encoding_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slugs.bin");
        fs::write(&path, b"\xff\xff\xff\xff\xff\xff\xff\xff\xff").unwrap();
        assert!(matches!(load_from_disk(&path), Err(SlugError::Encoding(_))));
    }
}
