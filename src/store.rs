//! Directory-backed artifact store.
//!
//! Screenshots are cached purely by filename: `event-<id>.jpg` existing on
//! disk means the event is done. There is no ledger and no checksum.

use crate::{ArtifactStore, Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Deterministic output filename for an event id
pub fn artifact_name(id: u32) -> String {
    format!("event-{}.jpg", id)
}

/// Artifact store over a single output directory
pub struct DirStore {
    dir: PathBuf,
    created: bool,
}

impl DirStore {
    /// Open the store at `dir`, creating the directory tree if absent.
    pub fn create(dir: &Path) -> Result<Self> {
        let created = !dir.exists();
        if created {
            fs::create_dir_all(dir).map_err(|e| {
                Error::Storage(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(Self {
            dir: dir.to_path_buf(),
            created,
        })
    }

    /// Whether [`create`](Self::create) had to make the directory
    pub fn was_created(&self) -> bool {
        self.created
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl ArtifactStore for DirStore {
    fn exists(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }

    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<u64> {
        let path = self.path_for(name);
        fs::write(&path, bytes).map_err(|e| {
            Error::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
        // Report the size on disk, not the input length; the caller's
        // zero-length check must observe what actually landed
        let meta = fs::metadata(&path).map_err(|e| {
            Error::Storage(format!("Failed to stat {}: {}", path.display(), e))
        })?;
        Ok(meta.len())
    }

    fn remove(&mut self, name: &str) -> Result<()> {
        let path = self.path_for(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_name() {
        assert_eq!(artifact_name(7), "event-7.jpg");
        assert_eq!(artifact_name(42), "event-42.jpg");
    }

    #[test]
    fn test_create_reports_whether_directory_was_made() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("public").join("screenshots");

        let store = DirStore::create(&dir).expect("Failed to create store");
        assert!(store.was_created());
        assert!(dir.is_dir());

        let store = DirStore::create(&dir).expect("Failed to reopen store");
        assert!(!store.was_created());
    }

    #[test]
    fn test_write_exists_remove_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = DirStore::create(tmp.path()).unwrap();
        let name = artifact_name(1);

        assert!(!store.exists(&name));
        let written = store.write(&name, b"jpegbytes").unwrap();
        assert_eq!(written, 9);
        assert!(store.exists(&name));

        store.remove(&name).unwrap();
        assert!(!store.exists(&name));
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = DirStore::create(tmp.path()).unwrap();
        assert!(store.remove("event-999.jpg").is_ok());
    }

    #[test]
    fn test_write_reports_size_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = DirStore::create(tmp.path()).unwrap();
        assert_eq!(store.write("event-5.jpg", &[]).unwrap(), 0);
    }
}
