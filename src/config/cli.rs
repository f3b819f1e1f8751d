use crate::core::Storage;
use crate::utils::error::{PinError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes output files relative to `base_path` (absolute paths win).
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);
        let write_error = |source| PinError::OutputWriteError {
            path: full_path.display().to_string(),
            source,
        };

        let mut file = File::create(&full_path).map_err(write_error)?;
        if let Err(e) = file.write_all(data).and_then(|_| file.sync_all()) {
            drop(file);
            discard_partial(&full_path);
            return Err(write_error(e));
        }

        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}

fn discard_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        tracing::warn!("Could not remove partial output {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        std::fs::write(dir.path().join("pins.txt"), "old content that is longer").unwrap();

        storage.write_file("pins.txt", b"new").unwrap();
        assert_eq!(std::fs::read_to_string(dir.path().join("pins.txt")).unwrap(), "new");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.write_file("missing/pins.txt", b"1234\n").unwrap_err();
        assert!(matches!(err, PinError::OutputWriteError { .. }));
        assert!(err.to_string().contains("missing"));
    }
}
