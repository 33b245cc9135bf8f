use crate::core::Storage;
use crate::utils::error::{DocgenError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path).map_err(|e| DocgenError::io("read", full_path, e))
    }

    fn append_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = options
            .open(&full_path)
            .map_err(|e| DocgenError::io("open", &full_path, e))?;

        // no rollback: a failed write leaves whatever already reached the file
        file.write_all(data)
            .map_err(|e| DocgenError::io("write to", &full_path, e))?;
        file.flush()
            .map_err(|e| DocgenError::io("flush", &full_path, e))?;
        drop(file);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_creates_then_extends() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        let target = Path::new("guide.md");

        storage.append_file(target, b"first\n").unwrap();
        storage.append_file(target, b"second\n").unwrap();

        let content = fs::read_to_string(temp_dir.path().join("guide.md")).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("guide.md"), "# Guide\n").unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.append_file(Path::new("guide.md"), b"list\n").unwrap();

        let content = storage.read_file(Path::new("guide.md")).unwrap();
        assert_eq!(content, b"# Guide\nlist\n");
    }

    #[test]
    fn test_append_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let err = storage
            .append_file(Path::new("missing/guide.md"), b"x")
            .unwrap_err();
        assert!(err.to_string().contains("open"));
    }

    #[cfg(unix)]
    #[test]
    fn test_append_to_device_without_fsync_succeeds() {
        let storage = LocalStorage::new("/");

        assert!(storage.append_file(Path::new("/dev/null"), b"list\n").is_ok());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        assert!(matches!(
            storage.read_file(Path::new("names_data.csv")),
            Err(DocgenError::IoError { operation: "read", .. })
        ));
    }
}
