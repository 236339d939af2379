use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::store::{validate_key, KeyValueStore};

/// One `<key>.json` file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn write_then_rename(tmp_path: &Path, path: &Path, body: &[u8]) -> Result<(), StorageError> {
    std::fs::write(tmp_path, body).map_err(io_error(tmp_path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(tmp_path, std::fs::Permissions::from_mode(0o600))
            .map_err(io_error(tmp_path))?;
    }

    std::fs::rename(tmp_path, path).map_err(io_error(path))
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path)(e)),
        }
    }

    /// Write to a temp file then rename, so readers never see a torn value.
    fn put(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root).map_err(io_error(&self.root))?;

        let tmp_path = path.with_extension("json.tmp");
        if let Err(e) = write_then_rename(&tmp_path, &path, &body) {
            if let Err(cleanup) = std::fs::remove_file(&tmp_path)
                && cleanup.kind() != ErrorKind::NotFound
            {
                tracing::warn!(path = %tmp_path.display(), error = %cleanup, "failed to remove temp file");
            }
            return Err(e);
        }
        tracing::debug!(path = %path.display(), "entry written");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "entry deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path)(e)),
        }
    }
}
