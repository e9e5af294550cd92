use crate::error::{DbError, Result as DbResult};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

const BACKUP_DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Outcome of reading a data file. Corruption is not an error at this level:
/// callers decide whether to treat it as empty or to preserve the file.
#[derive(Debug)]
pub(crate) enum Loaded<T> {
    Missing,
    Parsed(T),
    Corrupted(String),
}

/// One JSON document on disk, replaced as a whole on every write.
#[derive(Debug, Clone)]
pub(crate) struct JsonFile {
    dir: PathBuf,
    file_name: &'static str,
    path: PathBuf,
}

impl JsonFile {
    pub(crate) fn new(dir: &Path, file_name: &'static str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            file_name,
            path: dir.join(file_name),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn load<T: DeserializeOwned>(&self) -> DbResult<Loaded<T>> {
        if !self.path.exists() {
            debug!("No data file at {:?}", self.path);
            return Ok(Loaded::Missing);
        }

        let contents =
            fs::read_to_string(&self.path).map_err(|e| DbError::file_read(self.path.clone(), e))?;

        match serde_json::from_str::<T>(&contents) {
            Ok(value) => Ok(Loaded::Parsed(value)),
            Err(e) => {
                warn!("Data file corrupted at {:?}: {e}", self.path);
                Ok(Loaded::Corrupted(e.to_string()))
            }
        }
    }

    /// Writes pretty JSON using the atomic write pattern.
    ///
    /// 1. Writes to a temp file next to the target
    /// 2. Syncs to disk (fsync)
    /// 3. Renames over the target
    pub(crate) fn save<T: Serialize + ?Sized>(&self, value: &T) -> DbResult<()> {
        let json = serde_json::to_string_pretty(value)?;

        let temp_path = self
            .dir
            .join(format!("{}.tmp.{}", self.file_name, std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| DbError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| DbError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| DbError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            DbError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        Ok(())
    }

    /// Removes the file. Returns whether there was anything to remove.
    pub(crate) fn remove(&self) -> DbResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        fs::remove_file(&self.path).map_err(|e| DbError::file_remove(self.path.clone(), e))?;
        Ok(true)
    }

    /// Renames the file to `<name>.corrupted.{timestamp}` and returns the new path.
    pub(crate) fn backup(&self) -> DbResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(BACKUP_DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{}.corrupted.{timestamp}", self.file_name));

        fs::rename(&self.path, &backup_path)
            .map_err(|e| DbError::backup_failed(self.path.clone(), e))?;

        warn!("Backed up corrupted data file to {backup_path:?}");
        Ok(backup_path)
    }

    /// Backs the file up only when it exists and does not parse as `T`.
    pub(crate) fn backup_if_corrupted<T: DeserializeOwned>(&self) -> DbResult<Option<PathBuf>> {
        match self.load::<T>()? {
            Loaded::Corrupted(_) => self.backup().map(Some),
            Loaded::Missing | Loaded::Parsed(_) => Ok(None),
        }
    }
}

/// Creates the data directory if needed.
pub(crate) fn ensure_dir(dir: &Path) -> DbResult<()> {
    fs::create_dir_all(dir).map_err(|e| DbError::dir_creation(dir.to_path_buf(), e))
}
