use crate::PROFILE_FILE_NAME;
use crate::error::Result as DbResult;
use crate::json_file::{JsonFile, Loaded, ensure_dir};

use gb_core::Profile;

use std::path::{Path, PathBuf};

use log::{error, info, warn};

/// Storage for the single user profile.
pub trait ProfileRepository: Send + Sync {
    /// `None` when nothing was ever saved or the stored file no longer parses.
    fn get_profile(&self) -> Option<Profile>;

    /// Replaces the stored profile. `false` on any I/O or serialization failure.
    fn save_profile(&self, profile: &Profile) -> bool;

    /// Idempotent: `true` whether or not a profile existed.
    fn delete_profile(&self) -> bool;
}

/// `ProfileRepository` backed by `profile.json` in the data directory.
#[derive(Debug, Clone)]
pub struct JsonProfileRepository {
    file: JsonFile,
}

impl JsonProfileRepository {
    /// Opens the repository, creating `data_dir` if it does not exist.
    pub fn new(data_dir: impl AsRef<Path>) -> DbResult<Self> {
        let data_dir = data_dir.as_ref();
        ensure_dir(data_dir)?;

        Ok(Self {
            file: JsonFile::new(data_dir, PROFILE_FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Moves an unreadable `profile.json` aside so it can be inspected later.
    pub fn backup_corrupted(&self) -> DbResult<Option<PathBuf>> {
        self.file.backup_if_corrupted::<Option<Profile>>()
    }

    fn try_save(&self, profile: &Profile) -> DbResult<()> {
        if let Some(backup) = self.backup_corrupted()? {
            warn!("Replacing corrupted profile, previous file kept at {backup:?}");
        }

        self.file.save(profile)
    }
}

impl ProfileRepository for JsonProfileRepository {
    fn get_profile(&self) -> Option<Profile> {
        match self.file.load::<Option<Profile>>() {
            Ok(Loaded::Parsed(profile)) => profile,
            Ok(Loaded::Missing) => None,
            Ok(Loaded::Corrupted(reason)) => {
                warn!("Ignoring unreadable profile: {reason}");
                None
            }
            Err(e) => {
                warn!("Error reading profile: {e}");
                None
            }
        }
    }

    fn save_profile(&self, profile: &Profile) -> bool {
        match self.try_save(profile) {
            Ok(()) => {
                info!("Saved profile to {:?}", self.file.path());
                true
            }
            Err(e) => {
                error!("Error saving profile: {e} ({})", e.recovery_hint());
                false
            }
        }
    }

    fn delete_profile(&self) -> bool {
        match self.file.remove() {
            Ok(removed) => {
                if removed {
                    info!("Deleted profile at {:?}", self.file.path());
                }
                true
            }
            Err(e) => {
                error!("Error deleting profile: {e} ({})", e.recovery_hint());
                false
            }
        }
    }
}
