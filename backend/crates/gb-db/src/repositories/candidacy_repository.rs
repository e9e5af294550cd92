use crate::CANDIDACIES_FILE_NAME;
use crate::error::Result as DbResult;
use crate::json_file::{JsonFile, Loaded, ensure_dir};

use gb_core::{Candidacy, CandidacyStatus};

use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

/// Storage for the candidacy collection.
///
/// Every mutation loads the whole collection, changes it in memory and rewrites it.
pub trait CandidacyRepository: Send + Sync {
    /// Empty when the file is missing or no longer parses.
    fn get_all_candidacies(&self) -> Vec<Candidacy>;

    fn get_candidacy(&self, id: &str) -> Option<Candidacy>;

    /// Appends without checking for an existing id.
    fn save_candidacy(&self, candidacy: &Candidacy) -> bool;

    /// Replaces the record with the same id in place.
    fn update_candidacy(&self, candidacy: &Candidacy) -> bool;

    fn delete_candidacy(&self, id: &str) -> bool;

    /// Changes only `status` of the matching record.
    fn update_candidacy_status(&self, id: &str, status: CandidacyStatus) -> bool;
}

/// `CandidacyRepository` backed by `candidacies.json` in the data directory.
#[derive(Debug, Clone)]
pub struct JsonCandidacyRepository {
    file: JsonFile,
}

impl JsonCandidacyRepository {
    /// Opens the repository, creating `data_dir` if it does not exist.
    pub fn new(data_dir: impl AsRef<Path>) -> DbResult<Self> {
        let data_dir = data_dir.as_ref();
        ensure_dir(data_dir)?;

        Ok(Self {
            file: JsonFile::new(data_dir, CANDIDACIES_FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Moves an unreadable `candidacies.json` aside so it can be inspected later.
    pub fn backup_corrupted(&self) -> DbResult<Option<PathBuf>> {
        self.file.backup_if_corrupted::<Option<Vec<Candidacy>>>()
    }

    /// Load, mutate, rewrite. `mutate` returns `false` to abandon without writing.
    ///
    /// A corrupted file reads as an empty collection; it is moved aside before the
    /// rewrite replaces it.
    fn try_mutate<F>(&self, mutate: F) -> DbResult<bool>
    where
        F: FnOnce(&mut Vec<Candidacy>) -> bool,
    {
        let (mut candidacies, corrupted) = match self.file.load::<Option<Vec<Candidacy>>>()? {
            Loaded::Missing => (Vec::new(), false),
            Loaded::Parsed(candidacies) => (candidacies.unwrap_or_default(), false),
            Loaded::Corrupted(reason) => {
                warn!("Starting from an empty collection, stored file unreadable: {reason}");
                (Vec::new(), true)
            }
        };

        if !mutate(&mut candidacies) {
            return Ok(false);
        }

        if corrupted {
            let backup = self.file.backup()?;
            warn!("Replacing corrupted candidacies, previous file kept at {backup:?}");
        }

        self.file.save(&candidacies)?;
        Ok(true)
    }

    fn mutate<F>(&self, operation: &str, mutate: F) -> bool
    where
        F: FnOnce(&mut Vec<Candidacy>) -> bool,
    {
        match self.try_mutate(mutate) {
            Ok(true) => {
                info!("{operation}: wrote {:?}", self.file.path());
                true
            }
            Ok(false) => {
                debug!("{operation}: no matching candidacy, nothing written");
                false
            }
            Err(e) => {
                error!("{operation} failed: {e} ({})", e.recovery_hint());
                false
            }
        }
    }
}

impl CandidacyRepository for JsonCandidacyRepository {
    fn get_all_candidacies(&self) -> Vec<Candidacy> {
        match self.file.load::<Option<Vec<Candidacy>>>() {
            Ok(Loaded::Parsed(candidacies)) => candidacies.unwrap_or_default(),
            Ok(Loaded::Missing) => Vec::new(),
            Ok(Loaded::Corrupted(reason)) => {
                warn!("Ignoring unreadable candidacies: {reason}");
                Vec::new()
            }
            Err(e) => {
                warn!("Error reading candidacies: {e}");
                Vec::new()
            }
        }
    }

    fn get_candidacy(&self, id: &str) -> Option<Candidacy> {
        if id.is_empty() {
            return None;
        }

        self.get_all_candidacies()
            .into_iter()
            .find(|candidacy| candidacy.id == id)
    }

    fn save_candidacy(&self, candidacy: &Candidacy) -> bool {
        self.mutate("Save candidacy", |candidacies| {
            candidacies.push(candidacy.clone());
            true
        })
    }

    fn update_candidacy(&self, candidacy: &Candidacy) -> bool {
        if candidacy.id.is_empty() {
            return false;
        }

        self.mutate("Update candidacy", |candidacies| {
            match candidacies.iter().position(|c| c.id == candidacy.id) {
                Some(index) => {
                    candidacies[index] = candidacy.clone();
                    true
                }
                None => false,
            }
        })
    }

    fn delete_candidacy(&self, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }

        self.mutate("Delete candidacy", |candidacies| {
            match candidacies.iter().position(|c| c.id == id) {
                Some(index) => {
                    candidacies.remove(index);
                    true
                }
                None => false,
            }
        })
    }

    fn update_candidacy_status(&self, id: &str, status: CandidacyStatus) -> bool {
        if id.is_empty() {
            return false;
        }

        self.mutate("Update candidacy status", |candidacies| {
            match candidacies.iter_mut().find(|c| c.id == id) {
                Some(candidacy) => {
                    candidacy.status = status;
                    true
                }
                None => false,
            }
        })
    }
}
