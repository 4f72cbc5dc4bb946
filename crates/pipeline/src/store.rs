//! Persistent owner of the session's filter criteria.
//!
//! The store rehydrates once on open and writes through on every update.
//! Stored state is a JSON envelope `{"state": <criteria>, "version": 0}`
//! under the key [`STORAGE_KEY`].

use crate::criteria::{CriteriaUpdate, FilterCriteria};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const STORAGE_KEY: &str = "empleos-filters";
pub const STATE_VERSION: u32 = 0;

const STATE_DIR: &str = "jobscope";

/// Key/value backend for persisted state
pub trait StateStorage {
    /// Stored value for `key`, or `None` if nothing was saved yet
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside `dir`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<platform data dir>/jobscope`, if the platform has one
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|path| path.join(STATE_DIR))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// No file locking - last writer wins if several sessions run at once.
    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Keeps state for the lifetime of the value only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    state: FilterCriteria,
    version: u32,
}

/// Owns the current criteria and keeps the backend in sync with it.
pub struct FilterStore<S: StateStorage> {
    storage: S,
    criteria: FilterCriteria,
}

impl<S: StateStorage> FilterStore<S> {
    /// Rehydrate criteria from `storage`.
    ///
    /// Missing state yields defaults. Unreadable or malformed state is
    /// logged and also yields defaults; it is overwritten on the next update.
    pub fn open(storage: S) -> Self {
        let criteria = match restore(&storage) {
            Ok(Some(criteria)) => criteria,
            Ok(None) => FilterCriteria::default(),
            Err(e) => {
                warn!(key = STORAGE_KEY, error = %e, "discarding stored filter state");
                FilterCriteria::default()
            }
        };
        Self { storage, criteria }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Apply `update` and persist the result.
    ///
    /// The in-memory criteria only change once the new state is saved.
    pub fn dispatch(&mut self, update: CriteriaUpdate) -> Result<&FilterCriteria> {
        debug!(?update, "dispatching criteria update");
        let next = self.criteria.apply(update);
        persist(&mut self.storage, &next)?;
        self.criteria = next;
        Ok(&self.criteria)
    }

    pub fn reset(&mut self) -> Result<&FilterCriteria> {
        self.dispatch(CriteriaUpdate::Reset)
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn restore(storage: &impl StateStorage) -> Result<Option<FilterCriteria>> {
    let Some(raw) = storage.load(STORAGE_KEY)? else {
        return Ok(None);
    };
    let persisted: PersistedState = serde_json::from_str(&raw)?;
    if persisted.version != STATE_VERSION {
        warn!(
            version = persisted.version,
            expected = STATE_VERSION,
            "stored filter state has a different version"
        );
    }
    Ok(Some(persisted.state))
}

fn persist(storage: &mut impl StateStorage, criteria: &FilterCriteria) -> Result<()> {
    let envelope = PersistedState {
        state: criteria.clone(),
        version: STATE_VERSION,
    };
    storage.save(STORAGE_KEY, &serde_json::to_string(&envelope)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::presets::Preset;
    use data_loader::Modality;

    /// A backend whose writes always fail
    struct ReadOnlyStorage;

    impl StateStorage for ReadOnlyStorage {
        fn load(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[test]
    fn test_open_empty_storage_gives_defaults() {
        let store = FilterStore::open(MemoryStorage::new());
        assert!(store.criteria().is_empty());
    }

    #[test]
    fn test_dispatch_persists_envelope() {
        let mut store = FilterStore::open(MemoryStorage::new());
        store
            .dispatch(CriteriaUpdate::ToggleModality(Modality::Remote))
            .unwrap();

        let storage = store.into_storage();
        let raw = storage.load(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["modalities"][0], "Remoto");
    }

    #[test]
    fn test_state_survives_reopen() {
        let mut store = FilterStore::open(MemoryStorage::new());
        store
            .dispatch(CriteriaUpdate::ApplyPreset(Preset::FirstJob))
            .unwrap();
        let expected = store.criteria().clone();

        let reopened = FilterStore::open(store.into_storage());
        assert_eq!(reopened.criteria(), &expected);
    }

    #[test]
    fn test_corrupt_state_falls_back_to_defaults() {
        let mut storage = MemoryStorage::new();
        storage.save(STORAGE_KEY, "{not json").unwrap();

        let store = FilterStore::open(storage);
        assert!(store.criteria().is_empty());
    }

    #[test]
    fn test_failed_save_keeps_previous_criteria() {
        let mut store = FilterStore::open(ReadOnlyStorage);

        let result = store.dispatch(CriteriaUpdate::SetVerifiedOnly(true));
        assert!(result.is_err());
        assert!(!store.criteria().verified_only);
    }

    #[test]
    fn test_reset_is_persisted() {
        let mut store = FilterStore::open(MemoryStorage::new());
        store.dispatch(CriteriaUpdate::SetSalaryOnly(true)).unwrap();
        store.reset().unwrap();

        let reopened = FilterStore::open(store.into_storage());
        assert!(reopened.criteria().is_empty());
    }
}
