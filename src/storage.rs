use crate::errors::StoreError;
use crate::models::RatingsMap;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::error;

pub const STORAGE_KEY: &str = "daily-ratings";

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }
}

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = read_items(&path);
        Self { path, items }
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let mut next = self.items.clone();
        next.insert(key.to_string(), value);
        let payload = serde_json::to_vec_pretty(&next)?;

        // Only adopt the new items once they are on disk.
        let staging = self.staging_path();
        fs::write(&staging, payload)?;
        fs::rename(&staging, &self.path)?;
        self.items = next;
        Ok(())
    }
}

fn read_items(path: &Path) -> BTreeMap<String, String> {
    match fs::read(path) {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(items) => items,
            Err(err) => {
                error!("failed to parse storage file {}: {err}", path.display());
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read storage file {}: {err}", path.display());
            BTreeMap::new()
        }
    }
}

/// No validation happens here; callers gate writes (see `widget::handle_save`).
#[derive(Debug)]
pub struct RatingsStore<S> {
    backend: S,
}

impl<S: KeyValueStore> RatingsStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn load(&self) -> RatingsMap {
        let Some(raw) = self.backend.get_item(STORAGE_KEY) else {
            return RatingsMap::new();
        };
        if raw.is_empty() {
            return RatingsMap::new();
        }
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                error!("unable to read stored ratings: {err}");
                RatingsMap::new()
            }
        }
    }

    pub fn save(&mut self, map: &RatingsMap) -> Result<(), StoreError> {
        let raw = serde_json::to_string(map)?;
        self.backend.set_item(STORAGE_KEY, raw)
    }
}
