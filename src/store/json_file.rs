use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ListingStore, StoreError, UserStore};
use crate::models::{Listing, User};

/// A single JSON array file holding one collection
#[derive(Debug, Clone)]
struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole collection; a missing file is an empty collection
    fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Overwrite the whole file with a pretty-printed snapshot
    ///
    /// Creates the parent directory on first save.
    fn save<T: Serialize>(&self, items: &[T]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    tracing::error!("Failed to create data directory: {}", e);
                    e
                })?;
            }
        }
        let contents = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// Listing repository backed by a JSON array file
#[derive(Debug, Clone)]
pub struct JsonListingStore {
    file: JsonFile,
}

impl JsonListingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file.path
    }
}

impl ListingStore for JsonListingStore {
    fn load(&self) -> Result<Vec<Listing>, StoreError> {
        self.file.load()
    }

    fn save(&self, listings: &[Listing]) -> Result<(), StoreError> {
        self.file.save(listings)
    }
}

/// User repository backed by a JSON array file
#[derive(Debug, Clone)]
pub struct JsonUserStore {
    file: JsonFile,
}

impl JsonUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file.path
    }
}

impl UserStore for JsonUserStore {
    fn load(&self) -> Result<Vec<User>, StoreError> {
        self.file.load()
    }

    fn save(&self, users: &[User]) -> Result<(), StoreError> {
        self.file.save(users)
    }
}
