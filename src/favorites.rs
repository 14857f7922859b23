//! Persisted favorites collection.
//!
//! The whole collection is kept in memory and rewritten as one JSON array on
//! every mutation.

use crate::errors::{StoreError, StoreResult};
use crate::storage::Storage;
use schema::Pokemon;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const FAVORITES_KEY: &str = "pokezone-favorites";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    pub types: Vec<String>,
    /// Milliseconds since the Unix epoch.
    pub added_at: i64,
}

impl FavoriteEntry {
    pub fn from_pokemon(pokemon: &Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            image_url: pokemon.image_url().unwrap_or_default().to_string(),
            types: pokemon.type_names(),
            added_at: 0,
        }
    }
}

pub struct FavoritesStore<S: Storage> {
    storage: S,
    entries: Vec<FavoriteEntry>,
}

impl<S: Storage> FavoritesStore<S> {
    /// Loads the persisted collection. Unreadable or malformed data is
    /// discarded and the collection starts empty.
    pub fn load(storage: S) -> Self {
        let entries = match storage.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<FavoriteEntry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, "discarding malformed favorites");
                    if let Err(e) = storage.remove(FAVORITES_KEY) {
                        warn!(error = %e, "could not remove malformed favorites");
                    }
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "favorites unavailable");
                Vec::new()
            }
        };
        debug!(count = entries.len(), "favorites loaded");
        Self { storage, entries }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Adds an entry stamped with the current time. Returns `false` when the
    /// id is already present, leaving the collection untouched.
    pub fn add(&mut self, entry: FavoriteEntry) -> StoreResult<bool> {
        let added_at = chrono::Utc::now().timestamp_millis();
        self.add_at(entry, added_at)
    }

    pub fn add_at(&mut self, mut entry: FavoriteEntry, added_at: i64) -> StoreResult<bool> {
        if self.is_favorite(entry.id) {
            return Ok(false);
        }
        entry.added_at = added_at;
        let mut entries = self.entries.clone();
        entries.push(entry);
        self.commit(entries)?;
        Ok(true)
    }

    /// Returns `false` when the id was not present.
    pub fn remove(&mut self, id: u32) -> StoreResult<bool> {
        if !self.is_favorite(id) {
            return Ok(false);
        }
        let entries = self
            .entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        self.commit(entries)?;
        Ok(true)
    }

    /// Adds or removes; returns whether the id is a favorite afterwards.
    pub fn toggle(&mut self, entry: FavoriteEntry) -> StoreResult<bool> {
        if self.is_favorite(entry.id) {
            self.remove(entry.id)?;
            Ok(false)
        } else {
            self.add(entry)?;
            Ok(true)
        }
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn clear(&mut self) -> StoreResult<()> {
        self.commit(Vec::new())
    }

    /// Newest first.
    pub fn list(&self) -> Vec<FavoriteEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Writes the full snapshot, then adopts it. A failed write leaves the
    /// collection as it was.
    fn commit(&mut self, entries: Vec<FavoriteEntry>) -> StoreResult<()> {
        let raw = serde_json::to_string(&entries).map_err(|e| StoreError::Encode {
            key: FAVORITES_KEY.to_string(),
            details: e.to_string(),
        })?;
        self.storage.set(FAVORITES_KEY, &raw)?;
        self.entries = entries;
        Ok(())
    }
}
