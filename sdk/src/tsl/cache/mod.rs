// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Caches of the trusted list validation job.
//!
//! Each cache maps a [`CacheKey`] to a [`CachedEntry`] guarded by its own
//! lock, so that work on one trusted list never blocks another.

use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use url::Url;

use crate::Result;

mod context;
mod entry;
mod state;

pub use context::{CacheContext, CachedException};
pub use entry::CachedEntry;
pub use state::CacheState;

/// Key of a cached trusted list, derived from its URL.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derives the key of the resource at `url`.
    ///
    /// URLs differing only by letter case of the scheme or host map to the
    /// same key.
    pub fn from_url(url: &str) -> Self {
        let normalized = Url::parse(url)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| url.to_owned());
        Self(hex::encode(Sha256::digest(normalized.as_bytes())))
    }

    /// The key as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

type SharedEntry<R> = Arc<Mutex<CachedEntry<R>>>;

/// A keyed cache of results.
pub struct Cache<R> {
    entries: RwLock<HashMap<CacheKey, SharedEntry<R>>>,
}

impl<R> Default for Cache<R> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

fn lock<R>(entry: &Mutex<CachedEntry<R>>) -> MutexGuard<'_, CachedEntry<R>> {
    match entry.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl<R: Clone> Cache<R> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<CacheKey, SharedEntry<R>>> {
        match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<CacheKey, SharedEntry<R>>> {
        match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn shared(&self, key: &CacheKey) -> SharedEntry<R> {
        if let Some(entry) = self.read().get(key) {
            return entry.clone();
        }
        self.write()
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(CachedEntry::new())))
            .clone()
    }

    /// Runs `f` on the entry of `key` while holding its lock. The entry is
    /// created if missing.
    pub fn with_entry<T, F>(&self, key: &CacheKey, f: F) -> T
    where
        F: FnOnce(&mut CachedEntry<R>) -> T,
    {
        let entry = self.shared(key);
        let mut guard = lock(&entry);
        f(&mut guard)
    }

    /// Returns a copy of the entry of `key`, if present.
    pub fn snapshot(&self, key: &CacheKey) -> Option<CachedEntry<R>> {
        let entry = self.read().get(key)?.clone();
        let guard = lock(&entry);
        Some(guard.clone())
    }

    /// Returns the cached result of `key`.
    pub fn result(&self, key: &CacheKey) -> Option<R> {
        self.snapshot(key).and_then(|e| e.result().cloned())
    }

    /// Returns `true` if `key` is unknown or its entry must be refreshed.
    pub fn is_refresh_needed(&self, key: &CacheKey) -> bool {
        self.snapshot(key)
            .map_or(true, |e| e.context().is_refresh_needed())
    }

    /// Stores a new result for `key`.
    pub fn update(&self, key: &CacheKey, result: R) -> Result<()> {
        self.with_entry(key, |e| e.update(result))
    }

    /// Marks the result of `key` as published.
    pub fn sync(&self, key: &CacheKey) -> Result<()> {
        self.with_entry(key, |e| e.sync())
    }

    /// Requests a refresh of `key`.
    pub fn expire(&self, key: &CacheKey) -> Result<()> {
        self.with_entry(key, |e| e.expire())
    }

    /// Records a failure for `key`.
    pub fn error(&self, key: &CacheKey, exception: CachedException) -> Result<()> {
        self.with_entry(key, |e| e.error(exception))
    }

    /// Marks `key` for removal.
    pub fn to_be_deleted(&self, key: &CacheKey) -> Result<()> {
        self.with_entry(key, |e| e.to_be_deleted())
    }

    /// Removes `key` from the cache.
    pub fn remove(&self, key: &CacheKey) -> Option<CachedEntry<R>> {
        let entry = self.write().remove(key)?;
        let guard = lock(&entry);
        Some(guard.clone())
    }

    /// All keys of the cache, sorted.
    pub fn keys(&self) -> Vec<CacheKey> {
        let mut keys: Vec<CacheKey> = self.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}
