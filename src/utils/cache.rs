use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory response cache. Entries never expire and are never evicted:
/// OMDb data is stable per key, so a key written once keeps returning the
/// same payload for the process lifetime.
pub struct Cache {
    entries: RwLock<HashMap<String, String>>,
}

impl Cache {
    pub fn new() -> Self {
        Cache {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    pub fn set(&self, key: String, value: String) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared cache state injected into the movie handlers via `web::Data`.
/// One region per operation so search and details keys never collide.
pub struct MovieCache {
    pub search: Cache,
    pub details: Cache,
}

impl MovieCache {
    pub fn new() -> Self {
        MovieCache {
            search: Cache::new(),
            details: Cache::new(),
        }
    }
}

impl Default for MovieCache {
    fn default() -> Self {
        Self::new()
    }
}
