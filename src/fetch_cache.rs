//! Memoization of analysis payloads keyed by normalized base URL.
//!
//! Entries never expire on their own; callers invalidate explicitly.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

/// Storage strategy for fetched payloads.
pub trait FetchCache: Send {
    fn get(&self, key: &str) -> Option<Arc<Value>>;
    fn insert(&mut self, key: &str, payload: Arc<Value>);
    fn invalidate(&mut self, key: &str);
    fn clear(&mut self);
}

/// In-memory cache that keeps every successful payload for the session.
#[derive(Debug, Default)]
pub struct MemoryFetchCache {
    entries: HashMap<String, Arc<Value>>,
}

impl MemoryFetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FetchCache for MemoryFetchCache {
    fn get(&self, key: &str) -> Option<Arc<Value>> {
        self.entries.get(key).cloned()
    }

    fn insert(&mut self, key: &str, payload: Arc<Value>) {
        self.entries.insert(key.to_string(), payload);
    }

    fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Cache that never stores anything, so every request hits the server.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledFetchCache;

impl FetchCache for DisabledFetchCache {
    fn get(&self, _key: &str) -> Option<Arc<Value>> {
        None
    }

    fn insert(&mut self, _key: &str, _payload: Arc<Value>) {}

    fn invalidate(&mut self, _key: &str) {}

    fn clear(&mut self) {}
}

/// Pick the cache strategy from the `cache_enabled` setting.
pub fn cache_for(enabled: bool) -> Box<dyn FetchCache> {
    if enabled {
        Box::new(MemoryFetchCache::new())
    } else {
        Box::new(DisabledFetchCache)
    }
}
