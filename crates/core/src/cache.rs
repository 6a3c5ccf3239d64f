//! Memoization cache for file-type resolution
//!
//! A process-lifetime cache mapping lowercase file extensions to resolved
//! [`FileType`](crate::filetype::FileType) values. Unbounded by design: the
//! set of distinct extensions seen in a session is small, and entries stay
//! valid as long as the owning resolver (and its capability snapshot) lives.
//!
//! Access is serialized through an internal `RwLock`. Callers follow a
//! compute-then-publish discipline: the lock is never held while a
//! classification is computed, so two concurrent first-time lookups of the
//! same extension may both compute, but the map itself can never be observed
//! in a corrupt or partially-written state. Duplicate computation is cheap;
//! corruption is not.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::filetype::FileType;

/// Thread-safe extension -> file type cache.
#[derive(Debug, Default)]
pub struct TypeCache {
    map: RwLock<HashMap<String, FileType>>,
}

impl TypeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached entry by lowercase extension.
    pub fn get(&self, key: &str) -> Option<FileType> {
        // Poisoning only occurs if a writer panicked; the map is still
        // structurally intact, so recover the guard and read through.
        let map = self.map.read().unwrap_or_else(|e| e.into_inner());
        map.get(key).cloned()
    }

    /// Publish an entry. Last writer wins; concurrent writers for the same
    /// key always carry an identical, independently computed value.
    pub fn put(&self, key: impl Into<String>, value: FileType) {
        let mut map = self.map.write().unwrap_or_else(|e| e.into_inner());
        map.insert(key.into(), value);
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        let map = self.map.read().unwrap_or_else(|e| e.into_inner());
        map.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filetype::{FileClass, FileIcon};

    fn entry(ext: &str) -> FileType {
        FileType {
            extension: ext.to_string(),
            content_type: "text/plain".to_string(),
            class: FileClass::Document,
            icon: FileIcon::Txt,
            name: "text".to_string(),
        }
    }

    #[test]
    fn test_get_miss_then_hit() {
        let cache = TypeCache::new();
        assert!(cache.get("txt").is_none());

        cache.put("txt", entry("txt"));
        let hit = cache.get("txt").unwrap();
        assert_eq!(hit.extension, "txt");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_put_same_key_overwrites() {
        let cache = TypeCache::new();
        cache.put("md", entry("md"));
        cache.put("md", entry("md"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_concurrent_readers_and_writers() {
        let cache = TypeCache::new();
        std::thread::scope(|s| {
            for i in 0..8 {
                let cache = &cache;
                s.spawn(move || {
                    for _ in 0..100 {
                        cache.put(format!("ext{}", i % 4), entry("x"));
                        let _ = cache.get("ext0");
                    }
                });
            }
        });
        assert_eq!(cache.len(), 4);
    }
}
