//! Query snapshot cache
//!
//! Fetched payloads keyed by query name, the way the web console keyed
//! its queries ("menuList", "userPermissionlist", ...). Mutations
//! invalidate whole entries; nothing is ever merged in place. The next
//! reader refetches and replaces the snapshot wholesale.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// One cached query result
#[derive(Debug, Clone)]
pub struct CachedQuery {
    pub value: Value,
    pub fetched_at: DateTime<Utc>,
}

/// Replace-on-refetch query cache
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: DashMap<String, CachedQuery>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fetched snapshot, replacing any previous one
    pub fn put(&self, key: &str, value: Value) {
        self.entries.insert(
            key.to_string(),
            CachedQuery {
                value,
                fetched_at: Utc::now(),
            },
        );
    }

    /// Typed read of a snapshot
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entry = self.entries.get(key)?;
        serde_json::from_value(entry.value.clone()).ok()
    }

    /// Raw read of a snapshot
    pub fn get_raw(&self, key: &str) -> Option<Value> {
        self.entries.get(key).map(|e| e.value.clone())
    }

    /// When the snapshot was fetched
    pub fn fetched_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.entries.get(key).map(|e| e.fetched_at)
    }

    /// Drop a snapshot; the next reader must refetch
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drop everything
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of live snapshots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_replaces_wholesale() {
        let cache = QueryCache::new();
        cache.put("menuList", json!([{"menuId": 1}]));
        cache.put("menuList", json!([{"menuId": 2}]));

        let value: Vec<Value> = cache.get("menuList").unwrap();
        assert_eq!(value.len(), 1);
        assert_eq!(value[0]["menuId"], 2);
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let cache = QueryCache::new();
        cache.put("taskGroups", json!([]));
        assert!(cache.invalidate("taskGroups"));
        assert!(!cache.invalidate("taskGroups"));
        assert!(cache.get_raw("taskGroups").is_none());
    }

    #[test]
    fn test_typed_read_mismatch_is_none() {
        let cache = QueryCache::new();
        cache.put("menuList", json!({"not": "a list"}));
        let typed: Option<Vec<i64>> = cache.get("menuList");
        assert!(typed.is_none());
    }

    #[test]
    fn test_fetched_at_recorded() {
        let cache = QueryCache::new();
        cache.put("roles", json!([]));
        assert!(cache.fetched_at("roles").is_some());
        assert!(cache.fetched_at("missing").is_none());
    }
}
