//! JSON persistence adapter over any [`KeyValueStore`].
//!
//! `load` never fails: a missing key, an unreadable store or a payload that
//! does not parse all come back as `None`, and the caller falls back to its
//! seed collection. `save` reports store failures to the caller.

use crate::storage::kv::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct JsonStore {
    inner: Arc<dyn KeyValueStore>,
}

impl JsonStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.inner.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "Failed to read collection from store, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Stored collection is malformed, treating as absent");
                None
            }
        }
    }

    pub async fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        let raw = serde_json::to_string(value)?;
        self.inner.put(key, raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::MemoryStore;

    #[tokio::test]
    async fn load_missing_key_is_none() {
        let store = JsonStore::new(Arc::new(MemoryStore::new()));
        assert_eq!(store.load::<Vec<u32>>("nothing").await, None);
    }

    #[tokio::test]
    async fn load_corrupt_payload_is_none() {
        let kv = Arc::new(MemoryStore::new());
        kv.put("lunchboxd_favorites", "{not json".to_string())
            .await
            .unwrap();
        let store = JsonStore::new(kv);
        assert_eq!(store.load::<Vec<u32>>("lunchboxd_favorites").await, None);
    }

    #[tokio::test]
    async fn save_then_load() {
        let store = JsonStore::new(Arc::new(MemoryStore::new()));
        store.save("nums", &vec![3u32, 1, 2]).await.unwrap();
        assert_eq!(store.load::<Vec<u32>>("nums").await, Some(vec![3, 1, 2]));

        store.save("nums", &Vec::<u32>::new()).await.unwrap();
        assert_eq!(store.load::<Vec<u32>>("nums").await, Some(vec![]));
    }
}
