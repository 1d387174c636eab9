//! Favorites ledger: the (user, restaurant) relation.

use crate::domain::error::DirectoryResult;
use crate::domain::restaurant::Restaurant;
use crate::storage::{JsonStore, FAVORITES_KEY};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use utoipa::ToSchema;

/// The pair is the identity; there is at most one record per pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub user_id: String,
    pub restaurant_id: String,
}

pub struct FavoritesLedger {
    store: JsonStore,
    favorites: Vec<Favorite>,
}

impl FavoritesLedger {
    /// Loads the persisted relation, or starts from `seed` when nothing usable is stored.
    pub async fn load(store: JsonStore, seed: Vec<Favorite>) -> Self {
        let favorites = match store.load::<Vec<Favorite>>(FAVORITES_KEY).await {
            Some(stored) => stored,
            None => {
                debug!(count = seed.len(), "No stored favorites, using seed");
                seed
            }
        };
        Self {
            store,
            favorites: dedup(favorites),
        }
    }

    /// Returns `true` if a new relation was recorded.
    pub async fn add(&mut self, user_id: &str, restaurant_id: &str) -> DirectoryResult<bool> {
        if self.is_favorite(user_id, restaurant_id) {
            return Ok(false);
        }
        let mut next = self.favorites.clone();
        next.push(Favorite {
            user_id: user_id.to_string(),
            restaurant_id: restaurant_id.to_string(),
        });
        self.commit(next).await?;
        Ok(true)
    }

    /// Returns `true` if a relation was deleted.
    pub async fn remove(&mut self, user_id: &str, restaurant_id: &str) -> DirectoryResult<bool> {
        let Some(index) = self.position(user_id, restaurant_id) else {
            return Ok(false);
        };
        let mut next = self.favorites.clone();
        next.remove(index);
        self.commit(next).await?;
        Ok(true)
    }

    pub fn is_favorite(&self, user_id: &str, restaurant_id: &str) -> bool {
        self.position(user_id, restaurant_id).is_some()
    }

    /// The subset of `restaurants` the user has favorited, in `restaurants` order.
    pub fn list_for_user(&self, user_id: &str, restaurants: &[Restaurant]) -> Vec<Restaurant> {
        let ids: HashSet<&str> = self
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .map(|f| f.restaurant_id.as_str())
            .collect();
        restaurants
            .iter()
            .filter(|r| ids.contains(r.id.as_str()))
            .cloned()
            .collect()
    }

    pub fn all(&self) -> &[Favorite] {
        &self.favorites
    }

    fn position(&self, user_id: &str, restaurant_id: &str) -> Option<usize> {
        self.favorites
            .iter()
            .position(|f| f.user_id == user_id && f.restaurant_id == restaurant_id)
    }

    /// Saves `next` and only then makes it the in-memory relation.
    async fn commit(&mut self, next: Vec<Favorite>) -> DirectoryResult<()> {
        self.store.save(FAVORITES_KEY, &next).await?;
        self.favorites = next;
        Ok(())
    }
}

fn dedup(favorites: Vec<Favorite>) -> Vec<Favorite> {
    let mut seen = HashSet::new();
    favorites
        .into_iter()
        .filter(|f| seen.insert(f.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::restaurant::{BudgetRange, Side};
    use crate::domain::error::DirectoryError;
    use crate::storage::kv::testing::FailingStore;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn store() -> JsonStore {
        JsonStore::new(Arc::new(MemoryStore::new()))
    }

    fn restaurant(id: &str) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: format!("R{}", id),
            cuisine: "Cafe".to_string(),
            rating: 4.2,
            location: "Agno".to_string(),
            budget_range: BudgetRange::Under150,
            kind: None,
            payment_mode: None,
            sides: Side::MainGate,
            profile_image: None,
            menu_images: None,
        }
    }

    #[tokio::test]
    async fn add_is_idempotent() {
        let mut ledger = FavoritesLedger::load(store(), vec![]).await;
        assert!(ledger.add("u1", "r1").await.unwrap());
        assert!(!ledger.add("u1", "r1").await.unwrap());
        assert_eq!(ledger.all().len(), 1);
        assert!(ledger.is_favorite("u1", "r1"));
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let mut ledger = FavoritesLedger::load(store(), vec![]).await;
        ledger.add("u1", "r1").await.unwrap();
        assert!(ledger.remove("u1", "r1").await.unwrap());
        assert!(!ledger.remove("u1", "r1").await.unwrap());
        assert!(!ledger.is_favorite("u1", "r1"));
    }

    #[tokio::test]
    async fn list_for_user_keeps_catalogue_order() {
        let mut ledger = FavoritesLedger::load(store(), vec![]).await;
        ledger.add("u1", "r3").await.unwrap();
        ledger.add("u1", "r1").await.unwrap();
        ledger.add("u2", "r2").await.unwrap();

        let catalogue = vec![restaurant("r1"), restaurant("r2"), restaurant("r3")];
        let listed = ledger.list_for_user("u1", &catalogue);
        let ids: Vec<&str> = listed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);
        assert!(listed.iter().all(|r| ledger.is_favorite("u1", &r.id)));
    }

    #[tokio::test]
    async fn reloads_from_store_after_restart() {
        let shared = store();
        let mut ledger = FavoritesLedger::load(shared.clone(), vec![]).await;
        ledger.add("u1", "r1").await.unwrap();
        drop(ledger);

        let seed = vec![Favorite {
            user_id: "seed".to_string(),
            restaurant_id: "r9".to_string(),
        }];
        let reloaded = FavoritesLedger::load(shared, seed).await;
        assert!(reloaded.is_favorite("u1", "r1"));
        assert!(!reloaded.is_favorite("seed", "r9"));
    }

    #[tokio::test]
    async fn seed_duplicates_collapse() {
        let pair = Favorite {
            user_id: "u1".to_string(),
            restaurant_id: "r1".to_string(),
        };
        let ledger = FavoritesLedger::load(store(), vec![pair.clone(), pair]).await;
        assert_eq!(ledger.all().len(), 1);
    }

    #[tokio::test]
    async fn failed_save_leaves_relation_untouched() {
        let seed = vec![Favorite {
            user_id: "u1".to_string(),
            restaurant_id: "r1".to_string(),
        }];
        let mut ledger = FavoritesLedger::load(JsonStore::new(Arc::new(FailingStore)), seed).await;

        let err = ledger.add("u1", "r2").await.unwrap_err();
        assert!(matches!(err, DirectoryError::Storage(_)));
        assert_eq!(err.to_string(), "Storage error: disk full");
        assert!(!ledger.is_favorite("u1", "r2"));
        // A retry must hit storage again rather than report a no-op.
        assert!(ledger.add("u1", "r2").await.is_err());

        assert!(ledger.remove("u1", "r1").await.is_err());
        assert!(ledger.is_favorite("u1", "r1"));
        assert_eq!(ledger.all().len(), 1);
    }
}
