//! Seed fixture: the mock backend document the ledgers fall back to.

use crate::domain::admin::{ContactMessage, RestaurantRequest};
use crate::domain::favorites::Favorite;
use crate::domain::restaurant::Restaurant;
use crate::domain::reviews::Review;
use crate::domain::users::User;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub favorites: Vec<Favorite>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub restaurant_requests: Vec<RestaurantRequest>,
    #[serde(default)]
    pub contact_messages: Vec<ContactMessage>,
}

impl SeedData {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub async fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid seed file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_collections_default_to_empty() {
        let seed = SeedData::from_json(
            r#"{
                "restaurants": [{
                    "id": "1", "name": "Dimsum Treats", "cuisine": "Chinese", "rating": 4.2,
                    "location": "Dagonoy Street", "budgetRange": "10-50", "sides": "North Gate"
                }],
                "reviews": [{
                    "id": "1000", "restaurantId": "1", "userId": "u1", "rating": 5,
                    "comment": "Siomai!", "createdAt": "2024-11-02T08:15:00.000Z"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(seed.restaurants.len(), 1);
        assert_eq!(seed.reviews.len(), 1);
        assert!(seed.favorites.is_empty());
        assert!(seed.users.is_empty());
        assert!(seed.contact_messages.is_empty());
    }
}
