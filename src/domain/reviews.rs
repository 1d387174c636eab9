//! Review ledger: restaurant reviews plus rating aggregation.

use crate::domain::error::{DirectoryError, DirectoryResult};
use crate::domain::ids::next_numeric_id;
use crate::storage::{JsonStore, REVIEWS_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::{debug, warn};
use utoipa::ToSchema;

pub const RATING_RANGE: RangeInclusive<u8> = 1..=5;

/// Reviews at or below this rating land in the moderation queue.
pub const MODERATION_THRESHOLD: u8 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub restaurant_id: String,
    pub user_id: String,
    pub rating: u8,
    pub comment: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

fn validate_rating(rating: u8) -> DirectoryResult<()> {
    if RATING_RANGE.contains(&rating) {
        Ok(())
    } else {
        Err(DirectoryError::Validation(format!(
            "rating must be between {} and {}, got {}",
            RATING_RANGE.start(),
            RATING_RANGE.end(),
            rating
        )))
    }
}

pub struct ReviewLedger {
    store: JsonStore,
    reviews: Vec<Review>,
}

impl ReviewLedger {
    pub async fn load(store: JsonStore, seed: Vec<Review>) -> Self {
        let reviews = match store.load::<Vec<Review>>(REVIEWS_KEY).await {
            Some(stored) => stored,
            None => {
                debug!(count = seed.len(), "No stored reviews, using seed");
                seed
            }
        };
        let reviews = reviews
            .into_iter()
            .filter(|r| {
                let valid = RATING_RANGE.contains(&r.rating);
                if !valid {
                    warn!(review = %r.id, rating = r.rating, "Dropping review with out-of-range rating");
                }
                valid
            })
            .collect();
        Self { store, reviews }
    }

    /// Appends a new review. Several reviews per (user, restaurant) are allowed.
    pub async fn create(
        &mut self,
        restaurant_id: &str,
        user_id: &str,
        rating: u8,
        comment: &str,
    ) -> DirectoryResult<Review> {
        validate_rating(rating)?;

        let review = Review {
            id: next_numeric_id(self.reviews.iter().map(|r| r.id.as_str())),
            restaurant_id: restaurant_id.to_string(),
            user_id: user_id.to_string(),
            rating,
            comment: comment.to_string(),
            created_at: Utc::now(),
        };
        let mut next = self.reviews.clone();
        next.push(review.clone());
        self.commit(next).await?;
        Ok(review)
    }

    /// Rewrites rating and comment; `created_at` is kept. `None` if the id is unknown.
    pub async fn update(
        &mut self,
        review_id: &str,
        rating: u8,
        comment: &str,
    ) -> DirectoryResult<Option<Review>> {
        validate_rating(rating)?;

        let mut next = self.reviews.clone();
        let Some(review) = next.iter_mut().find(|r| r.id == review_id) else {
            return Ok(None);
        };
        review.rating = rating;
        review.comment = comment.to_string();
        let updated = review.clone();
        self.commit(next).await?;
        Ok(Some(updated))
    }

    pub async fn delete(&mut self, review_id: &str) -> DirectoryResult<bool> {
        let Some(index) = self.reviews.iter().position(|r| r.id == review_id) else {
            return Ok(false);
        };
        let mut next = self.reviews.clone();
        next.remove(index);
        self.commit(next).await?;
        Ok(true)
    }

    pub fn get(&self, review_id: &str) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == review_id)
    }

    pub fn list_by_restaurant(&self, restaurant_id: &str) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.restaurant_id == restaurant_id)
            .cloned()
            .collect()
    }

    pub fn list_by_user(&self, user_id: &str) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Mean rating for a restaurant; 0.0 when it has no reviews.
    pub fn average_rating(&self, restaurant_id: &str) -> f64 {
        let (sum, count) = self
            .reviews
            .iter()
            .filter(|r| r.restaurant_id == restaurant_id)
            .fold((0u64, 0u64), |(sum, count), r| (sum + u64::from(r.rating), count + 1));
        if count == 0 {
            return 0.0;
        }
        sum as f64 / count as f64
    }

    pub fn all(&self) -> &[Review] {
        &self.reviews
    }

    pub fn flagged_for_moderation(&self) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.rating <= MODERATION_THRESHOLD)
            .cloned()
            .collect()
    }

    /// Saves `next` and only then makes it the in-memory collection.
    async fn commit(&mut self, next: Vec<Review>) -> DirectoryResult<()> {
        self.store.save(REVIEWS_KEY, &next).await?;
        self.reviews = next;
        Ok(())
    }
}

/// Newest first, the order review lists are shown in.
pub fn sort_newest_first(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
